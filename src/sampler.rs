//! Unbiased sampling from a character pool.

use rand::{CryptoRng, RngCore};

use crate::GenerationError;

/// Draw an index uniformly from `0..bound`.
///
/// `rand`'s own uniform sampler does the same rejection dance, but it panics if the RNG fails;
/// this goes through `try_fill_bytes` so that an unavailable entropy source comes back as an
/// error. Words in the incomplete top zone of the `u64` range (the last `2^64 mod bound` values)
/// are re-drawn, so every index is equally likely.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub fn uniform_index<R>(rng: &mut R, bound: usize) -> Result<usize, rand::Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    assert!(bound > 0, "uniform_index called with an empty range");
    let bound = bound as u64;
    // 2^64 mod bound, computed without overflowing.
    let reject = (u64::MAX - bound + 1) % bound;
    let limit = u64::MAX - reject;
    loop {
        let mut buf = [0u8; 8];
        rng.try_fill_bytes(&mut buf)?;
        let word = u64::from_le_bytes(buf);
        if word <= limit {
            return Ok((word % bound) as usize);
        }
        tracing::trace!(bound, "rejected out-of-zone random word");
    }
}

/// Pick one character from `pool`, uniformly and with replacement.
pub fn sample<R>(rng: &mut R, pool: &[char]) -> Result<char, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if pool.is_empty() {
        return Err(GenerationError::EmptyPool);
    }
    let idx = uniform_index(rng, pool.len())?;
    Ok(pool[idx])
}
