//! Utilities for generating passwords.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::charset::{self, CharClass};
use crate::sampler::{sample, uniform_index};
use crate::{ConfigurationError, GenerationError, PasswordConfig, Secret};

/// Generate a password for `config` using the operating system's entropy source.
pub fn generate(config: &PasswordConfig) -> Result<Secret, GenerationError> {
    generate_with(&mut OsRng, config)
}

/// Generate a password for `config`, drawing randomness from `rng`.
///
/// Characters are sampled independently and uniformly from the pool returned by
/// [`charset::build`]. Every enabled class missing from that draft then gets one of its characters
/// written over a uniformly chosen position that does not hold the sole representative of another
/// class. When the password is at least as long as the number of enabled classes, every enabled
/// class is therefore present. Shorter passwords cannot cover every class; there, once no such
/// position remains, any position may be overwritten.
pub fn generate_with<R>(rng: &mut R, config: &PasswordConfig) -> Result<Secret, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pool = charset::build(config).chars().collect::<Vec<_>>();
    if pool.is_empty() {
        return Err(ConfigurationError::NoCharacterSets.into());
    }
    if config.length < 1 {
        return Err(ConfigurationError::InvalidLength.into());
    }
    tracing::debug!(
        length = config.length,
        pool_size = pool.len(),
        "generating password"
    );

    let mut password = Zeroizing::new(Vec::with_capacity(config.length));
    for _ in 0..config.length {
        password.push(sample(rng, &pool)?);
    }

    enforce_coverage(rng, config, &mut password)?;

    Ok(Secret::from(password.iter().collect::<String>()))
}

/// Generate `count` passwords for `config`.
///
/// Stops at the first error; nothing generated before it is returned.
pub fn generate_many<R>(
    rng: &mut R,
    config: &PasswordConfig,
    count: usize,
) -> Result<Vec<Secret>, GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        passwords.push(generate_with(rng, config)?);
    }
    Ok(passwords)
}

/// Write a representative of every enabled class that `password` lacks.
fn enforce_coverage<R>(
    rng: &mut R,
    config: &PasswordConfig,
    password: &mut [char],
) -> Result<(), GenerationError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let classes = config.enabled_classes().collect::<Vec<CharClass>>();
    let class_of = |ch: char| classes.iter().position(|class| class.contains(config, ch));

    let mut counts = vec![0usize; classes.len()];
    for ch in password.iter() {
        if let Some(idx) = class_of(*ch) {
            counts[idx] += 1;
        }
    }
    let missing = (0..classes.len())
        .filter(|idx| counts[*idx] == 0)
        .collect::<Vec<_>>();

    for idx in missing {
        // Positions that can be overwritten without losing a class.
        let spare = password
            .iter()
            .enumerate()
            .filter(|(_, ch)| class_of(**ch).map_or(true, |owner| counts[owner] > 1))
            .map(|(position, _)| position)
            .collect::<Vec<_>>();
        let position = if spare.is_empty() {
            tracing::debug!(
                length = password.len(),
                classes = classes.len(),
                "password too short to hold every class"
            );
            uniform_index(rng, password.len())?
        } else {
            spare[uniform_index(rng, spare.len())?]
        };

        if let Some(owner) = class_of(password[position]) {
            counts[owner] -= 1;
        }
        let class = classes[idx];
        let members = class.filtered(config).chars().collect::<Vec<_>>();
        password[position] = sample(rng, &members)?;
        counts[idx] += 1;
        tracing::trace!(class = class.name(), position, "repaired missing character class");
    }
    Ok(())
}
