//! Random password generation from a configurable alphabet.
//!
//! The alphabet is assembled from up to four character classes, each optionally filtered by an
//! exclusion set; characters are drawn from it with a cryptographically secure RNG, and the result
//! is patched so that every enabled class is represented whenever the length allows it.

use zeroize::Zeroize;

pub mod charset;
mod config;
pub mod password_generation;
pub mod sampler;

pub use charset::CharClass;
pub use config::PasswordConfig;
pub use password_generation::{generate, generate_many, generate_with};

/// A generated password.
///
/// The `Debug` representation never shows the contents, and the buffer is wiped when dropped.
#[derive(Clone, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    /// Sampling was attempted against an empty pool. Configuration validation should make this
    /// unreachable.
    #[error("character pool is empty")]
    EmptyPool,
    #[error("the secure random source failed: {0}")]
    RandomSource(#[source] rand::Error),
}

impl From<rand::Error> for GenerationError {
    fn from(err: rand::Error) -> GenerationError {
        GenerationError::RandomSource(err)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("no character sets selected")]
    NoCharacterSets,
    #[error("invalid length")]
    InvalidLength,
}
