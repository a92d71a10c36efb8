//! Character classes and the pool built from them.

use crate::PasswordConfig;

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SPECIAL: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Characters that are easy to mistake for one another. Applies to letters and digits.
pub static SIMILAR: &str = "ILOilo01";
/// Punctuation that is awkward in some contexts. Applies to the special class.
pub static AMBIGUOUS: &str = "{}[]()/\\'\"`~,;:.<>";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharClass {
    /// Every class, in the order they are concatenated into the pool.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Special,
    ];

    pub fn base(self) -> &'static str {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Upper => "upper",
            CharClass::Lower => "lower",
            CharClass::Digits => "digits",
            CharClass::Special => "special",
        }
    }

    /// The exclusion set that `config` asks to be removed from this class, if any.
    fn exclusions(self, config: &PasswordConfig) -> Option<&'static str> {
        match self {
            CharClass::Upper | CharClass::Lower | CharClass::Digits if config.no_similar => {
                Some(SIMILAR)
            }
            CharClass::Special if config.no_ambiguous => Some(AMBIGUOUS),
            _ => None,
        }
    }

    /// This class's characters after applying the exclusion rules in `config`.
    ///
    /// This ignores whether the class is enabled.
    pub fn filtered(self, config: &PasswordConfig) -> String {
        match self.exclusions(config) {
            Some(excluded) => remove_chars(self.base(), excluded),
            None => self.base().to_owned(),
        }
    }

    pub fn contains(self, config: &PasswordConfig, ch: char) -> bool {
        self.base().contains(ch) && !self.exclusions(config).map_or(false, |ex| ex.contains(ch))
    }
}

/// Remove every occurrence of every character in `excluded` from `source`, keeping the order of
/// what remains.
pub fn remove_chars(source: &str, excluded: &str) -> String {
    source.chars().filter(|ch| !excluded.contains(*ch)).collect()
}

/// Build the pool of characters a password is drawn from.
///
/// An empty result is not an error here; callers decide what to do with it.
pub fn build(config: &PasswordConfig) -> String {
    let mut pool = String::new();
    for class in config.enabled_classes() {
        pool.push_str(&class.filtered(config));
    }
    tracing::trace!(pool_size = pool.chars().count(), "built character pool");
    pool
}
