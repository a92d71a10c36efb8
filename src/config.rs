use crate::CharClass;

/// What a generated password may contain, and how long it is.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PasswordConfig {
    pub length: usize,
    pub use_upper: bool,
    pub use_lower: bool,
    pub use_digits: bool,
    pub use_special: bool,
    /// Drop visually confusable letters and digits (`I L O i l o 0 1`).
    pub no_similar: bool,
    /// Drop brackets, quotes and other punctuation that is awkward to type or quote.
    pub no_ambiguous: bool,
}

impl Default for PasswordConfig {
    fn default() -> PasswordConfig {
        PasswordConfig {
            length: 16,
            use_upper: true,
            use_lower: true,
            use_digits: true,
            use_special: true,
            no_similar: false,
            no_ambiguous: false,
        }
    }
}

impl PasswordConfig {
    pub fn uses(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.use_upper,
            CharClass::Lower => self.use_lower,
            CharClass::Digits => self.use_digits,
            CharClass::Special => self.use_special,
        }
    }

    /// The enabled classes, in canonical order.
    pub fn enabled_classes(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL
            .iter()
            .copied()
            .filter(move |class| self.uses(*class))
    }
}
