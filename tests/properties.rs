use proptest::prelude::*;
use pwgen::charset::{AMBIGUOUS, SIMILAR};
use pwgen::{CharClass, ConfigurationError, GenerationError, PasswordConfig};

fn arb_config() -> impl Strategy<Value = PasswordConfig> {
    (
        1usize..64,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_filter("at least one class", |(_, u, l, d, s, _, _)| {
            *u || *l || *d || *s
        })
        .prop_map(
            |(length, use_upper, use_lower, use_digits, use_special, no_similar, no_ambiguous)| {
                PasswordConfig {
                    length,
                    use_upper,
                    use_lower,
                    use_digits,
                    use_special,
                    no_similar,
                    no_ambiguous,
                }
            },
        )
}

fn arb_class() -> impl Strategy<Value = CharClass> {
    prop_oneof![
        Just(CharClass::Upper),
        Just(CharClass::Lower),
        Just(CharClass::Digits),
        Just(CharClass::Special),
    ]
}

proptest! {
    #[test]
    fn length_matches_config(config in arb_config()) {
        let password = pwgen::generate(&config).unwrap();
        prop_assert_eq!(password.as_str().chars().count(), config.length);
    }

    #[test]
    fn everything_comes_from_the_pool(config in arb_config()) {
        let pool = pwgen::charset::build(&config);
        let password = pwgen::generate(&config).unwrap();
        prop_assert!(password.as_str().chars().all(|ch| pool.contains(ch)));
    }

    #[test]
    fn single_class_stays_in_class(class in arb_class(), length in 1usize..64) {
        let config = PasswordConfig {
            length,
            use_upper: class == CharClass::Upper,
            use_lower: class == CharClass::Lower,
            use_digits: class == CharClass::Digits,
            use_special: class == CharClass::Special,
            no_similar: false,
            no_ambiguous: false,
        };
        let password = pwgen::generate(&config).unwrap();
        prop_assert!(password.as_str().chars().all(|ch| class.base().contains(ch)));
    }

    #[test]
    fn no_similar_excludes_similar(config in arb_config()) {
        let config = PasswordConfig { no_similar: true, ..config };
        let password = pwgen::generate(&config).unwrap();
        prop_assert!(!password.as_str().chars().any(|ch| SIMILAR.contains(ch)));
    }

    #[test]
    fn no_ambiguous_excludes_ambiguous(config in arb_config()) {
        let config = PasswordConfig { no_ambiguous: true, ..config };
        let password = pwgen::generate(&config).unwrap();
        prop_assert!(!password.as_str().chars().any(|ch| AMBIGUOUS.contains(ch)));
    }

    #[test]
    fn no_classes_never_yields_a_password(length in 0usize..64) {
        let config = PasswordConfig {
            length,
            use_upper: false,
            use_lower: false,
            use_digits: false,
            use_special: false,
            ..PasswordConfig::default()
        };
        prop_assert!(matches!(
            pwgen::generate(&config),
            Err(GenerationError::Configuration(ConfigurationError::NoCharacterSets))
        ));
    }

    #[test]
    fn coverage_when_length_allows(config in arb_config()) {
        let config = PasswordConfig {
            length: config.length.max(4),
            ..config
        };
        let password = pwgen::generate(&config).unwrap();
        for class in config.enabled_classes() {
            prop_assert!(
                password.as_str().chars().any(|ch| class.contains(&config, ch)),
                "{} missing",
                class.name()
            );
        }
    }
}
