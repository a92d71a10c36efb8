use std::io::{self, Write};
use std::process;

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pwgen::PasswordConfig;

/// Generate random passwords from a secure random source.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Length of the password.
    #[arg(long, env = "PWGEN_LENGTH", default_value_t = 16, allow_negative_numbers = true)]
    length: i64,
    /// Number of passwords to generate.
    #[arg(long, env = "PWGEN_COUNT", default_value_t = 1, allow_negative_numbers = true)]
    count: i64,
    /// Include uppercase letters.
    #[arg(long, env = "PWGEN_UPPER", default_value_t = true, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    upper: bool,
    /// Include lowercase letters.
    #[arg(long, env = "PWGEN_LOWER", default_value_t = true, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    lower: bool,
    /// Include digits.
    #[arg(long, env = "PWGEN_DIGITS", default_value_t = true, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    digits: bool,
    /// Include special characters.
    #[arg(long, env = "PWGEN_SPECIAL", default_value_t = true, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    special: bool,
    /// Exclude similar characters (i, l, 1, L, o, 0, O).
    #[arg(long, env = "PWGEN_NO_SIMILAR", default_value_t = false, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    no_similar: bool,
    /// Exclude ambiguous characters ({ } [ ] ( ) / \ ' " ` ~ , ; : . < >).
    #[arg(long, env = "PWGEN_NO_AMBIGUOUS", default_value_t = false, action = ArgAction::Set,
          num_args = 0..=1, default_missing_value = "true")]
    no_ambiguous: bool,
}

impl Args {
    /// Check the arguments, and turn them into a password configuration plus a count.
    fn validate(&self) -> Result<(PasswordConfig, usize), ProgError> {
        let length = usize::try_from(self.length)
            .ok()
            .filter(|l| *l >= 1)
            .ok_or(ProgError::InvalidLength)?;
        let count = usize::try_from(self.count)
            .ok()
            .filter(|c| *c >= 1)
            .ok_or(ProgError::InvalidCount)?;
        if !(self.upper || self.lower || self.digits || self.special) {
            return Err(ProgError::NoCharacterSets);
        }
        let config = PasswordConfig {
            length,
            use_upper: self.upper,
            use_lower: self.lower,
            use_digits: self.digits,
            use_special: self.special,
            no_similar: self.no_similar,
            no_ambiguous: self.no_ambiguous,
        };
        Ok((config, count))
    }
}

fn run() -> Result<(), ProgError> {
    let args = Args::parse();
    let (config, count) = args.validate()?;
    tracing::debug!(?config, count, "validated arguments");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..count {
        let password = pwgen::generate(&config)?;
        writeln!(out, "{}", password.as_str()).context("failed to write password to stdout")?;
    }
    out.flush().context("failed to flush stdout")?;
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pwgen=warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();

    match run() {
        Ok(()) => (),
        Err(err) => {
            tracing::debug!(error = ?err, "exiting with failure");
            eprintln!("Error: {err:#}");
            process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error("Password length must be at least 1")]
    InvalidLength,
    #[error("Count must be at least 1")]
    InvalidCount,
    #[error("At least one character set must be selected")]
    NoCharacterSets,
    #[error("failed to generate password: {0}")]
    Generation(#[from] pwgen::GenerationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
