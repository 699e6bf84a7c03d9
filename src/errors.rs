//! Shared error types for the library.
//!
//! The classifier itself never fails; these errors come from the edges:
//! parsing raw trait codes and reading configuration files.
//! The binary wraps them in `anyhow` for reporting.

use std::path::PathBuf;
use thiserror::Error;

use crate::traits::{expected_values, TraitKind, TraitValue};

#[derive(Debug, Error)]
pub enum ShroomError {
    /// A raw value that is not a member of its trait enumeration
    #[error("unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownTraitCode {
        kind: TraitKind,
        value: String,
        expected: String,
    },

    /// Configuration file could not be parsed
    #[error("Configuration error: {message}{}", in_file(.path))]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn in_file(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" (in {})", p.display()))
        .unwrap_or_default()
}

impl ShroomError {
    pub fn unknown_trait<T: TraitValue>(value: impl Into<String>) -> Self {
        Self::UnknownTraitCode {
            kind: T::KIND,
            value: value.into(),
            expected: expected_values::<T>(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShroomError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::GillSize;

    #[test]
    fn unknown_trait_message_lists_expected_codes() {
        let err = ShroomError::unknown_trait::<GillSize>("wide");
        assert_eq!(
            err.to_string(),
            "unknown gill size 'wide' (expected one of: b (Broad), n (Narrow))"
        );
    }

    #[test]
    fn io_errors_display_transparently() {
        let err: ShroomError = std::io::Error::other("disk on fire").into();
        assert_eq!(err.to_string(), "disk on fire");
    }

    #[test]
    fn config_error_keeps_path() {
        let err = ShroomError::config_with_path("bad toml", "/tmp/.shroomcheck.toml");
        assert_eq!(
            err.to_string(),
            "Configuration error: bad toml (in /tmp/.shroomcheck.toml)"
        );
        assert_eq!(ShroomError::config("bad toml").to_string(), "Configuration error: bad toml");
        match err {
            ShroomError::Config { path, .. } => {
                assert_eq!(path, Some(PathBuf::from("/tmp/.shroomcheck.toml")))
            }
            _ => panic!("expected config error"),
        }
    }
}
