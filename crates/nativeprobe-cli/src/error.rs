//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the mapping
//! from `CoreError` to user-facing messages. Every escaped failure exits
//! with the same failure status; diagnostic-only early returns are not
//! errors and exit 0.

use nativeprobe_core::CoreError;
use thiserror::Error;

/// Exit status for any failure that reaches the top-level boundary.
pub const EXIT_FAILURE: u8 = 1;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error raised by a handler.
    #[error("{0}")]
    Other(String),

    /// A panic unwound to the boundary.
    #[error("Unhandled panic!")]
    Panic,
}

impl CliError {
    /// Map error to the process exit code.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) | Self::Config(_) | Self::Other(_) | Self::Panic => EXIT_FAILURE,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Codec(_) | CoreError::Display(_) => Self::Core(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<CoreError>() {
            Ok(core) => core.into(),
            Err(other) => Self::Other(format!("{other:#}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use nativeprobe_core::{DisplayError, SettingsError};

    use super::*;

    #[test]
    fn test_settings_error_maps_to_config() {
        let err = CliError::from(CoreError::Settings(SettingsError::EmptyWindowName));
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_anyhow_core_error_is_recovered() {
        let err = CliError::from(anyhow::Error::new(CoreError::Display(
            DisplayError::EmptyImage,
        )));
        assert!(matches!(err, CliError::Core(msg) if msg == "Cannot present an empty image"));
    }

    #[test]
    fn test_plain_anyhow_error_keeps_context() {
        let err = CliError::from(anyhow::anyhow!("inner").context("outer"));
        assert_eq!(err.to_string(), "outer: inner");
    }
}
