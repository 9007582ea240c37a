//! Top-level fault boundary.
//!
//! Errors and panics escaping a handler are caught here, reported on stderr
//! and turned into the failure exit status.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::process::ExitCode;

use crate::error::CliError;

/// Run `handler`, converting both returned errors and panics to [`CliError`].
pub fn guard<T, F>(handler: F) -> Result<T, CliError>
where
    F: FnOnce() -> anyhow::Result<T>,
{
    match catch_unwind(AssertUnwindSafe(handler)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(err.into()),
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
                .unwrap_or("<non-string panic payload>");
            tracing::error!(message, "Handler panicked");
            Err(CliError::Panic)
        }
    }
}

/// Print `err` to stderr and return its exit status.
pub fn report(err: &CliError) -> ExitCode {
    eprintln!("{err}");
    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_passes_through() {
        assert_eq!(guard(|| Ok(5)).unwrap(), 5);
    }

    #[test]
    fn test_error_is_converted() {
        let err = guard::<(), _>(|| anyhow::bail!("decoder exploded")).unwrap_err();
        assert!(matches!(err, CliError::Other(msg) if msg == "decoder exploded"));
    }

    #[test]
    fn test_panic_is_caught() {
        let err = guard::<(), _>(|| panic!("window system vanished")).unwrap_err();
        assert!(matches!(err, CliError::Panic));
        assert_eq!(err.to_string(), "Unhandled panic!");
    }
}
