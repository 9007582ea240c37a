//! Diagnostic string returned by the compute probe.

use std::fmt;

use thiserror::Error;

/// Fixed text returned by every successful probe invocation.
pub const NATIVE_GREETING: &str = "Greetings from the native world!";

/// Errors raised when building a [`DiagnosticString`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagnosticError {
    /// The text was empty.
    #[error("Diagnostic string must not be empty")]
    Empty,

    /// The text contains a NUL byte and cannot cross a C string boundary.
    #[error("Diagnostic string contains a NUL byte at offset {position}")]
    InteriorNul { position: usize },
}

/// Non-empty text that is safe to hand to a foreign string allocator.
///
/// The NUL check happens once here so adapters never have to fail when
/// converting to a C string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticString(String);

impl DiagnosticString {
    /// Validate and wrap `text`.
    pub fn new(text: impl Into<String>) -> Result<Self, DiagnosticError> {
        let text = text.into();
        if text.is_empty() {
            return Err(DiagnosticError::Empty);
        }
        if let Some(position) = text.bytes().position(|b| b == 0) {
            return Err(DiagnosticError::InteriorNul { position });
        }
        Ok(Self(text))
    }

    /// The probe's standard greeting.
    pub fn greeting() -> Self {
        Self(NATIVE_GREETING.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for DiagnosticString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DiagnosticString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_is_valid() {
        let greeting = DiagnosticString::greeting();
        assert_eq!(greeting.as_str(), NATIVE_GREETING);
        assert_eq!(DiagnosticString::new(NATIVE_GREETING), Ok(greeting));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(DiagnosticString::new(""), Err(DiagnosticError::Empty));
    }

    #[test]
    fn test_rejects_interior_nul() {
        assert_eq!(
            DiagnosticString::new("abc\0def"),
            Err(DiagnosticError::InteriorNul { position: 3 })
        );
    }
}
