//! Diagnostic sink port for user-facing status lines.
//!
//! This port abstracts the destination of the harness's diagnostic output
//! (usage text, decode failures, probe status), allowing stdout for the
//! binaries and an in-memory capture for tests. Structured logs go through
//! `tracing` instead.

/// Port for emitting one diagnostic line.
pub trait DiagnosticSinkPort {
    /// Emit `line` (without trailing newline).
    fn emit(&mut self, line: &str);
}

/// Sink that keeps every line in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CapturedDiagnostics {
    lines: Vec<String>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl DiagnosticSinkPort for CapturedDiagnostics {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }
}
