//! Diagnostic sinks for the binaries.

use nativeprobe_core::DiagnosticSinkPort;

/// Writes each diagnostic line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DiagnosticSinkPort for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{line}");
    }
}
