//! Compute-handle probe.
//!
//! Acquires a handle from the compute library, reports the status, releases
//! the handle and returns the greeting through the foreign string boundary.
//! Acquisition failure is reported, never escalated.

use crate::domain::{DiagnosticString, ScopedHandle};
use crate::ports::{ComputeLibraryPort, DiagnosticSinkPort, ForeignStringPort};

/// First line emitted by every probe.
pub const PROBE_MARKER: &str = "hello compute";

/// Probe over a compute library and a string boundary.
pub struct ComputeProbe<'a, L: ?Sized, F: ?Sized> {
    library: &'a L,
    strings: &'a F,
}

impl<'a, L, F> ComputeProbe<'a, L, F>
where
    L: ComputeLibraryPort + ?Sized,
    F: ForeignStringPort + ?Sized,
{
    pub const fn new(library: &'a L, strings: &'a F) -> Self {
        Self { library, strings }
    }

    /// Run one acquire/report/release cycle.
    ///
    /// The returned value is owned by the caller; for C callers that means
    /// freeing it through the boundary's deallocation routine.
    pub fn probe(&self, sink: &mut dyn DiagnosticSinkPort) -> F::Owned {
        sink.emit(PROBE_MARKER);

        let handle = ScopedHandle::acquire(self.library);
        let status = handle.status();
        sink.emit(&format!("status {status}"));
        if !status.is_success() {
            tracing::warn!(
                code = status.code(),
                "Compute library could not be initialised"
            );
        }
        handle.release();

        self.strings.allocate(&DiagnosticString::greeting())
    }
}

/// Convenience wrapper around [`ComputeProbe::probe`].
pub fn probe<L, F>(library: &L, strings: &F, sink: &mut dyn DiagnosticSinkPort) -> F::Owned
where
    L: ComputeLibraryPort + ?Sized,
    F: ForeignStringPort + ?Sized,
{
    ComputeProbe::new(library, strings).probe(sink)
}
