//! Exported C ABI.
//!
//! ```c
//! char *nativeprobe_probe(void);
//! void nativeprobe_string_free(char *s);
//! ```
//!
//! Every non-null string returned by `nativeprobe_probe` belongs to the
//! caller and must be passed to `nativeprobe_string_free` exactly once.

use std::ffi::c_char;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::ptr;

use nativeprobe_core::{ComputeLibraryPort, DiagnosticSinkPort};
use nativeprobe_runtime::{StdoutSink, WgpuComputeLibrary};

use crate::boundary::{CStringBoundary, ForeignOwnedString};

/// Run the compute probe against `library`, producing a C-owned result.
pub fn probe_with<L>(library: &L, sink: &mut dyn DiagnosticSinkPort) -> ForeignOwnedString
where
    L: ComputeLibraryPort + ?Sized,
{
    nativeprobe_core::probe(library, &CStringBoundary, sink)
}

/// Probe the GPU and return the greeting as a caller-owned C string.
///
/// Writes `hello compute` and `status <code>` to stdout. Returns null only
/// if the probe panicked; the handle has been released either way.
#[unsafe(no_mangle)]
pub extern "C" fn nativeprobe_probe() -> *mut c_char {
    let library = WgpuComputeLibrary::default();
    let mut sink = StdoutSink;
    match catch_unwind(AssertUnwindSafe(|| probe_with(&library, &mut sink))) {
        Ok(owned) => owned.into_raw(),
        Err(_) => {
            tracing::error!("Compute probe panicked");
            ptr::null_mut()
        }
    }
}

/// Free a string returned by [`nativeprobe_probe`]. Null is ignored.
///
/// # Safety
///
/// `s` must be null or a pointer returned by `nativeprobe_probe` that has
/// not been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn nativeprobe_string_free(s: *mut c_char) {
    // SAFETY: forwarded caller contract.
    drop(unsafe { ForeignOwnedString::from_raw(s) });
}
