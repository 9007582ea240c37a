//! Compute probe handler.

use nativeprobe_ffi::probe_with;
use nativeprobe_runtime::{StdoutSink, WgpuComputeLibrary};

/// Probe the GPU and return the greeting.
///
/// The C-owned string produced by the probe is copied out and freed before
/// returning.
pub fn execute() -> String {
    let library = WgpuComputeLibrary::default();
    let owned = probe_with(&library, &mut StdoutSink);
    owned.to_string_lossy()
}
