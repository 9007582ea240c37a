//! Core domain for nativeprobe.
//!
//! This crate owns the resource lifecycle rules for the two native
//! subsystems the harness exercises: the compute-handle probe and the image
//! display pipeline. Collaborators (GPU library, image codec, windowing,
//! foreign string allocator) are reached only through the traits in
//! [`ports`]; concrete adapters live in `nativeprobe-runtime` and
//! `nativeprobe-ffi`.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ColorMode, DiagnosticError, DiagnosticString, HandleState, ImageBuffer, NATIVE_GREETING,
    ScopedHandle,
};
pub use ports::{
    CapturedDiagnostics, CodecError, ComputeLibraryPort, ComputeStatus, CoreError,
    DiagnosticSinkPort, Dismissal, DisplayError, DisplayPort, ForeignStringPort,
    ImageCodecPort, OwnedStringBoundary, SizingPolicy, SurfaceId, WaitTimeout,
};
pub use services::{
    ComputeProbe, DisplayPipeline, EXPECTED_ARGS, NO_IMAGE_DATA, PROBE_MARKER, PipelineConfig,
    PipelineOutcome, USAGE, probe,
};
pub use settings::{DEFAULT_WINDOW_NAME, Settings, SettingsError, validate_settings};
