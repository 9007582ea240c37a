//! Port definitions (trait abstractions) for external collaborators.
//!
//! Ports define the interfaces that the core expects from native libraries.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `wgpu`, `image` or `minifb` types in any signature
//! - Decode failures a user can cause are values, not errors
//! - Every acquire has exactly one matching release

pub mod compute_library;
pub mod diagnostic_sink;
pub mod display;
pub mod foreign_string;
pub mod image_codec;

use thiserror::Error;

pub use compute_library::{ComputeLibraryPort, ComputeStatus};
pub use diagnostic_sink::{CapturedDiagnostics, DiagnosticSinkPort};
pub use display::{DisplayError, DisplayPort, Dismissal, SizingPolicy, SurfaceId, WaitTimeout};
pub use foreign_string::{ForeignStringPort, OwnedStringBoundary};
pub use image_codec::{CodecError, ImageCodecPort};

/// Core error type for failures that escape a service.
///
/// Adapters map this to their own error types (CLI exit codes, C return
/// values).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Image codec failed unexpectedly.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Display surface operation failed.
    #[error(transparent)]
    Display(#[from] DisplayError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),
}
