//! Domain types shared by the services and the adapters.
//!
//! These are pure values with no infrastructure dependencies, except for
//! [`ScopedHandle`], which borrows a [`crate::ports::ComputeLibraryPort`] to
//! guarantee release.

mod diagnostic;
mod handle;
mod image;

pub use diagnostic::{DiagnosticError, DiagnosticString, NATIVE_GREETING};
pub use handle::{HandleState, ScopedHandle};
pub use image::{ColorMode, ImageBuffer};
