//! Command-line entry points for nativeprobe.
//!
//! `display-image` runs the image display pipeline; `compute-probe` runs
//! the GPU handle probe. Both share the bootstrap, the error boundary and
//! the logging setup defined here.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings (used by integration tests)
#[cfg(test)]
use tempfile as _;

// Used by the binaries to load `.env`
use dotenvy as _;

pub mod bootstrap;
pub mod boundary;
pub mod error;
pub mod handlers;
pub mod logging;

// Re-export primary types for convenient access
pub use bootstrap::CliConfig;
pub use boundary::{guard, report};
pub use error::{CliError, EXIT_FAILURE};
pub use logging::init_tracing;
