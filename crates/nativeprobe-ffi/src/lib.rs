//! C ABI for the nativeprobe compute probe.
//!
//! The probe's result crosses into the caller's ownership domain as a heap
//! C string. See `include/nativeprobe.h` for the C declarations.

pub mod boundary;
pub mod exports;

pub use boundary::{CStringBoundary, ForeignOwnedString};
pub use exports::{nativeprobe_probe, nativeprobe_string_free, probe_with};
