//! Foreign string boundary port.
//!
//! The probe's result is allocated by whoever sits on the other side of the
//! call: a C caller gets a heap C string it must hand back for freeing, a
//! Rust caller just gets a `String`. The core only sees the associated
//! `Owned` type, whose ownership passes to the caller on return.

use crate::domain::DiagnosticString;

/// Port for allocating a string in the caller's ownership domain.
pub trait ForeignStringPort {
    /// Caller-owned allocation. Whoever receives it is responsible for
    /// freeing it with the boundary's matching deallocation routine.
    type Owned;

    fn allocate(&self, text: &DiagnosticString) -> Self::Owned;
}

/// Boundary for in-process Rust callers: ownership is an ordinary `String`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OwnedStringBoundary;

impl ForeignStringPort for OwnedStringBoundary {
    type Owned = String;

    fn allocate(&self, text: &DiagnosticString) -> String {
        text.as_str().to_owned()
    }
}
