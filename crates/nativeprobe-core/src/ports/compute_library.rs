//! Compute library port for opaque GPU handle acquisition.
//!
//! This port abstracts a native compute library that hands out a
//! process-wide context handle. The library owns the handle's internals;
//! the core only pairs every acquisition with exactly one release.
//!
//! # Design Notes
//!
//! - Core owns the trait and the status type
//! - Runtime owns the implementation (wgpu adapter + device request)
//! - A failed acquisition still produces a `release(None)` call, so
//!   implementations must treat an unbound release as a no-op

use std::fmt;

/// Status code reported by a compute library acquisition.
///
/// Zero means success. Non-zero values are library-defined and opaque to
/// the core; the associated constants cover the codes the bundled adapter
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComputeStatus(i32);

impl ComputeStatus {
    /// The handle was bound.
    pub const SUCCESS: Self = Self(0);
    /// No device or driver could be initialised.
    pub const NOT_INITIALIZED: Self = Self(1);
    /// A device was found but its context could not be allocated.
    pub const ALLOC_FAILED: Self = Self(2);

    pub const fn from_code(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ComputeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for acquiring and releasing a native compute handle.
///
/// # Example
///
/// ```ignore
/// use nativeprobe_core::ScopedHandle;
///
/// let handle = ScopedHandle::acquire(&library);
/// println!("status {}", handle.status());
/// // released when `handle` goes out of scope
/// ```
pub trait ComputeLibraryPort {
    /// Opaque library state bound by a successful acquisition.
    type Handle;

    /// Request a handle from the library.
    ///
    /// Returns `None` for the handle whenever the library could not bind
    /// one; the status carries the reason.
    fn acquire(&self) -> (Option<Self::Handle>, ComputeStatus);

    /// Release a handle previously returned by [`acquire`](Self::acquire).
    ///
    /// Called exactly once per acquisition, including with `None` after a
    /// failed acquisition.
    fn release(&self, handle: Option<Self::Handle>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert!(ComputeStatus::SUCCESS.is_success());
        assert!(!ComputeStatus::NOT_INITIALIZED.is_success());
        assert_eq!(ComputeStatus::from_code(7).code(), 7);
        assert_eq!(ComputeStatus::ALLOC_FAILED.to_string(), "2");
    }
}
