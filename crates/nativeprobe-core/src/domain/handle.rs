//! Scoped ownership of a native compute handle.

use crate::ports::{ComputeLibraryPort, ComputeStatus};

/// Whether a handle currently refers to live library state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleState {
    Unbound,
    Bound,
}

/// A compute handle that is released exactly once when dropped.
///
/// `ScopedHandle` pairs one `acquire` with one `release` on the borrowed
/// library, whatever the acquisition status and whatever path leaves the
/// scope (early return, `?`, unwinding).
pub struct ScopedHandle<'lib, L: ComputeLibraryPort + ?Sized> {
    library: &'lib L,
    handle: Option<L::Handle>,
    status: ComputeStatus,
}

impl<'lib, L: ComputeLibraryPort + ?Sized> ScopedHandle<'lib, L> {
    /// Acquire a handle from `library`.
    pub fn acquire(library: &'lib L) -> Self {
        let (handle, status) = library.acquire();
        if handle.is_some() && !status.is_success() {
            tracing::warn!(
                code = status.code(),
                "Compute library bound a handle despite a failure status"
            );
        }
        tracing::debug!(
            code = status.code(),
            bound = handle.is_some(),
            "Compute handle acquired"
        );
        Self {
            library,
            handle,
            status,
        }
    }

    pub const fn status(&self) -> ComputeStatus {
        self.status
    }

    pub const fn state(&self) -> HandleState {
        if self.handle.is_some() {
            HandleState::Bound
        } else {
            HandleState::Unbound
        }
    }

    /// Borrow the library handle. Yields `None` while unbound.
    pub const fn get(&self) -> Option<&L::Handle> {
        self.handle.as_ref()
    }

    /// Release the handle now instead of at end of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<L: ComputeLibraryPort + ?Sized> Drop for ScopedHandle<'_, L> {
    fn drop(&mut self) {
        let handle = self.handle.take();
        tracing::debug!(bound = handle.is_some(), "Releasing compute handle");
        self.library.release(handle);
    }
}
