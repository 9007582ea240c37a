//! Heap C strings whose ownership can be handed to a foreign caller.

use std::ffi::{CStr, CString, c_char};

use nativeprobe_core::{DiagnosticString, ForeignStringPort};

/// A NUL-terminated string allocated for a C caller.
///
/// While held in Rust it frees itself on drop. [`into_raw`](Self::into_raw)
/// transfers ownership across the boundary; the foreign side must then give
/// the pointer back to `nativeprobe_string_free` exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct ForeignOwnedString {
    inner: CString,
}

impl ForeignOwnedString {
    pub fn new(text: &DiagnosticString) -> Self {
        // DiagnosticString rejects interior NULs, so this never falls back.
        let inner = CString::new(text.as_str()).unwrap_or_default();
        Self { inner }
    }

    /// Give up ownership to the caller.
    pub fn into_raw(self) -> *mut c_char {
        self.inner.into_raw()
    }

    /// Take back ownership of a pointer produced by [`into_raw`](Self::into_raw).
    ///
    /// Returns `None` for a null pointer.
    ///
    /// # Safety
    ///
    /// `ptr` must be null or a pointer obtained from `into_raw` that has not
    /// already been reclaimed.
    pub unsafe fn from_raw(ptr: *mut c_char) -> Option<Self> {
        if ptr.is_null() {
            return None;
        }
        // SAFETY: non-null and, per the caller contract, produced by
        // `CString::into_raw` and not reclaimed yet.
        let inner = unsafe { CString::from_raw(ptr) };
        Some(Self { inner })
    }

    pub fn as_c_str(&self) -> &CStr {
        &self.inner
    }

    pub fn to_string_lossy(&self) -> String {
        self.inner.to_string_lossy().into_owned()
    }
}

/// Foreign string boundary producing [`ForeignOwnedString`]s.
#[derive(Debug, Default, Clone, Copy)]
pub struct CStringBoundary;

impl ForeignStringPort for CStringBoundary {
    type Owned = ForeignOwnedString;

    fn allocate(&self, text: &DiagnosticString) -> ForeignOwnedString {
        ForeignOwnedString::new(text)
    }
}

#[cfg(test)]
mod tests {
    use nativeprobe_core::NATIVE_GREETING;

    use super::*;

    #[test]
    fn test_allocate_copies_text() {
        let owned = CStringBoundary.allocate(&DiagnosticString::greeting());
        assert_eq!(owned.as_c_str().to_str(), Ok(NATIVE_GREETING));
    }

    #[test]
    fn test_raw_round_trip_preserves_text() {
        let raw = CStringBoundary
            .allocate(&DiagnosticString::new("status 0").unwrap())
            .into_raw();
        assert!(!raw.is_null());

        let back = unsafe { ForeignOwnedString::from_raw(raw) }.unwrap();
        assert_eq!(back.to_string_lossy(), "status 0");
    }

    #[test]
    fn test_null_is_not_reclaimed() {
        assert!(unsafe { ForeignOwnedString::from_raw(std::ptr::null_mut()) }.is_none());
    }
}
