//! Display surface port.
//!
//! Surfaces are created by name, receive one decoded buffer, and then block
//! the caller until the user dismisses them. Window toolkits usually pin
//! their windows to the creating thread, so the trait takes `&mut self` and
//! carries no `Send` bound.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ImageBuffer;

/// Identifier of a surface created by a [`DisplayPort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(u32);

impl SurfaceId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// How a surface picks its size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizingPolicy {
    /// Sized to the presented image; the user cannot resize it.
    #[default]
    AutoSize,
    /// Starts at the image size; the user may resize it and the image is
    /// stretched preserving aspect ratio.
    Resizable,
}

impl FromStr for SizingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "autosize" | "auto" => Ok(Self::AutoSize),
            "resizable" | "normal" => Ok(Self::Resizable),
            other => Err(format!(
                "unknown sizing policy '{other}' (expected autosize or resizable)"
            )),
        }
    }
}

/// How long [`DisplayPort::wait_for_dismissal`] may block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WaitTimeout {
    #[default]
    Forever,
    Millis(u64),
}

impl WaitTimeout {
    /// Zero means wait forever.
    pub const fn from_millis(ms: u64) -> Self {
        if ms == 0 { Self::Forever } else { Self::Millis(ms) }
    }

    pub const fn as_duration(self) -> Option<Duration> {
        match self {
            Self::Forever => None,
            Self::Millis(ms) => Some(Duration::from_millis(ms)),
        }
    }
}

/// Why a blocking wait returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal {
    /// A key was pressed while the surface had focus.
    Key(String),
    /// The user closed the surface.
    Closed,
    /// A finite wait elapsed with no input.
    TimedOut,
}

/// Errors raised by display adapters.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// The windowing system refused to create the surface.
    #[error("Failed to create display surface '{name}': {reason}")]
    SurfaceCreation { name: String, reason: String },

    /// The surface id was not issued by this display.
    #[error("Unknown display surface: {0}")]
    UnknownSurface(SurfaceId),

    /// An empty buffer was handed to `present`.
    #[error("Cannot present an empty image")]
    EmptyImage,

    /// The surface has nothing to wait on because nothing was presented.
    #[error("Nothing has been presented on {0}")]
    NotPresented(SurfaceId),

    /// Pushing pixels or pumping events failed.
    #[error("Display update failed: {0}")]
    Update(String),
}

/// Port for named, blocking display surfaces.
pub trait DisplayPort {
    /// Create a named surface.
    fn create_surface(&mut self, name: &str, sizing: SizingPolicy)
    -> Result<SurfaceId, DisplayError>;

    /// Show `image` on `surface`.
    fn present(&mut self, surface: SurfaceId, image: &ImageBuffer) -> Result<(), DisplayError>;

    /// Block until the user dismisses `surface` or `timeout` elapses.
    fn wait_for_dismissal(
        &mut self,
        surface: SurfaceId,
        timeout: WaitTimeout,
    ) -> Result<Dismissal, DisplayError>;
}
