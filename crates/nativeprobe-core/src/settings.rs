//! Settings domain types and validation.
//!
//! These are pure domain types with no infrastructure dependencies. The
//! binaries build them from environment overrides through
//! [`Settings::apply_overrides`], passing their own variable lookup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ColorMode;
use crate::ports::{SizingPolicy, WaitTimeout};

/// Default name of the display surface.
pub const DEFAULT_WINDOW_NAME: &str = "Display Image";

/// Environment variable overriding the surface name.
pub const ENV_WINDOW_NAME: &str = "NATIVEPROBE_WINDOW_NAME";
/// Environment variable overriding the decode colour mode.
pub const ENV_COLOR_MODE: &str = "NATIVEPROBE_COLOR_MODE";
/// Environment variable overriding the dismissal timeout (0 = forever).
pub const ENV_WAIT_MS: &str = "NATIVEPROBE_WAIT_MS";
/// Environment variable overriding the surface sizing policy.
pub const ENV_SIZING: &str = "NATIVEPROBE_SIZING";

/// Errors from settings validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    /// A value could not be parsed.
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The window name was blank.
    #[error("Window name must not be empty")]
    EmptyWindowName,
}

/// Harness settings.
///
/// All fields are optional to support partial overrides and graceful
/// defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name of the display surface.
    pub window_name: Option<String>,

    /// Pixel layout requested from the codec.
    pub color_mode: Option<ColorMode>,

    /// Dismissal timeout in milliseconds; 0 waits forever.
    pub wait_timeout_ms: Option<u64>,

    /// Surface sizing policy.
    pub sizing: Option<SizingPolicy>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            window_name: Some(DEFAULT_WINDOW_NAME.to_owned()),
            color_mode: Some(ColorMode::Color),
            wait_timeout_ms: Some(0),
            sizing: Some(SizingPolicy::AutoSize),
        }
    }

    pub fn effective_window_name(&self) -> &str {
        self.window_name.as_deref().unwrap_or(DEFAULT_WINDOW_NAME)
    }

    pub fn effective_color_mode(&self) -> ColorMode {
        self.color_mode.unwrap_or_default()
    }

    pub fn effective_wait_timeout(&self) -> WaitTimeout {
        WaitTimeout::from_millis(self.wait_timeout_ms.unwrap_or(0))
    }

    pub fn effective_sizing(&self) -> SizingPolicy {
        self.sizing.unwrap_or_default()
    }

    /// Apply overrides read through `lookup` (usually `std::env::var`).
    ///
    /// Unset variables leave the current value alone; malformed ones are
    /// rejected.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup(ENV_WINDOW_NAME) {
            self.window_name = Some(name);
        }
        if let Some(raw) = lookup(ENV_COLOR_MODE) {
            self.color_mode = Some(parse_value(ENV_COLOR_MODE, &raw)?);
        }
        if let Some(raw) = lookup(ENV_WAIT_MS) {
            self.wait_timeout_ms = Some(parse_value(ENV_WAIT_MS, &raw)?);
        }
        if let Some(raw) = lookup(ENV_SIZING) {
            self.sizing = Some(parse_value(ENV_SIZING, &raw)?);
        }
        validate_settings(self)
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, SettingsError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| SettingsError::InvalidValue {
            key,
            value: raw.to_owned(),
            reason: e.to_string(),
        })
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(name) = &settings.window_name
        && name.trim().is_empty()
    {
        return Err(SettingsError::EmptyWindowName);
    }
    Ok(())
}
