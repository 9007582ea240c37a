//! CLI bootstrap configuration.
//!
//! Settings start from defaults and are overridden from the process
//! environment (after `.env` has been loaded by the binary).

use nativeprobe_core::{PipelineConfig, Settings, SettingsError};

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Create config with default settings.
    pub fn with_defaults() -> Self {
        Self {
            settings: Settings::with_defaults(),
        }
    }

    /// Defaults overridden by `NATIVEPROBE_*` environment variables.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_defaults();
        config.settings.apply_overrides(lookup)?;
        Ok(config)
    }

    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig::from(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use nativeprobe_core::{ColorMode, WaitTimeout};

    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, CliConfig::with_defaults());
        assert_eq!(config.pipeline(), PipelineConfig::default());
    }

    #[test]
    fn test_overrides_reach_pipeline() {
        let config = CliConfig::from_lookup(|key| match key {
            "NATIVEPROBE_COLOR_MODE" => Some("unchanged".into()),
            "NATIVEPROBE_WAIT_MS" => Some("250".into()),
            _ => None,
        })
        .unwrap();

        let pipeline = config.pipeline();
        assert_eq!(pipeline.color_mode, ColorMode::Unchanged);
        assert_eq!(pipeline.wait, WaitTimeout::Millis(250));
        assert_eq!(pipeline.window_name, "Display Image");
    }

    #[test]
    fn test_bad_override_rejected() {
        let err = CliConfig::from_lookup(|key| {
            (key == "NATIVEPROBE_SIZING").then(|| "fullscreen".to_owned())
        })
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }
}
