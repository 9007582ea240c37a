//! Image display pipeline.
//!
//! Validates the argument vector, decodes the image, and shows it on a
//! blocking surface. Usage errors and undecodable images end the run early
//! with a diagnostic line; only collaborator failures become errors.

use std::path::Path;

use crate::domain::ColorMode;
use crate::ports::{
    CoreError, DiagnosticSinkPort, Dismissal, DisplayPort, ImageCodecPort, SizingPolicy,
    WaitTimeout,
};
use crate::settings::Settings;

/// Length of a valid argument vector: program name and image path.
pub const EXPECTED_ARGS: usize = 2;

/// Printed when the argument count is wrong.
pub const USAGE: &str = "usage: DisplayImage.out <Image_Path>";

/// Printed when the codec produced an empty buffer.
pub const NO_IMAGE_DATA: &str = "No image data";

/// How a pipeline run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    /// Wrong argument count; usage was printed.
    Usage,
    /// The image could not be decoded.
    NoImageData,
    /// The image was shown and then dismissed.
    Dismissed(Dismissal),
}

/// Pipeline parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub window_name: String,
    pub color_mode: ColorMode,
    pub sizing: SizingPolicy,
    pub wait: WaitTimeout,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&Settings::with_defaults())
    }
}

impl From<&Settings> for PipelineConfig {
    fn from(settings: &Settings) -> Self {
        Self {
            window_name: settings.effective_window_name().to_owned(),
            color_mode: settings.effective_color_mode(),
            sizing: settings.effective_sizing(),
            wait: settings.effective_wait_timeout(),
        }
    }
}

/// The decode/validate/display pipeline over a codec and a display.
pub struct DisplayPipeline<'a> {
    codec: &'a dyn ImageCodecPort,
    display: &'a mut dyn DisplayPort,
    config: PipelineConfig,
}

impl<'a> DisplayPipeline<'a> {
    pub fn new(
        codec: &'a dyn ImageCodecPort,
        display: &'a mut dyn DisplayPort,
        config: PipelineConfig,
    ) -> Self {
        Self {
            codec,
            display,
            config,
        }
    }

    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the pipeline for a full argument vector (program name first).
    pub fn run<S: AsRef<str>>(
        &mut self,
        args: &[S],
        sink: &mut dyn DiagnosticSinkPort,
    ) -> Result<PipelineOutcome, CoreError> {
        let [_, path] = args else {
            tracing::debug!(argc = args.len(), "Rejecting argument vector");
            sink.emit(USAGE);
            return Ok(PipelineOutcome::Usage);
        };
        let path = Path::new(path.as_ref());

        let image = self.codec.decode(path, self.config.color_mode)?;
        if image.is_empty() {
            tracing::warn!(path = %path.display(), "Decoder produced no image data");
            sink.emit(NO_IMAGE_DATA);
            return Ok(PipelineOutcome::NoImageData);
        }
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            channels = image.channels(),
            "Image decoded"
        );

        let surface = self
            .display
            .create_surface(&self.config.window_name, self.config.sizing)?;
        self.display.present(surface, &image)?;

        let dismissal = self.display.wait_for_dismissal(surface, self.config.wait)?;
        tracing::debug!(%surface, ?dismissal, "Surface dismissed");
        Ok(PipelineOutcome::Dismissed(dismissal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageBuffer;
    use crate::ports::{CapturedDiagnostics, CodecError, DisplayError, SurfaceId};

    struct FixedCodec(ImageBuffer);

    impl ImageCodecPort for FixedCodec {
        fn decode(&self, _path: &Path, _mode: ColorMode) -> Result<ImageBuffer, CodecError> {
            Ok(self.0.clone())
        }
    }

    struct FailingDisplay;

    impl DisplayPort for FailingDisplay {
        fn create_surface(
            &mut self,
            name: &str,
            _sizing: SizingPolicy,
        ) -> Result<SurfaceId, DisplayError> {
            Err(DisplayError::SurfaceCreation {
                name: name.to_owned(),
                reason: "no display server".into(),
            })
        }

        fn present(&mut self, _: SurfaceId, _: &ImageBuffer) -> Result<(), DisplayError> {
            unreachable!("present after failed creation")
        }

        fn wait_for_dismissal(
            &mut self,
            _: SurfaceId,
            _: WaitTimeout,
        ) -> Result<Dismissal, DisplayError> {
            unreachable!("wait after failed creation")
        }
    }

    #[test]
    fn test_config_follows_settings() {
        let settings = Settings {
            window_name: Some("Preview".into()),
            wait_timeout_ms: Some(10),
            ..Settings::default()
        };
        let config = PipelineConfig::from(&settings);
        assert_eq!(config.window_name, "Preview");
        assert_eq!(config.wait, WaitTimeout::Millis(10));
        assert_eq!(config.color_mode, ColorMode::Color);
    }

    #[test]
    fn test_display_failure_propagates() {
        let codec = FixedCodec(ImageBuffer::from_raw(1, 1, 3, vec![1, 2, 3]).unwrap());
        let mut display = FailingDisplay;
        let mut sink = CapturedDiagnostics::new();

        let err = DisplayPipeline::new(&codec, &mut display, PipelineConfig::default())
            .run(&["prog", "a.png"], &mut sink)
            .unwrap_err();

        assert!(matches!(
            err,
            CoreError::Display(DisplayError::SurfaceCreation { .. })
        ));
        assert!(sink.lines().is_empty());
    }
}
