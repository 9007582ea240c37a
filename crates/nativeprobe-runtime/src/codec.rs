//! Image codec adapter backed by the `image` crate.
//!
//! Missing files, unreadable files and undecodable data all come back as an
//! empty buffer. Only a decoder limit violation is surfaced as an error.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, Limits};
use nativeprobe_core::{CodecError, ColorMode, ImageBuffer, ImageCodecPort};

/// Decoder for the formats compiled into the `image` dependency.
#[derive(Debug, Clone, Default)]
pub struct ImageCrateCodec {
    max_dimensions: Option<(u32, u32)>,
}

impl ImageCrateCodec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse images wider or taller than the given size.
    #[must_use]
    pub fn with_max_dimensions(mut self, width: u32, height: u32) -> Self {
        self.max_dimensions = Some((width, height));
        self
    }

    fn limits(&self) -> Limits {
        let mut limits = Limits::default();
        if let Some((width, height)) = self.max_dimensions {
            limits.max_image_width = Some(width);
            limits.max_image_height = Some(height);
        }
        limits
    }
}

impl ImageCodecPort for ImageCrateCodec {
    fn decode(&self, path: &Path, mode: ColorMode) -> Result<ImageBuffer, CodecError> {
        let mut reader = match ImageReader::open(path).and_then(ImageReader::with_guessed_format) {
            Ok(reader) => reader,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Cannot open image");
                return Ok(ImageBuffer::empty());
            }
        };

        reader.limits(self.limits());

        match reader.decode() {
            Ok(image) => Ok(into_buffer(image, mode)),
            Err(ImageError::Limits(e)) => Err(CodecError::LimitsExceeded(e.to_string())),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Cannot decode image");
                Ok(ImageBuffer::empty())
            }
        }
    }
}

fn into_buffer(image: DynamicImage, mode: ColorMode) -> ImageBuffer {
    let (width, height) = (image.width(), image.height());
    let (channels, data) = match mode {
        ColorMode::Color => (3, image.into_rgb8().into_raw()),
        ColorMode::Grayscale => (1, image.into_luma8().into_raw()),
        ColorMode::Unchanged if image.color().has_alpha() => (4, image.into_rgba8().into_raw()),
        ColorMode::Unchanged => (3, image.into_rgb8().into_raw()),
    };
    ImageBuffer::from_raw(width, height, channels, data).unwrap_or_default()
}
