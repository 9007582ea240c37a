//! Decoded image buffer and the pixel layout requested from the codec.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pixel layout requested at decode time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Three-channel RGB, alpha discarded.
    #[default]
    Color,
    /// Single-channel luma.
    Grayscale,
    /// Keep the source layout (RGBA when the source has alpha, RGB otherwise).
    Unchanged,
}

impl ColorMode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Grayscale => "grayscale",
            Self::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "color" | "colour" => Ok(Self::Color),
            "grayscale" | "greyscale" | "gray" | "grey" => Ok(Self::Grayscale),
            "unchanged" => Ok(Self::Unchanged),
            other => Err(format!(
                "unknown color mode '{other}' (expected color, grayscale or unchanged)"
            )),
        }
    }
}

/// In-memory raster produced by an image codec.
///
/// An empty buffer is how codecs report that nothing could be decoded; it
/// must be checked with [`ImageBuffer::is_empty`] before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageBuffer {
    width: u32,
    height: u32,
    channels: u8,
    data: Vec<u8>,
}

impl ImageBuffer {
    /// A buffer holding no pixels.
    pub const fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            channels: 0,
            data: Vec::new(),
        }
    }

    /// Wrap interleaved pixel bytes.
    ///
    /// Returns `None` unless `channels` is 1-4 and `data` holds exactly
    /// `width * height * channels` bytes.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Option<Self> {
        if !(1..=4).contains(&channels) {
            return None;
        }
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(usize::from(channels))?;
        (data.len() == expected).then_some(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn channels(&self) -> u8 {
        self.channels
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_empty() {
        assert!(ImageBuffer::empty().is_empty());
        assert!(ImageBuffer::default().is_empty());
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(ImageBuffer::from_raw(2, 2, 3, vec![0; 12]).is_some());
        assert!(ImageBuffer::from_raw(2, 2, 3, vec![0; 11]).is_none());
        assert!(ImageBuffer::from_raw(2, 2, 5, vec![0; 20]).is_none());
        assert!(ImageBuffer::from_raw(2, 2, 0, Vec::new()).is_none());
    }

    #[test]
    fn test_zero_dimension_buffer_is_empty() {
        let buffer = ImageBuffer::from_raw(0, 8, 1, Vec::new()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_color_mode_parse() {
        assert_eq!("color".parse::<ColorMode>(), Ok(ColorMode::Color));
        assert_eq!(" Grey ".parse::<ColorMode>(), Ok(ColorMode::Grayscale));
        assert_eq!("UNCHANGED".parse::<ColorMode>(), Ok(ColorMode::Unchanged));
        assert!("sepia".parse::<ColorMode>().is_err());
    }
}
