//! Conversion from decoded buffers to packed `0x00RRGGBB` framebuffers.

use nativeprobe_core::ImageBuffer;

/// Pack `image` into one `u32` per pixel.
///
/// One- and two-channel buffers are treated as luma (alpha ignored), three-
/// and four-channel buffers as RGB (alpha ignored).
pub fn to_framebuffer(image: &ImageBuffer) -> Vec<u32> {
    let channels = usize::from(image.channels());
    if channels == 0 {
        return Vec::new();
    }

    image
        .data()
        .chunks_exact(channels)
        .map(|px| match px {
            [v] | [v, _] => pack(*v, *v, *v),
            [r, g, b] | [r, g, b, _] => pack(*r, *g, *b),
            _ => 0,
        })
        .collect()
}

const fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_pixels_are_packed() {
        let image = ImageBuffer::from_raw(2, 1, 3, vec![255, 0, 0, 0x12, 0x34, 0x56]).unwrap();
        assert_eq!(to_framebuffer(&image), [0x00FF_0000, 0x0012_3456]);
    }

    #[test]
    fn test_gray_pixels_are_replicated() {
        let image = ImageBuffer::from_raw(2, 1, 1, vec![0x80, 0x01]).unwrap();
        assert_eq!(to_framebuffer(&image), [0x0080_8080, 0x0001_0101]);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let image = ImageBuffer::from_raw(1, 1, 4, vec![1, 2, 3, 0]).unwrap();
        assert_eq!(to_framebuffer(&image), [0x0001_0203]);
    }

    #[test]
    fn test_empty_buffer_packs_to_nothing() {
        assert!(to_framebuffer(&ImageBuffer::empty()).is_empty());
    }
}
