//! Display surfaces backed by `minifb` windows.
//!
//! A surface is registered by `create_surface` and gets its window on the
//! first `present`, once the image size is known (auto-sizing needs the
//! dimensions up front). Windows are closed when the display is dropped.

mod framebuffer;

use std::time::Instant;

use minifb::{KeyRepeat, ScaleMode, Window, WindowOptions};
use nativeprobe_core::{
    Dismissal, DisplayError, DisplayPort, ImageBuffer, SizingPolicy, SurfaceId, WaitTimeout,
};

pub use framebuffer::to_framebuffer;

/// Refresh rate while waiting for input.
const TARGET_FPS: usize = 60;

struct Frame {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

struct Surface {
    name: String,
    sizing: SizingPolicy,
    window: Option<Window>,
    frame: Option<Frame>,
}

/// Display port over native windows.
///
/// `minifb` windows must stay on the thread that created them, so this type
/// is neither `Send` nor `Sync`.
#[derive(Default)]
pub struct MinifbDisplay {
    surfaces: Vec<Surface>,
}

impl MinifbDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of surfaces created so far.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    fn surface_mut(&mut self, id: SurfaceId) -> Result<&mut Surface, DisplayError> {
        usize::try_from(id.get())
            .ok()
            .and_then(|index| self.surfaces.get_mut(index))
            .ok_or(DisplayError::UnknownSurface(id))
    }
}

fn open_window(name: &str, sizing: SizingPolicy, frame: &Frame) -> Result<Window, DisplayError> {
    let options = match sizing {
        SizingPolicy::AutoSize => WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
        SizingPolicy::Resizable => WindowOptions {
            resize: true,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        },
    };

    let mut window = Window::new(name, frame.width, frame.height, options).map_err(|e| {
        DisplayError::SurfaceCreation {
            name: name.to_owned(),
            reason: e.to_string(),
        }
    })?;
    window.set_target_fps(TARGET_FPS);
    tracing::debug!(name, width = frame.width, height = frame.height, "Window opened");
    Ok(window)
}

fn push_frame(window: &mut Window, frame: &Frame) -> Result<(), DisplayError> {
    window
        .update_with_buffer(&frame.pixels, frame.width, frame.height)
        .map_err(|e| DisplayError::Update(e.to_string()))
}

impl DisplayPort for MinifbDisplay {
    fn create_surface(
        &mut self,
        name: &str,
        sizing: SizingPolicy,
    ) -> Result<SurfaceId, DisplayError> {
        let id = u32::try_from(self.surfaces.len())
            .map(SurfaceId::new)
            .map_err(|_| DisplayError::SurfaceCreation {
                name: name.to_owned(),
                reason: "too many surfaces".into(),
            })?;
        self.surfaces.push(Surface {
            name: name.to_owned(),
            sizing,
            window: None,
            frame: None,
        });
        tracing::debug!(%id, name, ?sizing, "Surface registered");
        Ok(id)
    }

    fn present(&mut self, surface: SurfaceId, image: &ImageBuffer) -> Result<(), DisplayError> {
        if image.is_empty() {
            return Err(DisplayError::EmptyImage);
        }
        let frame = Frame {
            pixels: to_framebuffer(image),
            width: image.width() as usize,
            height: image.height() as usize,
        };

        let Surface {
            name,
            sizing,
            window,
            frame: current,
        } = self.surface_mut(surface)?;

        // Auto-sized windows are recreated when the image size changes.
        let size_changed = current
            .as_ref()
            .is_some_and(|f| (f.width, f.height) != (frame.width, frame.height));
        if window.is_none() || (*sizing == SizingPolicy::AutoSize && size_changed) {
            *window = Some(open_window(name, *sizing, &frame)?);
        }
        if let Some(window) = window.as_mut() {
            push_frame(window, &frame)?;
        }
        *current = Some(frame);
        Ok(())
    }

    fn wait_for_dismissal(
        &mut self,
        surface: SurfaceId,
        timeout: WaitTimeout,
    ) -> Result<Dismissal, DisplayError> {
        let Surface { window, frame, .. } = self.surface_mut(surface)?;
        let (Some(window), Some(frame)) = (window.as_mut(), frame.as_ref()) else {
            return Err(DisplayError::NotPresented(surface));
        };

        let deadline = timeout.as_duration().map(|d| Instant::now() + d);
        loop {
            if !window.is_open() {
                return Ok(Dismissal::Closed);
            }
            if let Some(key) = window.get_keys_pressed(KeyRepeat::No).first() {
                return Ok(Dismissal::Key(format!("{key:?}")));
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                return Ok(Dismissal::TimedOut);
            }
            push_frame(window, frame)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surfaces_get_sequential_ids() {
        let mut display = MinifbDisplay::new();
        let a = display
            .create_surface("Display Image", SizingPolicy::AutoSize)
            .unwrap();
        let b = display.create_surface("Other", SizingPolicy::Resizable).unwrap();
        assert_eq!((a.get(), b.get()), (0, 1));
        assert_eq!(display.surface_count(), 2);
    }

    #[test]
    fn test_present_rejects_empty_image() {
        let mut display = MinifbDisplay::new();
        let id = display
            .create_surface("Display Image", SizingPolicy::AutoSize)
            .unwrap();
        let err = display.present(id, &ImageBuffer::empty()).unwrap_err();
        assert!(matches!(err, DisplayError::EmptyImage));
    }

    #[test]
    fn test_unknown_surface_rejected() {
        let mut display = MinifbDisplay::new();
        let err = display
            .wait_for_dismissal(SurfaceId::new(3), WaitTimeout::Millis(1))
            .unwrap_err();
        assert!(matches!(err, DisplayError::UnknownSurface(id) if id.get() == 3));
    }

    #[test]
    fn test_wait_before_present_rejected() {
        let mut display = MinifbDisplay::new();
        let id = display
            .create_surface("Display Image", SizingPolicy::AutoSize)
            .unwrap();
        let err = display
            .wait_for_dismissal(id, WaitTimeout::Forever)
            .unwrap_err();
        assert!(matches!(err, DisplayError::NotPresented(_)));
    }
}
