//! Pipeline runs against the real `image` codec with on-disk fixtures.
//!
//! The display is a recording stand-in so the tests run without a window
//! system; dismissal is injected.

use std::path::Path;

use image::{Rgb, RgbImage};
use nativeprobe_core::{
    CapturedDiagnostics, Dismissal, DisplayError, DisplayPipeline, DisplayPort, ImageBuffer,
    PipelineConfig, PipelineOutcome, SizingPolicy, SurfaceId, WaitTimeout,
};
use nativeprobe_runtime::ImageCrateCodec;
use nativeprobe_runtime::display::to_framebuffer;
use tempfile::TempDir;

#[derive(Default)]
struct InjectedDismissal {
    created: usize,
    presented: Vec<ImageBuffer>,
    waited: usize,
}

impl DisplayPort for InjectedDismissal {
    fn create_surface(&mut self, _: &str, _: SizingPolicy) -> Result<SurfaceId, DisplayError> {
        self.created += 1;
        Ok(SurfaceId::new(0))
    }

    fn present(&mut self, _: SurfaceId, image: &ImageBuffer) -> Result<(), DisplayError> {
        self.presented.push(image.clone());
        Ok(())
    }

    fn wait_for_dismissal(
        &mut self,
        _: SurfaceId,
        _: WaitTimeout,
    ) -> Result<Dismissal, DisplayError> {
        self.waited += 1;
        Ok(Dismissal::Key("Space".into()))
    }
}

fn run(args: &[&str]) -> (PipelineOutcome, CapturedDiagnostics, InjectedDismissal) {
    let codec = ImageCrateCodec::new();
    let mut display = InjectedDismissal::default();
    let mut sink = CapturedDiagnostics::new();
    let outcome = DisplayPipeline::new(&codec, &mut display, PipelineConfig::default())
        .run(args, &mut sink)
        .unwrap();
    (outcome, sink, display)
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn missing_file_reports_no_image_data() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.png");

    let (outcome, sink, display) = run(&["prog", path_str(&missing)]);

    assert_eq!(outcome, PipelineOutcome::NoImageData);
    assert!(sink.contains("No image data"));
    assert_eq!(display.created, 0);
}

#[test]
fn corrupt_file_reports_no_image_data() {
    let dir = TempDir::new().unwrap();
    let corrupt = dir.path().join("corrupt.jpg");
    std::fs::write(&corrupt, [0xFF, 0xD8, 0xFF, 0x00, 0x13, 0x37]).unwrap();

    let (outcome, sink, display) = run(&["prog", path_str(&corrupt)]);

    assert_eq!(outcome, PipelineOutcome::NoImageData);
    assert_eq!(sink.lines(), ["No image data"]);
    assert_eq!(display.created, 0);
}

#[test]
fn valid_png_is_presented_once() {
    let dir = TempDir::new().unwrap();
    let valid = dir.path().join("valid.png");
    RgbImage::from_pixel(3, 2, Rgb([0x10, 0x20, 0x30]))
        .save(&valid)
        .unwrap();

    let (outcome, sink, display) = run(&["prog", path_str(&valid)]);

    assert_eq!(
        outcome,
        PipelineOutcome::Dismissed(Dismissal::Key("Space".into()))
    );
    assert!(sink.lines().is_empty());
    assert_eq!((display.created, display.waited), (1, 1));
    assert_eq!(display.presented.len(), 1);

    let shown = &display.presented[0];
    assert_eq!((shown.width(), shown.height()), (3, 2));
    assert!(to_framebuffer(shown).iter().all(|&px| px == 0x0010_2030));
}
