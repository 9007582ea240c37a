//! Display handler.
//!
//! Runs the image display pipeline with the `image` codec, `minifb`
//! surfaces and stdout diagnostics.

use anyhow::Result;
use nativeprobe_core::{CoreError, DisplayPipeline, EXPECTED_ARGS, PipelineOutcome, SettingsError};
use nativeprobe_runtime::{ImageCrateCodec, MinifbDisplay, StdoutSink};

use crate::bootstrap::CliConfig;

/// Execute the display pipeline for the full argument vector.
///
/// `load_config` is only called when the argument count is valid; a wrong
/// count prints usage with default settings whatever the environment holds.
/// Usage errors and undecodable images are reported on stdout and returned
/// as an outcome, not as an error.
pub fn execute<F>(args: &[String], load_config: F) -> Result<PipelineOutcome>
where
    F: FnOnce() -> Result<CliConfig, SettingsError>,
{
    let config = if args.len() == EXPECTED_ARGS {
        load_config().map_err(CoreError::from)?
    } else {
        CliConfig::with_defaults()
    };

    let codec = ImageCrateCodec::new();
    let mut display = MinifbDisplay::new();
    let mut sink = StdoutSink;

    let outcome =
        DisplayPipeline::new(&codec, &mut display, config.pipeline()).run(args, &mut sink)?;
    tracing::debug!(?outcome, "Display pipeline finished");
    Ok(outcome)
}
