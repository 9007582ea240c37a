//! Core services.
//!
//! Services here are pure orchestrators over ports - they don't know about
//! concrete implementations.

mod compute_probe;
mod display_pipeline;

pub use compute_probe::{ComputeProbe, PROBE_MARKER, probe};
pub use display_pipeline::{
    DisplayPipeline, EXPECTED_ARGS, NO_IMAGE_DATA, PipelineConfig, PipelineOutcome, USAGE,
};
