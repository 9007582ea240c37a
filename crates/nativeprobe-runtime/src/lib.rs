//! Native collaborator adapters for nativeprobe.
//!
//! Each module implements one `nativeprobe-core` port on top of a real
//! library: `wgpu` for the compute handle, `image` for decoding and
//! `minifb` for display surfaces.

#![deny(unsafe_code)]

pub mod codec;
pub mod compute;
pub mod display;
pub mod sink;

pub use codec::ImageCrateCodec;
pub use compute::{WgpuComputeLibrary, WgpuHandle};
pub use display::MinifbDisplay;
pub use sink::StdoutSink;
