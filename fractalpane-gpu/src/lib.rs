//! GPU frame rendering: the whole escape-time pipeline (mapping, iteration,
//! smooth coloring) runs per-pixel in a wgpu fragment shader, one
//! full-surface quad draw per render request.

mod device;
mod error;
mod renderer;
mod uniforms;

pub use device::{GpuAvailability, GpuContext};
pub use error::GpuError;
pub use renderer::{GpuRenderer, DEFAULT_GPU_MAX_ITERATIONS};
pub use uniforms::Uniforms;
