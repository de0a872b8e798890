//! Uniform block shared with the fragment shader.

use bytemuck::{Pod, Zeroable};
use fractalpane_core::{FractalFamily, RenderSnapshot};

/// View state and fractal parameters as the shader consumes them.
///
/// Field order and padding must match the `Uniforms` struct in
/// `shader.wgsl`; everything is f32 (the shader runs single precision).
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    pub surface_width: f32,
    pub surface_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub zoom: f32,
    pub power: f32,
    pub julia_re: f32,
    pub julia_im: f32,
    /// 0 = Mandelbrot/Multibrot, 1 = Julia, 2 = Burning Ship.
    pub family: u32,
    pub max_iterations: u32,
    pub _pad: [u32; 2],
}

impl Uniforms {
    pub fn new(snapshot: &RenderSnapshot, width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            surface_width: width as f32,
            surface_height: height as f32,
            offset_x: snapshot.view.offset_x as f32,
            offset_y: snapshot.view.offset_y as f32,
            zoom: snapshot.view.zoom as f32,
            power: snapshot.params.power as f32,
            julia_re: snapshot.params.julia_constant.re as f32,
            julia_im: snapshot.params.julia_constant.im as f32,
            family: match snapshot.params.family {
                FractalFamily::Mandelbrot => 0,
                FractalFamily::Julia => 1,
                FractalFamily::BurningShip => 2,
            },
            max_iterations,
            _pad: [0, 0],
        }
    }
}
