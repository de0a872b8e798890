//! View-state controller.
//!
//! Owns the authoritative [`ViewState`] and [`FractalParams`] and applies
//! input events to them. Every mutator reports whether the visible frame
//! went stale, so hosts know when to ask the scheduler for a new render.

use crate::events::InputEvent;
use fractalpane_core::{drag_delta, map_pixel, FractalFamily, FractalParams, RenderSnapshot, ViewState};

/// Multiplicative zoom factor per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;
pub const MIN_ZOOM: f64 = 1e-3;
/// Past roughly 1e15 pixels per plane unit, f64 mapping runs out of
/// mantissa and adjacent pixels collapse onto the same plane point.
pub const MAX_ZOOM: f64 = 1e15;
pub const MIN_POWER: f64 = 0.5;
pub const MAX_POWER: f64 = 12.0;

pub struct Controller {
    view: ViewState,
    params: FractalParams,
    surface_width: u32,
    surface_height: u32,
    /// Last pointer position while a drag is active.
    drag_anchor: Option<(f64, f64)>,
}

impl Controller {
    /// Controller for a surface of the given size, viewing the default
    /// fitted Mandelbrot framing.
    pub fn new(surface_width: u32, surface_height: u32) -> Self {
        Self {
            view: ViewState::fit_to_surface(surface_height),
            params: FractalParams::default(),
            surface_width,
            surface_height,
            drag_anchor: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    pub fn surface_size(&self) -> (u32, u32) {
        (self.surface_width, self.surface_height)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Everything a render needs, frozen at this instant.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::new(self.view, self.params)
    }

    /// Apply one input event. Returns `true` when the view or parameters
    /// changed and the frame on screen is stale.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.drag_anchor = Some((x, y));
                false
            }
            InputEvent::PointerMove { x, y } => match self.drag_anchor {
                Some((ax, ay)) => {
                    let (dx, dy) = (x - ax, y - ay);
                    self.drag_anchor = Some((x, y));
                    if dx == 0.0 && dy == 0.0 {
                        return false;
                    }
                    let (dox, doy) = drag_delta(dx, dy, &self.view);
                    self.view.offset_x += dox;
                    self.view.offset_y += doy;
                    true
                }
                None => false,
            },
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.drag_anchor = None;
                false
            }
            InputEvent::Wheel { x, y, delta } => self.zoom_about(x, y, delta),
            InputEvent::SetFamily(family) => self.set_family(family),
            InputEvent::SetPower(power) => self.set_power(power),
            InputEvent::SetJuliaConstant { re, im } => self.set_julia_constant(re, im),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Zoom by one step toward (negative `delta`) or away from (positive
    /// `delta`) the plane point under the pointer, which stays fixed under
    /// the pointer across the zoom.
    fn zoom_about(&mut self, x: f64, y: f64, delta: f64) -> bool {
        if delta == 0.0 {
            return false;
        }
        let new_zoom = if delta > 0.0 {
            self.view.zoom / ZOOM_STEP
        } else {
            self.view.zoom * ZOOM_STEP
        }
        .clamp(MIN_ZOOM, MAX_ZOOM);
        if new_zoom == self.view.zoom {
            return false;
        }

        let anchor = map_pixel(x, y, self.surface_width, self.surface_height, &self.view);
        self.view.zoom = new_zoom;
        let cx = self.surface_width as f64 / 2.0;
        let cy = self.surface_height as f64 / 2.0;
        self.view.offset_x = anchor.re - (x - cx) / new_zoom;
        self.view.offset_y = anchor.im - (y - cy) / new_zoom;
        log::trace!("zoom {:.4} px/unit about ({anchor:?})", new_zoom);
        true
    }

    /// Record a new surface size. The view is kept as-is: the plane point
    /// at the surface center and the scale both survive a resize, the
    /// surface just shows more or less of the plane.
    fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == self.surface_width && height == self.surface_height {
            return false;
        }
        self.surface_width = width;
        self.surface_height = height;
        true
    }

    /// Switch fractal family, keeping the current view framing.
    pub fn set_family(&mut self, family: FractalFamily) -> bool {
        if self.params.family == family {
            return false;
        }
        self.params.family = family;
        true
    }

    /// Set the multibrot exponent, clamped to the supported range.
    pub fn set_power(&mut self, power: f64) -> bool {
        let power = power.clamp(MIN_POWER, MAX_POWER);
        if power == self.params.power {
            return false;
        }
        self.params.power = power;
        true
    }

    /// Set the Julia iteration constant.
    pub fn set_julia_constant(&mut self, re: f64, im: f64) -> bool {
        let constant = fractalpane_core::Complex::new(re, im);
        if constant == self.params.julia_constant {
            return false;
        }
        self.params.julia_constant = constant;
        true
    }

    /// Restore the default fitted framing for the current surface size.
    pub fn reset_view(&mut self) -> bool {
        let fitted = ViewState::fit_to_surface(self.surface_height);
        if fitted == self.view {
            return false;
        }
        self.view = fitted;
        true
    }
}
