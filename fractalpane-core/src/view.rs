use serde::{Deserialize, Serialize};

/// The visible window onto the complex plane.
///
/// - `offset_x`, `offset_y`: plane coordinates of the surface center
/// - `zoom`: magnification in device pixels per plane unit
///
/// Invariant: `zoom > 0`. Larger zoom means fewer plane units per pixel
/// (zooming in). The interaction controller is the only mutator and clamps
/// boundary input before it reaches this struct.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom: f64,
}

/// Plane height (in plane units) shown by a freshly fitted view. 3.0 frames
/// the Mandelbrot set with a little margin on a typical surface.
pub const INITIAL_PLANE_HEIGHT: f64 = 3.0;

impl ViewState {
    pub fn new(offset_x: f64, offset_y: f64, zoom: f64) -> Self {
        debug_assert!(zoom > 0.0, "zoom must be positive");
        Self {
            offset_x,
            offset_y,
            zoom,
        }
    }

    /// Default view for a surface of the given height: centered on
    /// (-0.5, 0) with zoom sized so the surface spans `INITIAL_PLANE_HEIGHT`
    /// plane units vertically.
    pub fn fit_to_surface(surface_height: u32) -> Self {
        let height = surface_height.max(1) as f64;
        Self {
            offset_x: -0.5,
            offset_y: 0.0,
            zoom: height / INITIAL_PLANE_HEIGHT,
        }
    }

    /// Plane units covered by one device pixel at this zoom.
    pub fn units_per_pixel(&self) -> f64 {
        1.0 / self.zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_to_surface_centers_on_cardioid() {
        let view = ViewState::fit_to_surface(600);
        assert_eq!(view.offset_x, -0.5);
        assert_eq!(view.offset_y, 0.0);
        assert_eq!(view.zoom, 200.0);
    }

    #[test]
    fn fit_to_surface_zero_height_still_valid() {
        let view = ViewState::fit_to_surface(0);
        assert!(view.zoom > 0.0);
    }

    #[test]
    fn units_per_pixel_is_reciprocal_of_zoom() {
        let view = ViewState::new(0.0, 0.0, 400.0);
        assert_eq!(view.units_per_pixel(), 0.0025);
    }

    #[test]
    fn serialization_roundtrip() {
        let original = ViewState::new(-0.743, 0.131, 1.0e9);
        let json = serde_json::to_string(&original).unwrap();
        let restored: ViewState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }
}
