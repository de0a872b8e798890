//! Pixel ↔ complex-plane mapping.
//!
//! One convention, used by both backends and by drag translation:
//!
//! ```text
//! plane = (pixel − surface_center_px) / zoom + offset
//! ```
//!
//! Dividing both axes by the same `zoom` keeps iso-lines circular on any
//! surface aspect ratio (a plane unit is the same number of pixels in x and
//! y), and makes the drag inverse a plain `−Δpixel / zoom`.

use crate::complex::Complex;
use crate::view::ViewState;

/// Map a pixel coordinate to its point in the complex plane.
///
/// Pure and total over all pixel coordinates, including pixels outside the
/// surface bounds (drag computations sample those while the pointer is
/// captured).
pub fn map_pixel(px: f64, py: f64, width: u32, height: u32, view: &ViewState) -> Complex {
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;
    Complex::new(
        (px - cx) / view.zoom + view.offset_x,
        (py - cy) / view.zoom + view.offset_y,
    )
}

/// Plane-space offset delta for a pointer drag of `(dx, dy)` device pixels.
///
/// Dragging the content right (positive `dx`) moves the view window left,
/// hence the negation. Exact inverse of [`map_pixel`]'s pixel term.
pub fn drag_delta(dx: f64, dy: f64, view: &ViewState) -> (f64, f64) {
    (-dx / view.zoom, -dy / view.zoom)
}
