use fractalpane_core::FractalFamily;

/// Host-agnostic input events.
///
/// Pointer coordinates are in surface pixels with the origin at the top
/// left. Hosts translate their native events (mouse, touch, window,
/// control widgets) into these before handing them to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    /// Pointer left the surface; ends a drag like `PointerUp`.
    PointerLeave,
    /// Positive `delta` zooms out, negative zooms in, anchored at the
    /// pointer position.
    Wheel { x: f64, y: f64, delta: f64 },
    SetFamily(FractalFamily),
    SetPower(f64),
    SetJuliaConstant { re: f64, im: f64 },
    Resize { width: u32, height: u32 },
}
