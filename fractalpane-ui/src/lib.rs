//! Interaction layer: translates pointer, wheel, and control input into view
//! changes and coalesces the resulting render requests.

pub mod controller;
pub mod events;
pub mod scheduler;

pub use controller::{Controller, MAX_POWER, MAX_ZOOM, MIN_POWER, MIN_ZOOM, ZOOM_STEP};
pub use events::InputEvent;
pub use scheduler::{RenderBackend, RenderScheduler};
