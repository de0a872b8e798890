pub mod color;
pub mod escape;
pub mod scalar_renderer;

pub use color::color_of;
pub use escape::{evaluate, IterationResult, ESCAPE_RADIUS_SQR};
pub use scalar_renderer::{ScalarRenderer, StepOutcome, DEFAULT_MAX_ITERATIONS, DEFAULT_ROW_BATCH};
