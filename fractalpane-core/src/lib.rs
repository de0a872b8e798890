pub mod complex;
pub mod mapping;
pub mod params;
pub mod snapshot;
pub mod view;

pub use complex::Complex;
pub use mapping::{drag_delta, map_pixel};
pub use params::{FractalFamily, FractalParams};
pub use snapshot::RenderSnapshot;
pub use view::ViewState;
