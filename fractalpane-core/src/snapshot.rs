use crate::params::FractalParams;
use crate::view::ViewState;
use serde::{Deserialize, Serialize};

/// Immutable view + parameter pair captured at render-request time.
///
/// A frame is always produced from one snapshot; newer input supersedes the
/// snapshot wholesale rather than blending into a frame in flight. Equality
/// lets the scheduler drop redundant requests for identical state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub view: ViewState,
    pub params: FractalParams,
}

impl RenderSnapshot {
    pub fn new(view: ViewState, params: FractalParams) -> Self {
        Self { view, params }
    }
}
