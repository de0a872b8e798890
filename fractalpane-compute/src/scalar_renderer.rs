//! Incremental scalar (CPU) frame production.
//!
//! One frame is produced row-batch by row-batch so the host's event loop can
//! interleave input handling with rendering: the host calls [`ScalarRenderer::step`]
//! once per scheduler turn until it reports [`StepOutcome::Finished`]. The
//! buffer being written is a back buffer; it becomes the presentable frame
//! only after the last row, so a superseded render never shows partial rows.

use crate::color::color_of;
use crate::escape::evaluate;
use fractalpane_core::{map_pixel, RenderSnapshot};

/// Iteration budget per pixel. Trades boundary smoothness against per-frame
/// cost.
pub const DEFAULT_MAX_ITERATIONS: u32 = 300;

/// Rows rendered per `step()` call.
pub const DEFAULT_ROW_BATCH: u32 = 16;

/// Result of one cooperative render step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// No frame in flight.
    Idle,
    /// More rows remain; call `step()` again next turn.
    InProgress,
    /// The frame completed this step and is now the presented buffer.
    Finished,
}

struct FrameInFlight {
    snapshot: RenderSnapshot,
    next_row: u32,
}

/// Scalar per-pixel renderer with double-buffered RGBA8 output.
///
/// Owns both pixel buffers exclusively; nothing else writes them while a
/// frame is in flight.
pub struct ScalarRenderer {
    width: u32,
    height: u32,
    /// Last completed frame, safe to present at any time.
    front: Vec<u8>,
    /// Frame under construction.
    back: Vec<u8>,
    in_flight: Option<FrameInFlight>,
    max_iterations: u32,
    row_batch: u32,
}

impl ScalarRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_settings(width, height, DEFAULT_MAX_ITERATIONS, DEFAULT_ROW_BATCH)
    }

    pub fn with_settings(width: u32, height: u32, max_iterations: u32, row_batch: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            front: vec![0; len],
            back: vec![0; len],
            in_flight: None,
            max_iterations,
            row_batch: row_batch.max(1),
        }
    }

    /// Begin producing a frame from `snapshot`, discarding any frame in
    /// flight.
    pub fn begin(&mut self, snapshot: RenderSnapshot) {
        self.in_flight = Some(FrameInFlight {
            snapshot,
            next_row: 0,
        });
    }

    /// Render the next batch of rows.
    pub fn step(&mut self) -> StepOutcome {
        let Some(frame) = self.in_flight.as_mut() else {
            return StepOutcome::Idle;
        };

        let snapshot = frame.snapshot;
        let end_row = (frame.next_row + self.row_batch).min(self.height);
        for py in frame.next_row..end_row {
            let row_start = (py as usize) * (self.width as usize) * 4;
            let row = &mut self.back[row_start..row_start + self.width as usize * 4];
            render_row(
                row,
                py,
                self.width,
                self.height,
                &snapshot,
                self.max_iterations,
            );
        }
        frame.next_row = end_row;

        if end_row == self.height {
            std::mem::swap(&mut self.front, &mut self.back);
            self.in_flight = None;
            log::debug!("scalar frame complete ({}x{})", self.width, self.height);
            StepOutcome::Finished
        } else {
            StepOutcome::InProgress
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The last completed frame as tightly packed RGBA8 rows. All zeros
    /// until the first frame finishes.
    pub fn frame(&self) -> &[u8] {
        &self.front
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Resize the output surface. Drops any frame in flight and clears both
    /// buffers; the caller re-requests a render with unchanged view state.
    pub fn resize(&mut self, width: u32, height: u32) {
        let len = (width as usize) * (height as usize) * 4;
        self.width = width;
        self.height = height;
        self.front = vec![0; len];
        self.back = vec![0; len];
        self.in_flight = None;
    }
}

fn render_row(
    row: &mut [u8],
    py: u32,
    width: u32,
    height: u32,
    snapshot: &RenderSnapshot,
    max_iterations: u32,
) {
    for px in 0..width {
        let c = map_pixel(px as f64, py as f64, width, height, &snapshot.view);
        let result = evaluate(c, &snapshot.params, max_iterations);
        let [r, g, b] = color_of(&result, max_iterations);

        let idx = (px as usize) * 4;
        row[idx] = r;
        row[idx + 1] = g;
        row[idx + 2] = b;
        row[idx + 3] = 255;
    }
}
