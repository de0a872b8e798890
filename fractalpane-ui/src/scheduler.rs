//! Coalescing render scheduler.
//!
//! Interaction produces render requests much faster than any backend can
//! finish frames. The scheduler holds at most one pending snapshot: a new
//! request while a render is in flight overwrites the pending slot rather
//! than queueing, so the backend always jumps straight to the latest state
//! and intermediate states are never rendered.

use fractalpane_core::RenderSnapshot;

/// A frame producer the scheduler can drive incrementally.
pub trait RenderBackend {
    /// Start a new frame, abandoning any frame in progress.
    fn begin(&mut self, snapshot: RenderSnapshot);

    /// Do a slice of work. Returns `true` once the frame is complete.
    fn step(&mut self) -> bool;

    /// Adopt a new surface size, dropping any frame in progress.
    fn resize(&mut self, width: u32, height: u32);
}

pub struct RenderScheduler<B: RenderBackend> {
    backend: B,
    in_flight: Option<RenderSnapshot>,
    pending: Option<RenderSnapshot>,
}

impl<B: RenderBackend> RenderScheduler<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_flight: None,
            pending: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn is_rendering(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Resize the backend surface. The in-flight frame and any pending
    /// request were produced for the old dimensions, so both are dropped;
    /// the host re-requests a render for the new surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.backend.resize(width, height);
        self.in_flight = None;
        self.pending = None;
    }

    /// Ask for `snapshot` to be rendered.
    ///
    /// Idle: the render starts immediately. Busy: the snapshot parks in the
    /// pending slot (overwriting whatever was parked there), unless it is
    /// identical to the frame already in flight, in which case it is
    /// dropped and any stale pending request is cleared.
    pub fn request_render(&mut self, snapshot: RenderSnapshot) {
        match self.in_flight {
            None => {
                self.backend.begin(snapshot);
                self.in_flight = Some(snapshot);
            }
            Some(current) if current == snapshot => {
                self.pending = None;
            }
            Some(_) => {
                if self.pending.is_some() {
                    log::trace!("superseding pending render request");
                }
                self.pending = Some(snapshot);
            }
        }
    }

    /// Drive the backend by one work slice. Call from the host's frame
    /// loop. When a frame completes and a request is parked, the next
    /// render starts within the same tick.
    pub fn tick(&mut self) {
        if self.in_flight.is_none() {
            return;
        }
        if self.backend.step() {
            self.in_flight = None;
            if let Some(next) = self.pending.take() {
                self.backend.begin(next);
                self.in_flight = Some(next);
            }
        }
    }
}

impl RenderBackend for fractalpane_compute::ScalarRenderer {
    fn begin(&mut self, snapshot: RenderSnapshot) {
        self.begin(snapshot);
    }

    fn step(&mut self) -> bool {
        self.step() == fractalpane_compute::StepOutcome::Finished
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.resize(width, height);
    }
}
