//! Continuous per-frame tick loop with an explicit stop flag.
//!
//! An iterative loop rather than a self-scheduling recursive tick, so the
//! call stack stays flat no matter how long the widget runs.

use std::cell::Cell;
use std::rc::Rc;

use crate::clock::FrameClock;

/// Shared stop switch for an [`AnimationLoop`].
///
/// Cheap to clone; hand a clone to whatever decides when the loop should
/// end (a UI callback, a frame budget, a shutdown signal). Single-threaded
/// by design, matching the frame-driven execution model.
#[derive(Clone, Default)]
pub struct StopFlag(Rc<Cell<bool>>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the loop end after the current frame.
    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }

    fn reset(&self) {
        self.0.set(false);
    }
}

/// Drives one callback invocation per frame until stopped.
///
/// Each iteration reads the wall-clock delta and passes it to the frame
/// callback; the callback is expected to run exactly one solver step and
/// then let the host render. Stopping never touches simulation state, so a
/// later [`run`](Self::run) resumes from wherever the solver left off.
pub struct AnimationLoop {
    clock: FrameClock,
    stop: StopFlag,
    frame_count: u64,
}

impl Default for AnimationLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationLoop {
    pub fn new() -> Self {
        Self {
            clock: FrameClock::new(),
            stop: StopFlag::new(),
            frame_count: 0,
        }
    }

    /// A handle that stops this loop.
    pub fn stop_flag(&self) -> StopFlag {
        self.stop.clone()
    }

    /// Total frames ticked across all `run` calls.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Tick `frame(dt)` until the stop flag is raised.
    ///
    /// Clears a previously raised flag first, so the loop is restartable:
    /// stop, then call `run` again to resume from the last committed state.
    pub fn run(&mut self, mut frame: impl FnMut(f64)) {
        self.stop.reset();
        // Discard time that passed while the loop was not running.
        self.clock.delta();
        while !self.stop.is_stopped() {
            let dt = self.clock.delta();
            frame(dt);
            self.frame_count += 1;
        }
    }
}
