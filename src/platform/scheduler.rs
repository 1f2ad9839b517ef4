//! Frame scheduling
//!
//! The browser calls us once per display refresh. `FrameScheduler` keeps at
//! most one animation frame outstanding, and `FixedStep` converts frame
//! timestamps into a whole number of fixed simulation ticks.

use crate::consts::MAX_SUBSTEPS;

/// Longest frame gap fed to the accumulator (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Tracks whether an animation frame request is outstanding
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the next frame. Returns false if one is already requested,
    /// in which case the caller must not request another.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called at the top of the frame callback
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }
}

/// Fixed timestep accumulator
#[derive(Debug)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
    last_time_ms: Option<f64>,
}

impl FixedStep {
    /// Stepper for a fixed tick length in seconds
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
            last_time_ms: None,
        }
    }

    /// Ticks owed for a frame at `time_ms` (host clock, milliseconds)
    ///
    /// The first frame after a stop always runs exactly one tick.
    pub fn advance(&mut self, time_ms: f64) -> u32 {
        let frame_dt = match self.last_time_ms {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => self.dt,
        };
        self.last_time_ms = Some(time_ms);
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.dt && ticks < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            ticks += 1;
        }
        ticks
    }

    /// Forget timing history so a resume does not catch up on the gap
    pub fn stop(&mut self) {
        self.accumulator = 0.0;
        self.last_time_ms = None;
    }
}
