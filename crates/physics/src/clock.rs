use std::time::Instant;

/// Monotonic frame clock producing per-frame deltas in seconds.
///
/// The first delta is always zero so the rig never jumps on the first frame.
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    previous_elapsed: Option<f32>,
}

impl FrameClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            previous_elapsed: None,
        }
    }

    /// Seconds since the clock was created.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Delta since the previous call, measured now.
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.elapsed();
        self.advance_to(elapsed)
    }

    /// Delta since the previous call for an externally measured elapsed time.
    /// Time never runs backwards: a smaller `elapsed` yields zero.
    pub fn advance_to(&mut self, elapsed: f32) -> f32 {
        let delta = self
            .previous_elapsed
            .map_or(0.0, |previous| (elapsed - previous).max(0.0));
        self.previous_elapsed = Some(elapsed);
        delta
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
