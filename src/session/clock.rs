/// Fixed-rate step scheduler fed with elapsed wall time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameClock {
    step_ms: f64,
    accumulated_ms: f64,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            step_ms: 1000.0 / f64::from(fps.max(1)),
            accumulated_ms: 0.0,
        }
    }

    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    /// Add elapsed time. Returns true when a step is due; at most one step per call, with the
    /// surplus carried over.
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.accumulated_ms += delta_ms;
        }
        if self.accumulated_ms > self.step_ms {
            self.accumulated_ms -= self.step_ms;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/clock.rs"]
mod tests;
