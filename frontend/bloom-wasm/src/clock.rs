pub const TARGET_FPS: f64 = 60.0;
pub const FIXED_TIMESTEP: f64 = 1000.0 / TARGET_FPS;
pub const MAX_STEPS_PER_FRAME: usize = 4;
const MAX_DELTA_MS: f64 = 250.0;
// keeps a steady 16.666.. ms frame (or its f32 rounding) from missing its tick
const SLACK_MS: f64 = 1e-3;

/// Turns host frame deltas into a whole number of 60 Hz ticks.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    accumulator: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, delta_ms: f64) -> usize {
        if !delta_ms.is_finite() {
            return 0;
        }
        self.accumulator += delta_ms.clamp(0.0, MAX_DELTA_MS);
        let ready = ((self.accumulator + SLACK_MS) / FIXED_TIMESTEP).floor() as usize;
        let steps = ready.min(MAX_STEPS_PER_FRAME);
        self.accumulator = (self.accumulator - steps as f64 * FIXED_TIMESTEP).max(0.0);
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = self.accumulator.min(FIXED_TIMESTEP - SLACK_MS);
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
