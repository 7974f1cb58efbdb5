/// Converts continuous wheel deltas into whole row steps.
///
/// Some platforms report fractional deltas (0.1 per notch on trackpads), so
/// the remainder carries over between events. A change of direction drops
/// whatever was left over from the previous direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelAccumulator {
    step: f32,
    acc: f32,
}

impl Default for WheelAccumulator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl WheelAccumulator {
    /// `step` is the wheel delta making up one step. Non-positive or
    /// non-finite values fall back to `1.0`.
    pub fn new(step: f32) -> Self {
        let step = if step.is_finite() && step > 0.0 { step } else { 1.0 };
        Self { step, acc: 0.0 }
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Leftover delta not yet converted into a step.
    pub fn pending(&self) -> f32 {
        self.acc
    }

    pub fn reset(&mut self) {
        self.acc = 0.0;
    }

    /// Add `delta` and return the number of whole steps it completes.
    /// The sign of the result follows the sign of `delta`.
    pub fn accumulate(&mut self, delta: f32) -> i32 {
        if !delta.is_finite() {
            return 0;
        }
        if sign(self.acc) != sign(delta) {
            self.acc = 0.0;
        }
        self.acc += delta;

        let steps = (self.acc / self.step).trunc();
        self.acc -= steps * self.step;
        steps as i32
    }
}

fn sign(v: f32) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}
