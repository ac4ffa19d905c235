use serde::{Deserialize, Serialize};

/// A millisecond countdown ticked once per frame.
///
/// The remaining time is allowed to go negative; anything at or below
/// zero counts as expired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining_ms: f32,
}

impl Countdown {
    /// An already-expired countdown.
    pub const EXPIRED: Self = Self { remaining_ms: 0.0 };

    pub fn new(duration_ms: f32) -> Self {
        Self {
            remaining_ms: duration_ms,
        }
    }

    pub fn reset(&mut self, duration_ms: f32) {
        self.remaining_ms = duration_ms;
    }

    /// Expire immediately.
    pub fn clear(&mut self) {
        self.remaining_ms = 0.0;
    }

    pub fn tick(&mut self, dt_ms: f32) {
        if self.remaining_ms.is_finite() && dt_ms.is_finite() && dt_ms > 0.0 {
            self.remaining_ms -= dt_ms;
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_ms > 0.0
    }

    pub fn remaining_ms(&self) -> f32 {
        self.remaining_ms
    }
}
