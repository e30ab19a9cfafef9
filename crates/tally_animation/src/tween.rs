//! Tween records and sampling math
//!
//! A [`Tween`] is a plain value; all sampling is pure so the driver can
//! recompute progress from wall-clock time on every tick.

use crate::easing::Easing;
use crate::error::TweenError;

/// A single start-to-end interpolation task over a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: f64,
    end: f64,
    duration_ms: f64,
    delay_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Create a tween.
    ///
    /// Negative durations collapse to zero (immediate completion at `end`,
    /// defined behavior rather than an error). Non-finite bounds are
    /// rejected.
    pub fn new(start: f64, end: f64, duration_ms: f64, easing: Easing) -> Result<Self, TweenError> {
        if !start.is_finite() {
            return Err(TweenError::NonFinite {
                field: "start",
                value: start,
            });
        }
        if !end.is_finite() {
            return Err(TweenError::NonFinite {
                field: "end",
                value: end,
            });
        }
        Ok(Self {
            start,
            end,
            duration_ms: duration_ms.max(0.0),
            delay_ms: 0.0,
            easing,
        })
    }

    /// Delay the start relative to the tick that first observes the tween.
    /// Used by batches, where every delay is measured from the batch origin.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn start_value(&self) -> f64 {
        self.start
    }

    pub fn end_value(&self) -> f64 {
        self.end
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Whether the tween is still inside its delay window. No samples are
    /// delivered while pending.
    pub fn pending_at(&self, elapsed_ms: f64) -> bool {
        elapsed_ms < self.delay_ms
    }

    /// Linear progress at `elapsed_ms` since first observation, clamped to
    /// [0, 1]. A zero-length duration is complete the moment its delay has
    /// elapsed; no division happens on that path.
    pub fn progress_at(&self, elapsed_ms: f64) -> f64 {
        let local = elapsed_ms - self.delay_ms;
        if self.duration_ms == 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Interpolated display value at `elapsed_ms`.
    ///
    /// At full progress the endpoint is returned directly, so the final
    /// delivered value is always exactly `round(end)`.
    pub fn value_at(&self, elapsed_ms: f64) -> i64 {
        let p = self.progress_at(elapsed_ms);
        if p >= 1.0 {
            return round_half_away(self.end);
        }
        let eased = self.easing.apply(p);
        round_half_away(self.start + (self.end - self.start) * eased)
    }
}

/// Round half away from zero (the `f64::round` rule). Every delivered value
/// goes through this single helper so identical inputs produce identical
/// sequences.
pub fn round_half_away(v: f64) -> i64 {
    v.round() as i64
}
