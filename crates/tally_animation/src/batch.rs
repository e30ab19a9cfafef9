//! Batched tween sequencing
//!
//! A batch shares one duration and easing across an ordered set of entries.
//! Each entry starts after its own delay measured from the batch origin,
//! never from the previous entry's completion. All entries are installed
//! together, so the first tick stamps them with a single origin.

use smallvec::SmallVec;

use crate::clock::Clock;
use crate::driver::{CompleteFn, TweenDriver, TweenId, UpdateFn};
use crate::easing::Easing;
use crate::error::TweenError;
use crate::tween::Tween;

struct BatchEntry {
    start: f64,
    end: f64,
    delay_ms: f64,
    on_update: UpdateFn,
    on_complete: Option<CompleteFn>,
}

/// Builder for a group of tweens sharing one duration and easing.
pub struct TweenBatch {
    duration_ms: f64,
    easing: Easing,
    entries: SmallVec<[BatchEntry; 4]>,
}

impl TweenBatch {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            entries: SmallVec::new(),
        }
    }

    /// Add an entry whose tween begins `delay_ms` after the batch origin.
    pub fn entry(
        mut self,
        start: f64,
        end: f64,
        delay_ms: f64,
        on_update: impl FnMut(i64, f64) + 'static,
    ) -> Self {
        self.entries.push(BatchEntry {
            start,
            end,
            delay_ms,
            on_update: Box::new(on_update),
            on_complete: None,
        });
        self
    }

    /// As [`entry`](Self::entry), with a completion sink.
    pub fn entry_with_completion(
        mut self,
        start: f64,
        end: f64,
        delay_ms: f64,
        on_update: impl FnMut(i64, f64) + 'static,
        on_complete: impl FnOnce() + 'static,
    ) -> Self {
        self.entries.push(BatchEntry {
            start,
            end,
            delay_ms,
            on_update: Box::new(on_update),
            on_complete: Some(Box::new(on_complete)),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate every entry, then install them all into the driver.
    ///
    /// Validation happens up front so a bad entry leaves the driver
    /// untouched.
    pub fn start<C: Clock>(
        self,
        driver: &mut TweenDriver<C>,
    ) -> Result<SmallVec<[TweenId; 4]>, TweenError> {
        if self.entries.is_empty() {
            return Err(TweenError::EmptyBatch);
        }

        let mut prepared: SmallVec<[(Tween, UpdateFn, Option<CompleteFn>); 4]> = SmallVec::new();
        for entry in self.entries {
            let tween = Tween::new(entry.start, entry.end, self.duration_ms, self.easing)?
                .with_delay(entry.delay_ms);
            prepared.push((tween, entry.on_update, entry.on_complete));
        }

        let mut ids = SmallVec::new();
        for (tween, on_update, on_complete) in prepared {
            ids.push(driver.animate(tween, on_update, on_complete));
        }
        tracing::debug!(
            entries = ids.len(),
            duration_ms = self.duration_ms,
            "batch scheduled"
        );
        Ok(ids)
    }
}
