//! Animated counter state machine.
//!
//! A counter sits `Idle` until its element is first revealed, then counts
//! from 0 to `floor(end)` over `duration_ms`, one `tick` per animation frame.
//! Time comes from an injected `FrameClock` so the sequence is reproducible
//! without a browser.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::util::format::group_thousands;

pub const DEFAULT_COUNTER_DURATION_MS: f64 = 2000.0;

/// Source of the current frame time in milliseconds.
pub trait FrameClock {
    fn now_ms(&self) -> f64;
}

/// `requestAnimationFrame` timestamp for the frame being rendered.
#[derive(Clone, Copy, Debug)]
pub struct FrameTimestamp(pub f64);

impl FrameClock for FrameTimestamp {
    fn now_ms(&self) -> f64 {
        self.0
    }
}

/// Parameters for one counter instance.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterSpec {
    pub end: f64,
    pub duration_ms: f64,
    pub prefix: String,
    pub suffix: String,
}

impl CounterSpec {
    #[must_use]
    pub fn new(end: f64) -> Self {
        Self { end, duration_ms: DEFAULT_COUNTER_DURATION_MS, prefix: String::new(), suffix: String::new() }
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Final displayed value. Negative and non-finite targets count as 0.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn target(&self) -> u64 {
        if self.end.is_finite() && self.end > 0.0 { self.end.floor() as u64 } else { 0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    Idle,
    /// Revealed; `started_at_ms` is set by the first frame.
    Running { started_at_ms: Option<f64> },
    Completed,
}

/// What the frame loop does after a frame fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The owning element is gone; nothing was ticked or displayed.
    Detached,
    /// Display updated, request another frame.
    Continue,
    /// Display updated, the animation is over.
    Done,
}

#[derive(Clone, Debug)]
pub struct Counter {
    spec: CounterSpec,
    phase: CounterPhase,
    value: u64,
}

impl Counter {
    #[must_use]
    pub fn new(spec: CounterSpec) -> Self {
        Self { spec, phase: CounterPhase::Idle, value: 0 }
    }

    #[must_use]
    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    #[must_use]
    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Start counting on first reveal. Returns `true` only for that first call.
    pub fn reveal(&mut self) -> bool {
        if self.phase != CounterPhase::Idle {
            return false;
        }
        self.phase = CounterPhase::Running { started_at_ms: None };
        true
    }

    /// Whether another animation frame should be requested.
    #[must_use]
    pub fn needs_frame(&self) -> bool {
        matches!(self.phase, CounterPhase::Running { .. })
    }

    /// Advance to the clock's current time and return the displayed value.
    pub fn tick(&mut self, clock: &impl FrameClock) -> u64 {
        let CounterPhase::Running { started_at_ms } = self.phase else {
            return self.value;
        };
        let now = clock.now_ms();
        let started_at = started_at_ms.unwrap_or(now);

        let progress = progress(now - started_at, self.spec.duration_ms);
        let target = self.spec.target();
        self.value = self.value.max(scaled(progress, self.spec.end, target));

        self.phase = if progress >= 1.0 {
            self.value = target;
            CounterPhase::Completed
        } else {
            CounterPhase::Running { started_at_ms: Some(started_at) }
        };
        self.value
    }

    /// Handle one animation frame for an element that may have been unmounted.
    pub fn on_frame(&mut self, mounted: bool, clock: &impl FrameClock) -> FrameOutcome {
        if !mounted {
            return FrameOutcome::Detached;
        }
        self.tick(clock);
        if self.needs_frame() { FrameOutcome::Continue } else { FrameOutcome::Done }
    }

    /// No further frame could be scheduled. A mounted counter jumps to its
    /// final value; returns whether the display changed.
    pub fn on_schedule_failed(&mut self, mounted: bool) -> bool {
        if !mounted || self.phase == CounterPhase::Completed {
            return false;
        }
        self.finish();
        true
    }

    /// Jump straight to the final value, e.g. when no frame scheduler exists.
    pub fn finish(&mut self) -> u64 {
        self.value = self.spec.target();
        self.phase = CounterPhase::Completed;
        self.value
    }

    /// Prefix, grouped value, suffix.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{}{}{}", self.spec.prefix, group_thousands(self.value), self.spec.suffix)
    }
}

fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms.is_nan() || duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms.max(0.0) / duration_ms).min(1.0)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(progress: f64, end: f64, target: u64) -> u64 {
    if target == 0 {
        return 0;
    }
    let value = (progress * end).floor();
    (value.max(0.0) as u64).min(target)
}
