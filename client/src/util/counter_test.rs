use super::*;

use std::cell::Cell;

/// Hand-advanced clock.
struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    fn new(start_ms: f64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl FrameClock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

/// Reveal and tick every `step_ms` until the counter stops asking for frames.
fn run(spec: CounterSpec, step_ms: f64) -> Vec<u64> {
    let clock = ManualClock::new(5_000.0);
    let mut counter = Counter::new(spec);
    assert!(counter.reveal());

    let mut samples = Vec::new();
    while counter.needs_frame() {
        samples.push(counter.tick(&clock));
        clock.advance(step_ms);
        assert!(samples.len() < 10_000, "counter never completed");
    }
    samples
}

// =============================================================
// Phases
// =============================================================

#[test]
fn idle_until_revealed() {
    let clock = ManualClock::new(0.0);
    let mut counter = Counter::new(CounterSpec::new(67.0).duration_ms(1000.0));
    assert_eq!(counter.phase(), CounterPhase::Idle);
    assert!(!counter.needs_frame());

    clock.advance(500.0);
    assert_eq!(counter.tick(&clock), 0);
    assert_eq!(counter.phase(), CounterPhase::Idle);
}

#[test]
fn reveal_only_starts_once() {
    let clock = ManualClock::new(0.0);
    let mut counter = Counter::new(CounterSpec::new(67.0).duration_ms(1000.0));
    assert!(counter.reveal());
    counter.tick(&clock);
    clock.advance(400.0);
    let mid = counter.tick(&clock);

    assert!(!counter.reveal());
    clock.advance(10.0);
    assert!(counter.tick(&clock) >= mid);
}

#[test]
fn reveal_after_completion_has_no_effect() {
    let samples = run(CounterSpec::new(10.0).duration_ms(100.0), 20.0);
    assert_eq!(samples.last(), Some(&10));

    let mut counter = Counter::new(CounterSpec::new(10.0).duration_ms(0.0));
    counter.reveal();
    counter.tick(&ManualClock::new(0.0));
    assert_eq!(counter.phase(), CounterPhase::Completed);
    assert!(!counter.reveal());
    assert!(!counter.needs_frame());
}

#[test]
fn start_time_is_first_frame_not_reveal() {
    let clock = ManualClock::new(0.0);
    let mut counter = Counter::new(CounterSpec::new(100.0).duration_ms(1000.0));
    counter.reveal();

    clock.advance(5_000.0);
    assert_eq!(counter.tick(&clock), 0);
    clock.advance(500.0);
    assert_eq!(counter.tick(&clock), 50);
}

// =============================================================
// Monotonicity and bounds
// =============================================================

#[test]
fn counts_monotonically_to_target() {
    let samples = run(CounterSpec::new(67.0).duration_ms(1000.0), 16.0);
    assert_eq!(samples.first(), Some(&0));
    assert_eq!(samples.last(), Some(&67));
    assert!(samples.windows(2).all(|w| w[0] <= w[1]));
    assert!(samples.iter().all(|&v| v <= 67));
}

#[test]
fn fractional_target_floors() {
    let samples = run(CounterSpec::new(95.7).duration_ms(300.0), 16.0);
    assert_eq!(samples.last(), Some(&95));
    assert!(samples.iter().all(|&v| v <= 95));

    let samples = run(CounterSpec::new(1.25).duration_ms(300.0), 16.0);
    assert_eq!(samples.last(), Some(&1));
}

#[test]
fn clock_going_backwards_never_decreases_value() {
    let clock = ManualClock::new(1_000.0);
    let mut counter = Counter::new(CounterSpec::new(100.0).duration_ms(1000.0));
    counter.reveal();
    counter.tick(&clock);
    clock.advance(600.0);
    let high = counter.tick(&clock);

    clock.advance(-900.0);
    assert_eq!(counter.tick(&clock), high);
}

// =============================================================
// Edge cases
// =============================================================

#[test]
fn zero_duration_jumps_to_target_on_first_frame() {
    let samples = run(CounterSpec::new(100.0).duration_ms(0.0), 16.0);
    assert_eq!(samples, vec![100]);
}

#[test]
fn zero_target_is_immediately_zero() {
    let mut counter = Counter::new(CounterSpec::new(0.0).suffix("%"));
    assert_eq!(counter.display(), "0%");

    let samples = run(CounterSpec::new(0.0).duration_ms(100.0), 16.0);
    assert!(samples.iter().all(|&v| v == 0));
    counter.reveal();
    assert_eq!(counter.display(), "0%");
}

#[test]
fn negative_or_nan_target_stays_zero() {
    assert_eq!(CounterSpec::new(-5.0).target(), 0);
    assert_eq!(CounterSpec::new(f64::NAN).target(), 0);
    let samples = run(CounterSpec::new(-5.0).duration_ms(100.0), 16.0);
    assert_eq!(samples.last(), Some(&0));
}

#[test]
fn finish_jumps_to_target_and_stops() {
    let mut counter = Counter::new(CounterSpec::new(67.0).duration_ms(1000.0));
    counter.reveal();
    assert_eq!(counter.finish(), 67);
    assert_eq!(counter.phase(), CounterPhase::Completed);
    assert!(!counter.needs_frame());
    assert_eq!(counter.tick(&ManualClock::new(0.0)), 67);
}

// =============================================================
// Frame loop
// =============================================================

#[test]
fn frames_continue_until_done() {
    let clock = ManualClock::new(0.0);
    let mut counter = Counter::new(CounterSpec::new(100.0).duration_ms(1000.0));
    counter.reveal();

    assert_eq!(counter.on_frame(true, &clock), FrameOutcome::Continue);
    clock.advance(500.0);
    assert_eq!(counter.on_frame(true, &clock), FrameOutcome::Continue);
    assert_eq!(counter.value(), 50);
    clock.advance(500.0);
    assert_eq!(counter.on_frame(true, &clock), FrameOutcome::Done);
    assert_eq!(counter.value(), 100);
}

#[test]
fn unmounted_frame_is_detached_and_leaves_counter_untouched() {
    let clock = ManualClock::new(0.0);
    let mut counter = Counter::new(CounterSpec::new(100.0).duration_ms(1000.0));
    counter.reveal();
    counter.on_frame(true, &clock);
    clock.advance(300.0);

    let before = counter.phase();
    assert_eq!(counter.on_frame(false, &clock), FrameOutcome::Detached);
    assert_eq!(counter.phase(), before);
    assert_eq!(counter.value(), 0);
}

#[test]
fn failed_schedule_finishes_mounted_counter() {
    let mut counter = Counter::new(CounterSpec::new(1_234.9).prefix("$"));
    counter.reveal();
    assert!(counter.on_schedule_failed(true));
    assert_eq!(counter.phase(), CounterPhase::Completed);
    assert_eq!(counter.display(), "$1,234");
    assert!(!counter.on_schedule_failed(true), "already complete");
}

#[test]
fn failed_schedule_after_unmount_does_nothing() {
    let mut counter = Counter::new(CounterSpec::new(42.0));
    counter.reveal();
    assert!(!counter.on_schedule_failed(false));
    assert_eq!(counter.value(), 0);
    assert!(counter.needs_frame());
}

// =============================================================
// Display
// =============================================================

#[test]
fn default_duration_is_two_seconds() {
    assert_eq!(CounterSpec::new(1.0).duration_ms, DEFAULT_COUNTER_DURATION_MS);
}

#[test]
fn display_applies_prefix_suffix_and_grouping() {
    let mut counter = Counter::new(CounterSpec::new(1_250_000.0).duration_ms(0.0).prefix("$").suffix(" total"));
    assert_eq!(counter.display(), "$0 total");
    counter.reveal();
    counter.tick(&FrameTimestamp(12.0));
    assert_eq!(counter.display(), "$1,250,000 total");
}
