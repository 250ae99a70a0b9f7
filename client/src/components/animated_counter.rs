//! Number that counts up from zero once it scrolls into view.
//!
//! DESIGN
//! ======
//! Timing and value rules live in `util::counter::Counter`; this component
//! only wires it to the browser. Each frame callback schedules the next one
//! while the counter reports `needs_frame`, and an alive flag stops the chain
//! once the component is unmounted.

use leptos::prelude::*;

use crate::util::counter::{Counter, CounterSpec};

#[component]
pub fn AnimatedCounter(
    /// Target value. Fractions are floored for display.
    end: f64,
    /// Animation length in milliseconds. Defaults to two seconds.
    #[prop(optional)]
    duration_ms: Option<f64>,
    #[prop(optional, into)] prefix: String,
    #[prop(optional, into)] suffix: String,
) -> impl IntoView {
    let mut spec = CounterSpec::new(end).prefix(prefix).suffix(suffix);
    if let Some(duration_ms) = duration_ms {
        spec = spec.duration_ms(duration_ms);
    }
    let text = RwSignal::new(Counter::new(spec.clone()).display());
    let span_ref = NodeRef::<leptos::html::Span>::new();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_cleanup = Arc::clone(&alive);
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

        let counter = Rc::new(RefCell::new(Counter::new(spec)));
        crate::util::visibility::reveal_once(
            move || span_ref.get().map(web_sys::Element::from),
            move || {
                if counter.borrow_mut().reveal() {
                    schedule_frame(counter, text, alive);
                }
            },
        );
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = spec;

    view! {
        <span class="counter" node_ref=span_ref>
            {move || text.get()}
        </span>
    }
}

#[cfg(feature = "hydrate")]
fn schedule_frame(
    counter: std::rc::Rc<std::cell::RefCell<Counter>>,
    text: RwSignal<String>,
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
) {
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use crate::util::counter::{FrameOutcome, FrameTimestamp};

    let frame_counter = Rc::clone(&counter);
    let frame_alive = Arc::clone(&alive);
    let scheduled = crate::util::animation_frame::request_frame(move |timestamp_ms| {
        let mounted = frame_alive.load(Ordering::Relaxed);
        let outcome = {
            let mut counter = frame_counter.borrow_mut();
            let outcome = counter.on_frame(mounted, &FrameTimestamp(timestamp_ms));
            if outcome != FrameOutcome::Detached {
                text.set(counter.display());
            }
            outcome
        };
        if outcome == FrameOutcome::Continue {
            schedule_frame(frame_counter, text, frame_alive);
        }
    });

    if !scheduled {
        let mut counter = counter.borrow_mut();
        if counter.on_schedule_failed(alive.load(Ordering::Relaxed)) {
            text.set(counter.display());
        }
    }
}
