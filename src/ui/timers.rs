//! Component-scoped timers

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use gloo_timers::callback::Interval;

/// Run `tick` every `period_ms` milliseconds while the calling component is
/// mounted. The interval starts once the component is live in the browser
/// and is cancelled when the component's owner is cleaned up.
pub fn use_interval(period_ms: u32, tick: impl Fn() + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        let interval = StoredValue::new_local(None::<Interval>);
        let tick = std::rc::Rc::new(tick);

        Effect::new(move |_| {
            if interval.with_value(Option::is_some) {
                return;
            }
            let tick = tick.clone();
            interval.set_value(Some(Interval::new(period_ms, move || tick())));
        });

        // Dropping the `Interval` clears it
        on_cleanup(move || {
            interval.update_value(|slot| {
                slot.take();
            })
        });
    }
    #[cfg(feature = "ssr")]
    {
        let _ = (period_ms, tick);
    }
}
