use chrono::Local;
use leptos::prelude::*;

use crate::core::analytics;
use crate::core::countdown::{TimeLeft, intake_label, next_intake};
use crate::ui::analytics::track;
use crate::ui::dom::scroll_to_id;
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::use_interval;

/// Countdown to the next quarterly intake, refreshed every second
#[component]
pub fn Urgency() -> impl IntoView {
    let intake = next_intake(Local::now().naive_local());
    let (time_left, set_time_left) = signal(TimeLeft::default());

    let refresh = move || set_time_left.set(TimeLeft::until(Local::now().naive_local(), intake));
    Effect::new(move |_| refresh());
    use_interval(1_000, refresh);

    let on_reserve = move |_| {
        track(analytics::SPRINT_SLOT_RESERVE);
        scroll_to_id("final-cta");
    };

    view! {
        <section id="urgency" class="bg-ai-glow-gradient py-16">
            <div class="max-w-4xl mx-auto px-6 text-center">
                <h2 class="text-canvas-navy font-bold text-3xl md:text-4xl mb-8">
                    "Only 4 Sprint Slots Left This Quarter"
                </h2>

                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 max-w-md mx-auto mb-8">
                    {move || {
                        time_left
                            .get()
                            .cells()
                            .into_iter()
                            .map(|(value, unit)| view! {
                                <div class="bg-canvas-navy rounded-lg p-4 border border-neutral-stroke">
                                    <div class="text-primary-text font-bold text-2xl md:text-3xl tabular-nums">{value}</div>
                                    <div class="text-body-text text-sm">{unit}</div>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>

                <button
                    type="button"
                    class="btn-base btn-lg btn-navy mx-auto"
                    on:click=on_reserve
                >
                    <Icon name=icons::CALENDAR class="w-5 h-5"/>
                    <span>"Reserve My Sprint Slot"</span>
                </button>

                <p class="text-canvas-navy text-sm mt-4 opacity-80">
                    {intake_label(intake)}" • Limited capacity"
                </p>
            </div>
        </section>
    }
}
