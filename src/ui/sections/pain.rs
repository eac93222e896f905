use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const PAIN_POINTS: [&str; 4] = [
    "Sales team is losing leads due to manual CRM updates",
    "Every missed call = missed opportunity & revenue loss",
    "Hiring bottlenecks are slowing down team expansion and delivery",
    "Marketing teams are guessing instead of acting on real-time data",
];

#[component]
pub fn Pain() -> impl IntoView {
    view! {
        <section id="pain" class="bg-canvas-navy py-20" aria-labelledby="pain-heading">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="scroll-animate">
                        <h2 id="pain-heading" class="text-primary-text font-bold text-3xl md:text-4xl mb-8">
                            "Every Manual Process Is Costing You. Twice."
                        </h2>

                        <ul class="space-y-4 mb-8">
                            {PAIN_POINTS
                                .iter()
                                .map(|pain| view! {
                                    <li class="flex items-center gap-3">
                                        <Icon name=icons::ALERT_TRIANGLE class="w-6 h-6 text-warning-red shrink-0"/>
                                        <span class="text-body-text text-lg">{*pain}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>

                        <p class="text-body-text text-lg leading-relaxed">
                            "While you're stuck firefighting these operational breakdowns, competitors are scaling with AI-powered precision. Each day of delay compounds the revenue gap."
                        </p>
                    </div>

                    <div class="flex justify-center scroll-animate">
                        <div class="bg-elevated-card rounded-xl p-12 shadow-xl border border-neutral-stroke text-center">
                            <Icon name=icons::BAR_CHART class="w-16 h-16 mx-auto mb-4 text-cyan-interactive"/>
                            <h3 class="text-primary-text font-bold text-xl mb-2">"Hidden Cost Leaks"</h3>
                            <p class="text-body-text">
                                "Every manual process costs you twice: once in execution, again in missed opportunities."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
