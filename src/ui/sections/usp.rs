use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const USP_STEPS: [(&str, &str); 3] = [
    (icons::DOLLAR, "Pinpoint ≥ $250K savings"),
    (icons::CLOCK, "Live pilot in 6 weeks"),
    (icons::CHECK_CIRCLE, "Board-ready Impact Report"),
];

/// One row of the comparison table
struct Differentiator {
    feature: &'static str,
    sprint: &'static str,
    traditional: &'static str,
    consultants: &'static str,
}

const COMPARISON: [Differentiator; 4] = [
    Differentiator {
        feature: "Implementation Speed",
        sprint: "6 weeks",
        traditional: "6-12 months",
        consultants: "12+ months",
    },
    Differentiator {
        feature: "Upfront Cost",
        sprint: "$0",
        traditional: "$50K-500K",
        consultants: "$100K+",
    },
    Differentiator {
        feature: "Risk Level",
        sprint: "Zero Risk",
        traditional: "High Risk",
        consultants: "Very High Risk",
    },
    Differentiator {
        feature: "ROI Guarantee",
        sprint: "90-Day Promise",
        traditional: "No Guarantee",
        consultants: "No Guarantee",
    },
];

#[component]
pub fn Usp() -> impl IntoView {
    view! {
        <section id="usp" class="bg-canvas-navy py-20">
            <div class="max-w-6xl mx-auto px-6">
                <div class="text-center mb-16 scroll-animate">
                    <h2 class="section-title mb-8">"Done-For-You AI Transformation Sprint"</h2>

                    <div class="grid md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                        {USP_STEPS
                            .iter()
                            .map(|(icon, text)| view! {
                                <div class="flex items-center justify-center gap-3 bg-elevated-card rounded-lg p-6 border border-neutral-stroke">
                                    <Icon name=*icon class="w-6 h-6 text-primary-purple shrink-0"/>
                                    <span class="text-primary-text text-lg font-medium">{*text}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="scroll-animate">
                    <h3 class="text-primary-text font-bold text-2xl md:text-3xl text-center mb-12">
                        "Key Differentiators"
                    </h3>

                    <div class="card overflow-hidden shadow-xl">
                        <div class="overflow-x-auto">
                            <table class="w-full">
                                <thead>
                                    <tr class="bg-canvas-navy border-b border-neutral-stroke">
                                        <th class="text-left p-6 text-body-text font-semibold text-lg">"Feature"</th>
                                        <th class="text-center p-6 text-primary-purple font-semibold text-lg">"BuddyBots Sprint"</th>
                                        <th class="text-center p-6 text-body-text font-semibold text-lg">"Traditional IT"</th>
                                        <th class="text-center p-6 text-body-text font-semibold text-lg">"Big Consultants"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {COMPARISON
                                        .iter()
                                        .enumerate()
                                        .map(|(index, row)| view! {
                                            <tr class=if index % 2 == 0 { "bg-elevated-card" } else { "bg-canvas-navy" }>
                                                <td class="p-6 text-primary-text font-medium border-b border-neutral-stroke text-lg">
                                                    {row.feature}
                                                </td>
                                                <td class="p-6 text-center border-b border-neutral-stroke">
                                                    <span class="bg-primary-purple text-primary-text px-4 py-2 rounded-full font-bold text-sm">
                                                        {row.sprint}
                                                    </span>
                                                </td>
                                                <td class="p-6 text-center text-body-text border-b border-neutral-stroke text-lg">
                                                    {row.traditional}
                                                </td>
                                                <td class="p-6 text-center text-body-text border-b border-neutral-stroke text-lg">
                                                    {row.consultants}
                                                </td>
                                            </tr>
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
