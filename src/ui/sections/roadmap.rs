use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

struct Milestone {
    week: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        week: "Week 1",
        title: "Discovery & Audit",
        description: "Deep-dive process mapping and cost leak identification",
        icon: icons::SEARCH,
    },
    Milestone {
        week: "Week 2-3",
        title: "AI Solution Design",
        description: "Custom automation blueprint tailored to your operations",
        icon: icons::COG,
    },
    Milestone {
        week: "Week 4-5",
        title: "Pilot Deployment",
        description: "Live implementation with real-time monitoring",
        icon: icons::ROCKET,
    },
    Milestone {
        week: "Week 6",
        title: "Results & Scale Plan",
        description: "ROI documentation and expansion roadmap delivery",
        icon: icons::BAR_CHART,
    },
];

/// Vertical timeline; cards alternate sides on wide screens
#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <section id="roadmap" class="bg-canvas-navy py-20 relative">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="section-title text-center mb-16">"Your 6-Week Sprint Roadmap"</h2>

                <div class="relative">
                    <div class="absolute left-1/2 -translate-x-1/2 w-1 bg-amber-cta h-full hidden md:block"></div>

                    <div class="space-y-12 md:space-y-16 relative">
                        {MILESTONES
                            .iter()
                            .enumerate()
                            .map(|(index, step)| {
                                let left = index % 2 == 0;
                                view! {
                                    <div
                                        class="relative flex flex-col items-center md:gap-8 scroll-animate"
                                        class=("md:flex-row", left)
                                        class=("md:flex-row-reverse", !left)
                                    >
                                        // Timeline dot
                                        <div class="absolute left-1/2 -translate-x-1/2 w-6 h-6 bg-amber-cta rounded-full border-4 border-canvas-navy z-10 hidden md:block"></div>

                                        <div
                                            class="w-full md:w-5/12 text-center"
                                            class=("md:text-right", left)
                                            class=("md:text-left", !left)
                                        >
                                            <div class="card p-6 shadow-xl">
                                                <div
                                                    class="flex items-center gap-3 mb-4 justify-center"
                                                    class=("md:justify-end", left)
                                                    class=("md:justify-start", !left)
                                                >
                                                    <Icon name=step.icon class="w-6 h-6 text-amber-cta"/>
                                                    <span class="text-amber-cta font-bold">{step.week}</span>
                                                </div>
                                                <h3 class="text-primary-text font-bold text-xl mb-3">{step.title}</h3>
                                                <p class="text-body-text leading-relaxed">{step.description}</p>
                                            </div>
                                        </div>

                                        <div class="hidden md:block w-5/12"></div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
