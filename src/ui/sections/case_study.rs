use leptos::prelude::*;

use crate::core::analytics;
use crate::ui::analytics::track;
use crate::ui::common::BaseModal;
use crate::ui::icon::{Icon, icons};

const SOLUTION_DEPLOYED: [&str; 4] = [
    "AI-powered inventory reconciliation system",
    "Automated vendor invoice matching",
    "Predictive maintenance alerts",
    "Real-time reporting dashboard",
];

const RESULTS: [&str; 4] = [
    "$402K annual savings verified",
    "40% faster order fulfillment",
    "95% reduction in inventory errors",
    "ROI: 380% in first year",
];

#[component]
pub fn CaseStudy() -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    let open = move |_| {
        set_is_open.set(true);
        track(analytics::CASE_STUDY_MODAL);
    };

    view! {
        <section id="case" class="bg-canvas-navy py-20">
            <div class="max-w-4xl mx-auto px-6">
                <div class="card p-8 shadow-2xl relative overflow-hidden scroll-animate">
                    <div class="absolute top-0 right-0 w-32 h-32 bg-ai-glow-gradient opacity-10 rounded-full translate-x-16 -translate-y-16"></div>

                    <div class="grid md:grid-cols-3 gap-8 items-center relative">
                        <div class="md:col-span-2">
                            <h3 class="text-primary-purple font-bold text-2xl md:text-3xl mb-4">
                                "$402K Annual Savings in 57 Days"
                            </h3>
                            <p class="text-body-text text-lg leading-relaxed mb-6">
                                "Manufacturing client eliminated manual inventory reconciliation, automated vendor invoice matching, and deployed predictive maintenance alerts. Result: 22% operational cost reduction and 40% faster order fulfillment. Board approval secured in single presentation."
                            </p>
                            <button type="button" class="btn-base btn-gradient animate-glow" on:click=open>
                                "Show Me the Full Breakdown"
                            </button>
                        </div>

                        <div class="flex justify-center">
                            <div class="bg-primary-magenta text-primary-text w-24 h-24 rounded-full flex items-center justify-center animate-pulse">
                                <div class="text-center">
                                    <Icon name=icons::TRENDING_DOWN class="w-8 h-8 mx-auto mb-1"/>
                                    <div class="font-bold text-sm">"-22%"</div>
                                    <div class="text-xs">"cost"</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <BaseModal
                title="Complete Case Study Breakdown"
                is_open=is_open.into()
                on_close=Callback::new(move |_| set_is_open.set(false))
            >
                <div class="space-y-4 text-body-text">
                    <div>
                        <h4 class="text-primary-purple font-semibold mb-2">"Challenge:"</h4>
                        <p>"600-employee manufacturing company losing $50K monthly to inventory discrepancies and manual processes."</p>
                    </div>
                    <BreakdownList heading="Solution Deployed:" items=&SOLUTION_DEPLOYED/>
                    <BreakdownList heading="Results:" items=&RESULTS/>
                </div>
            </BaseModal>
        </section>
    }
}

#[component]
fn BreakdownList(heading: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-primary-purple font-semibold mb-2">{heading}</h4>
            <ul class="list-disc list-inside space-y-1 ml-4">
                {items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </div>
    }
}
