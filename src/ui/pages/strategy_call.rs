//! Booking page with the inline scheduler

use leptos::prelude::*;

use crate::core::analytics;
use crate::ui::analytics::track;
use crate::ui::booking_embed::CalEmbed;
use crate::ui::common::BackButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_nav_context;

const BENEFITS: [(&str, &str, &str); 4] = [
    (
        icons::CALENDAR,
        "45-Minute Deep Dive",
        "Comprehensive analysis of your operations and automation opportunities",
    ),
    (
        icons::CHECK_CIRCLE,
        "Custom ROI Assessment",
        "Preliminary savings projections specific to your business",
    ),
    (
        icons::USERS,
        "Expert Consultation",
        "Direct access to our AI transformation specialists",
    ),
    (
        icons::CLOCK,
        "Implementation Roadmap",
        "Clear next steps if we're a good fit for your goals",
    ),
];

const TRUST_POINTS: [&str; 4] = [
    "47+ successful AI transformations",
    "Average 30% cost reduction in 90 days",
    "Risk-free consultation",
    "No obligation to proceed",
];

#[component]
pub fn StrategyCallPage() -> impl IntoView {
    let nav = use_nav_context();

    // Client only, once per visit to the page
    Effect::new(move |_| track(analytics::STRATEGY_CALL_PAGE_VIEW));

    view! {
        <div class="min-h-screen bg-canvas-navy pt-20">
            <div class="max-w-7xl mx-auto px-6 py-12 animate-fade-in">
                <div class="flex items-center mb-8">
                    <BackButton on_click=Callback::new(move |_| nav.go_home())/>
                </div>

                <div class="text-center mb-12">
                    <div class="flex items-center justify-center gap-3 mb-4">
                        <Icon name=icons::PHONE class="w-8 h-8 text-primary-purple"/>
                        <h1 class="text-primary-text font-bold text-3xl md:text-4xl">"Book Your Strategy Call"</h1>
                    </div>
                    <p class="text-body-text text-lg max-w-2xl mx-auto">
                        "Schedule a 45-minute consultation to discover your biggest automation opportunities and get a custom ROI assessment"
                    </p>
                </div>

                <div class="grid lg:grid-cols-[400px_1fr] gap-12 items-start">
                    <div class="space-y-6">
                        <div>
                            <h3 class="text-primary-text font-bold text-xl mb-6">"What You'll Get:"</h3>
                            <div class="space-y-4">
                                {BENEFITS
                                    .iter()
                                    .map(|(icon, title, description)| view! {
                                        <div class="flex items-start gap-3">
                                            <div class="w-10 h-10 bg-amber-cta/20 rounded-lg flex items-center justify-center flex-shrink-0">
                                                <Icon name=*icon class="w-5 h-5 text-primary-purple"/>
                                            </div>
                                            <div>
                                                <h4 class="text-primary-text font-semibold text-base mb-1">{*title}</h4>
                                                <p class="text-body-text text-sm leading-relaxed">{*description}</p>
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="card p-6">
                            <h4 class="text-primary-text font-bold text-lg mb-4">"Why Book With Us?"</h4>
                            <ul class="space-y-3">
                                {TRUST_POINTS
                                    .iter()
                                    .map(|point| view! {
                                        <li class="flex items-center gap-3">
                                            <Icon name=icons::CHECK_CIRCLE class="w-4 h-4 text-success-green flex-shrink-0"/>
                                            <span class="text-body-text text-sm">{*point}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>

                        <div class="rounded-xl p-6 border border-primary-purple">
                            <div class="flex items-center gap-3 mb-3">
                                <Icon name=icons::CHECK_CIRCLE class="w-5 h-5 text-primary-purple"/>
                                <h4 class="text-primary-text font-bold text-base">"Strategy Call Promise"</h4>
                            </div>
                            <p class="text-body-text text-sm">
                                "We'll identify at least 3 specific opportunities, or you'll walk away with clear, actionable insights to elevate your business."
                            </p>
                        </div>
                    </div>

                    <div class="card overflow-hidden">
                        <div class="p-6 border-b border-neutral-stroke">
                            <h3 class="text-primary-text font-bold text-xl text-center">"Select Your Preferred Time"</h3>
                            <p class="text-body-text text-center mt-2">"All times shown in your local timezone"</p>
                        </div>

                        <div class="h-[600px] w-full overflow-auto">
                            {move || view! { <CalEmbed prefill=nav.prefill()/> }}
                        </div>

                        <div class="p-4 border-t border-neutral-stroke bg-canvas-navy">
                            <p class="text-body-text text-sm text-center flex items-center justify-center gap-2">
                                <Icon name=icons::MAIL class="w-4 h-4 text-cyan-interactive"/>
                                "You'll receive an instant confirmation email with meeting details and preparation materials"
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
