use leptos::prelude::*;

use crate::core::{Page, analytics};
use crate::ui::analytics::track;
use crate::ui::common::{Button, ButtonSize, ButtonVariant};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_nav_context;

const BENEFITS: [(&str, &str); 3] = [
    (icons::CHECK_CIRCLE, "No code rip-outs"),
    (icons::CLOCK, "Live in weeks"),
    (icons::DOLLAR, "Pay only on results"),
];

#[component]
pub fn FinalCta() -> impl IntoView {
    let nav = use_nav_context();

    let on_book = Callback::new(move |_| {
        track(analytics::FINAL_STRATEGY_CALL);
        nav.navigate(Page::StrategyCall);
    });

    view! {
        <section
            id="final-cta"
            class="bg-canvas-navy py-20 relative overflow-hidden"
            aria-labelledby="final-cta-heading"
        >
            <div class="absolute inset-0 bg-ai-glow-gradient opacity-10"></div>
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-96 h-96 bg-ai-glow-gradient opacity-20 rounded-full blur-3xl"></div>

            <div class="max-w-4xl mx-auto px-6 text-center relative z-10 scroll-animate">
                <h2 id="final-cta-heading" class="text-primary-text font-bold text-3xl md:text-5xl mb-6">
                    "90-Day ROI-or-Free Guarantee"
                </h2>
                <p class="text-body-text text-lg md:text-xl leading-relaxed mb-8 max-w-3xl mx-auto">
                    "If we don't hit measurable ROI in 90 days, you don't pay a dime. We're so confident in our AI Transformation Sprint that your success is our only payment method."
                </p>

                <div class="inline-flex items-center gap-3 bg-elevated-card rounded-full px-8 py-4 border border-success-green mb-8">
                    <Icon name=icons::SHIELD class="w-8 h-8 text-success-green"/>
                    <div class="text-left">
                        <div class="text-primary-text font-bold text-lg">"Risk-Free Promise"</div>
                        <div class="text-success-green text-sm">"90-Day Money-Back Guarantee"</div>
                    </div>
                </div>

                <div class="flex flex-col md:flex-row justify-center items-center gap-4 md:gap-8 mb-12">
                    {BENEFITS
                        .iter()
                        .map(|(icon, text)| view! {
                            <div class="flex items-center gap-2">
                                <Icon name=*icon class="w-6 h-6 text-primary-purple"/>
                                <span class="text-primary-text text-lg">{*text}</span>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class="card p-6 mb-8">
                    <p class="text-body-text text-lg leading-relaxed">
                        "We guarantee documented cost savings that exceed our fees within 90 days. If you don't see measurable ROI with verified metrics, you pay nothing. Your success is literally our business model."
                    </p>
                </div>

                <Button
                    variant=ButtonVariant::Gradient
                    size=ButtonSize::Hero
                    class="animate-glow mb-6".to_string()
                    on_click=on_book
                >
                    "Book My Strategy Call"
                </Button>

                <p class="text-body-text text-sm">
                    "No obligation • Free consultation • Results guaranteed • 24-hour response"
                </p>
            </div>
        </section>
    }
}
