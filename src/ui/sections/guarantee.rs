use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn Guarantee() -> impl IntoView {
    view! {
        <section id="guarantee" class="bg-canvas-navy py-20">
            <div class="max-w-6xl mx-auto px-6">
                <div class="grid md:grid-cols-[1.1fr_0.9fr] gap-6 md:gap-20 items-center scroll-animate">
                    <div>
                        <h2 class="section-title mb-6 max-w-2xl leading-tight">"ROI-or-Free 90-Day Guarantee"</h2>
                        <p class="text-body-text text-lg leading-relaxed max-w-2xl">
                            "We're so confident in our AI Transformation Sprint that we guarantee documented ROI within 90 days. If you don't see measurable cost savings that exceed our fees, you pay nothing and keep all implemented solutions. Your success is our only payment."
                        </p>
                    </div>

                    <div class="flex justify-center md:justify-end">
                        <div class="w-48 h-48 rounded-full bg-ai-glow-gradient flex items-center justify-center drop-shadow-ai-glow">
                            <Icon name=icons::SHIELD class="w-24 h-24 text-primary-text"/>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
