use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Footer component
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-elevated-card py-16 border-t border-neutral-stroke relative overflow-hidden">
            // Outlined wordmark behind the content
            <div class="absolute inset-0 flex items-end justify-center pointer-events-none pb-8" aria-hidden="true">
                <div class="footer-wordmark font-black text-transparent select-none opacity-40 whitespace-nowrap">
                    "BuddyBots"
                </div>
            </div>

            <div class="max-w-6xl mx-auto px-6 relative z-10 text-center">
                <div class="flex items-center justify-center gap-2 mb-4">
                    <Icon name=icons::BOT class="w-8 h-8 text-primary-purple"/>
                    <span class="text-primary-text font-bold text-xl">"BuddyBots.ai"</span>
                </div>

                <p class="text-body-text text-lg mb-8 max-w-2xl mx-auto">
                    "Transforming operations with AI-powered automation that delivers measurable ROI in weeks, not months."
                </p>

                <p class="text-body-text text-base leading-relaxed max-w-4xl mx-auto mb-8">
                    "We help businesses automate their operations with AI solutions that actually work. Our proven 6-week transformation sprint delivers measurable ROI through strategic AI implementation. Join 47+ companies who've already transformed their workflows and cut costs by 30% or more."
                </p>

                <p class="text-body-text text-sm mb-8">
                    "Questions? Reach out at "
                    <a
                        href="mailto:hello@buddybots.ai"
                        class="text-primary-purple hover:text-primary-magenta transition-colors"
                    >
                        "hello@buddybots.ai"
                    </a>
                </p>

                <p class="text-body-text text-sm">"© 2025 BuddyBots.ai. All rights reserved."</p>
            </div>
        </footer>
    }
}
