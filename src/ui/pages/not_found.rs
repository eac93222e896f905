//! Not found page component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-canvas-navy bg-circuit-pattern flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-elevated-card rounded-full flex items-center justify-center border border-neutral-stroke">
                    <Icon name=icons::SEARCH class="w-12 h-12 text-body-text"/>
                </div>

                <h1 class="text-6xl font-bold text-primary-text mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-primary-text mb-2">"Page Not Found"</h2>
                <p class="text-body-text mb-8 max-w-md mx-auto">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <A href="/" attr:class="btn-base btn-amber">
                    "Back to BuddyBots.ai"
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-sm text-body-text">"© 2025 BuddyBots.ai"</p>
            </div>
        </div>
    }
}
