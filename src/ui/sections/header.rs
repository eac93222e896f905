use leptos::prelude::*;

use crate::core::Page;
use crate::core::analytics;
use crate::ui::analytics::track;
use crate::ui::common::{Button, ButtonSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_nav_context;

/// Scroll offset after which the header turns opaque
const OPAQUE_AFTER_PX: f64 = 50.0;

/// In-page anchors shown in the menu
const MENU_ITEMS: [(&str, &str); 5] = [
    ("Solutions", "#usp"),
    ("Case Study", "#case"),
    ("Process", "#roadmap"),
    ("Testimonials", "#social"),
    ("FAQ", "#faq"),
];

#[component]
pub fn Header() -> impl IntoView {
    let nav = use_nav_context();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (is_scrolled, set_is_scrolled) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::scroll;

        let handle_scroll = window_event_listener(scroll, move |_| {
            let offset = window().scroll_y().unwrap_or(0.0);
            set_is_scrolled.set(offset > OPAQUE_AFTER_PX);
        });

        on_cleanup(move || handle_scroll.remove());
    }
    #[cfg(feature = "ssr")]
    let _ = (set_is_scrolled, OPAQUE_AFTER_PX);

    let on_cta = Callback::new(move |_| {
        track(analytics::HEADER_ROI_FORECAST);
        set_mobile_menu_open.set(false);
        nav.navigate(Page::Contact);
    });

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 transition-all duration-300"
            class=("bg-canvas-navy", move || is_scrolled.get())
            class=("shadow-lg", move || is_scrolled.get())
            class=("bg-transparent", move || !is_scrolled.get())
        >
            <div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
                // Brand
                <button
                    type="button"
                    class="flex items-center gap-2 hover:opacity-80 transition-opacity"
                    on:click=move |_| nav.go_home()
                >
                    <Icon name=icons::BOT class="w-8 h-8 text-amber-cta"/>
                    <span class="text-primary-text font-bold text-xl">"BuddyBots.ai"</span>
                </button>

                // Desktop Navigation
                <nav class="hidden md:flex items-center gap-8">
                    {MENU_ITEMS
                        .iter()
                        .map(|(label, href)| view! {
                            <a
                                href=*href
                                class="text-body-text hover:text-cyan-interactive font-medium transition-colors duration-200"
                            >
                                {*label}
                            </a>
                        })
                        .collect_view()}
                </nav>

                <Button size=ButtonSize::Small class="hidden md:inline-flex".to_string() on_click=on_cta>
                    "Get My Free ROI Forecast"
                </Button>

                // Mobile menu button
                <button
                    type="button"
                    class="md:hidden text-primary-text"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6"/> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6"/> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <div
                class="md:hidden overflow-hidden transition-all duration-300 bg-canvas-navy"
                class:max-h-0=move || !mobile_menu_open.get()
                class:max-h-96=move || mobile_menu_open.get()
            >
                <div class="px-6 py-4 space-y-4 border-t border-neutral-stroke">
                    {MENU_ITEMS
                        .iter()
                        .map(|(label, href)| view! {
                            <a
                                href=*href
                                class="block w-full text-left text-body-text hover:text-cyan-interactive font-medium transition-colors duration-200"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {*label}
                            </a>
                        })
                        .collect_view()}
                    <Button size=ButtonSize::Small class="w-full".to_string() on_click=on_cta>
                        "Get My Free ROI Forecast"
                    </Button>
                </div>
            </div>
        </header>
    }
}
