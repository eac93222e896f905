use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::{wasm_bindgen::JsCast, web_sys};

/// Marker class on the backdrop; clicks whose target carries it close the modal
const BACKDROP_CLASS: &str = "modal-backdrop";

/// Base modal component with consistent structure
#[component]
pub fn BaseModal(
    /// Modal title
    title: &'static str,
    /// Whether modal is open
    is_open: Signal<bool>,
    /// Callback to close modal
    on_close: Callback<()>,
    /// Modal content
    children: Children,
    /// Maximum width class (default: max-w-2xl)
    #[prop(default = "max-w-2xl")]
    max_width: &'static str,
) -> impl IntoView {
    // Close on Escape key
    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::keydown;

        let handle_keydown = window_event_listener(keydown, move |ev| {
            if ev.key() == "Escape" && is_open.get_untracked() {
                on_close.run(());
            }
        });

        on_cleanup(move || handle_keydown.remove());
    }

    view! {
        <div
            class=move || {
                if is_open.get() {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 transition-opacity duration-300"
                } else {
                    "modal-backdrop fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 opacity-0 pointer-events-none transition-opacity duration-300"
                }
            }
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!is_open.get()).to_string()
            on:click=move |e| {
                #[cfg(not(feature = "ssr"))]
                {
                    let on_backdrop = e
                        .target()
                        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                        .is_some_and(|element| element.class_list().contains(BACKDROP_CLASS));
                    if on_backdrop {
                        on_close.run(());
                    }
                }
                #[cfg(feature = "ssr")]
                {
                    let _ = (e, BACKDROP_CLASS);
                }
            }
        >
            <div class=format!(
                "w-full {} max-h-[80vh] overflow-y-auto bg-canvas-navy rounded-xl p-8 border border-neutral-stroke",
                max_width,
            )>
                // Header
                <div class="flex justify-between items-center mb-6">
                    <h3 class="text-primary-text font-bold text-2xl">{title}</h3>
                    <button
                        type="button"
                        class="text-body-text hover:text-primary-text transition-colors"
                        on:click=move |_| on_close.run(())
                        aria-label="Close modal"
                    >
                        <Icon name=icons::X class="w-6 h-6"/>
                    </button>
                </div>

                // Content
                {children()}
            </div>
        </div>
    }
}
