use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

const FAQS: [(&str, &str); 4] = [
    (
        "What if we don't see $250K in savings potential?",
        "We only engage with companies where we can identify minimum $250K annual savings in the discovery phase. If we can't find that potential, we'll refer you to more suitable solutions at no charge.",
    ),
    (
        "Will this disrupt our current operations?",
        "Our AI solutions integrate seamlessly with your existing systems. We deploy in parallel environments first, ensuring zero disruption to daily operations during the pilot phase.",
    ),
    (
        "How do you guarantee ROI in 90 days?",
        "We provide detailed ROI documentation with verified savings metrics. If documented savings don't meet projections within 90 days, you pay nothing and keep all implemented solutions.",
    ),
    (
        "What happens after the 6-week sprint?",
        "You receive a complete implementation roadmap, trained team, and optional ongoing optimization support. Most clients see 3x additional savings in months 6-12 following our playbook.",
    ),
];

/// Open `index`, or close it if it is already the open item
fn toggle(open: Option<usize>, index: usize) -> Option<usize> {
    if open == Some(index) { None } else { Some(index) }
}

/// FAQ accordion; at most one answer is expanded
#[component]
pub fn Faq() -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    view! {
        <section id="faq" class="bg-canvas-navy py-20">
            <div class="max-w-4xl mx-auto px-6">
                <h2 class="section-title text-center mb-12">"Frequently Asked Questions"</h2>

                <div class="space-y-4">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, (question, answer))| {
                            let is_open = move || open.get() == Some(index);
                            view! {
                                <div class="card overflow-hidden scroll-animate">
                                    <button
                                        type="button"
                                        class="w-full text-left p-6 flex justify-between items-center hover:bg-canvas-navy transition-colors duration-200"
                                        on:click=move |_| set_open.update(|o| *o = toggle(*o, index))
                                        aria-expanded=move || is_open().to_string()
                                    >
                                        <span class="text-primary-text font-semibold text-lg pr-4">{*question}</span>
                                        {move || {
                                            if is_open() {
                                                view! { <Icon name=icons::MINUS class="w-6 h-6 text-amber-cta shrink-0"/> }.into_any()
                                            } else {
                                                view! { <Icon name=icons::PLUS class="w-6 h-6 text-amber-cta shrink-0"/> }.into_any()
                                            }
                                        }}
                                    </button>
                                    <div
                                        class="overflow-hidden transition-all duration-300"
                                        class:max-h-0=move || !is_open()
                                        class:max-h-96=is_open
                                    >
                                        <p class="px-6 pb-6 text-body-text leading-relaxed">{*answer}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_single_open() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(2), 2), None);
        assert_eq!(toggle(Some(0), 3), Some(3));
    }
}
