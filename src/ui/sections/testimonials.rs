use leptos::prelude::*;

use crate::core::carousel::Carousel;
use crate::ui::icon::{Icon, icons};
use crate::ui::timers::use_interval;

/// Delay between automatic slide changes
const AUTO_ADVANCE_MS: u32 = 8_000;

struct Metric {
    icon: &'static str,
    value: &'static str,
    label: &'static str,
    color: &'static str,
    badge: &'static str,
    icon_class: &'static str,
}

struct Testimonial {
    name: &'static str,
    role: &'static str,
    company: &'static str,
    initials: &'static str,
    quote: &'static str,
    metrics: [Metric; 3],
}

const fn savings(value: &'static str) -> Metric {
    Metric {
        icon: icons::DOLLAR,
        value,
        label: "Cost Reduction",
        color: "text-success-green",
        badge: "bg-success-green/20",
        icon_class: "w-8 h-8 text-success-green",
    }
}

const fn speed(value: &'static str, label: &'static str) -> Metric {
    Metric {
        icon: icons::CLOCK,
        value,
        label,
        color: "text-amber-cta",
        badge: "bg-amber-cta/20",
        icon_class: "w-8 h-8 text-amber-cta",
    }
}

const fn roi(value: &'static str) -> Metric {
    Metric {
        icon: icons::TRENDING_UP,
        value,
        label: "ROI",
        color: "text-cyan-interactive",
        badge: "bg-cyan-interactive/20",
        icon_class: "w-8 h-8 text-cyan-interactive",
    }
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "CEO",
        company: "TechFlow Manufacturing",
        initials: "SC",
        quote: "BuddyBots reduced our operational costs by 35% in just 8 weeks. We eliminated 240 hours of manual work per week and reinvested that time into strategic growth initiatives.",
        metrics: [savings("35%"), speed("240hrs/week", "Time Saved"), roi("380%")],
    },
    Testimonial {
        name: "Marcus Rodriguez",
        role: "Operations Director",
        company: "Global Logistics Inc",
        initials: "MR",
        quote: "From manual chaos to automated precision in 6 weeks. Our fulfillment speed increased 40% while cutting operational costs 18%. The ROI was immediate and measurable.",
        metrics: [savings("18%"), speed("40%", "Speed Increase"), roi("290%")],
    },
    Testimonial {
        name: "Dr. Amanda Foster",
        role: "CEO",
        company: "MedDevice Solutions",
        initials: "AF",
        quote: "Zero disruption, maximum impact. The team delivered exactly what they promised: measurable ROI with risk-free implementation. Our efficiency gains compound monthly.",
        metrics: [savings("28%"), speed("180hrs/week", "Time Saved"), roi("420%")],
    },
];

/// Testimonial carousel with arrows, dots and auto-advance
#[component]
pub fn Testimonials() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(TESTIMONIALS.len()));
    let current = move || &TESTIMONIALS[carousel.with(Carousel::index)];

    use_interval(AUTO_ADVANCE_MS, move || carousel.update(Carousel::next));

    view! {
        <section id="social" class="bg-canvas-navy py-20">
            <div class="max-w-6xl mx-auto px-6">
                <h2 class="section-title text-center mb-12">"What Our Clients Say"</h2>

                <div class="bg-elevated-card rounded-2xl p-8 md:p-12 border border-neutral-stroke relative overflow-hidden">
                    <div class="absolute top-0 right-0 w-32 h-32 bg-ai-glow-gradient opacity-10 rounded-full translate-x-16 -translate-y-16"></div>

                    <div class="text-center mb-8 text-6xl text-amber-cta font-serif" aria-hidden="true">"\u{201C}"</div>

                    {move || {
                        let t = current();
                        view! {
                            <div class="text-center mb-8 animate-fade-in">
                                <blockquote class="text-primary-text text-lg md:text-xl leading-relaxed mb-8 max-w-4xl mx-auto">
                                    {t.quote}
                                </blockquote>

                                <div class="flex items-center justify-center gap-4">
                                    <div class="w-14 h-14 rounded-full bg-ai-glow-gradient flex items-center justify-center text-primary-text font-bold">
                                        {t.initials}
                                    </div>
                                    <div class="text-left">
                                        <div class="text-cyan-interactive font-semibold text-lg">{t.name}</div>
                                        <div class="text-amber-cta font-medium">{t.role}</div>
                                        <div class="text-body-text text-sm">{t.company}</div>
                                    </div>
                                </div>
                            </div>

                            <div class="grid md:grid-cols-3 gap-6 mb-8">
                                {t.metrics
                                    .iter()
                                    .map(|metric| view! {
                                        <div class="text-center animate-fade-in">
                                            <div class=format!(
                                                "w-16 h-16 {} rounded-full flex items-center justify-center mx-auto mb-3",
                                                metric.badge,
                                            )>
                                                <Icon name=metric.icon class=metric.icon_class/>
                                            </div>
                                            <div class=format!("{} font-bold text-2xl mb-1", metric.color)>{metric.value}</div>
                                            <div class="text-body-text text-sm">{metric.label}</div>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        }
                    }}

                    // Navigation
                    <div class="flex items-center justify-center gap-4">
                        <button
                            type="button"
                            class="carousel-arrow group"
                            on:click=move |_| carousel.update(Carousel::prev)
                            aria-label="Previous testimonial"
                        >
                            <Icon name=icons::CHEVRON_LEFT class="w-6 h-6 text-cyan-interactive group-hover:text-canvas-navy transition-colors"/>
                        </button>

                        <div class="flex gap-2">
                            {(0..TESTIMONIALS.len())
                                .map(|index| view! {
                                    <button
                                        type="button"
                                        class="w-3 h-3 rounded-full transition-colors duration-200"
                                        class=("bg-amber-cta", move || carousel.with(Carousel::index) == index)
                                        class=("bg-neutral-stroke", move || carousel.with(Carousel::index) != index)
                                        on:click=move |_| carousel.update(|c| c.select(index))
                                        aria-label=format!("Show testimonial {}", index + 1)
                                    ></button>
                                })
                                .collect_view()}
                        </div>

                        <button
                            type="button"
                            class="carousel-arrow group"
                            on:click=move |_| carousel.update(Carousel::next)
                            aria-label="Next testimonial"
                        >
                            <Icon name=icons::CHEVRON_RIGHT class="w-6 h-6 text-cyan-interactive group-hover:text-canvas-navy transition-colors"/>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

