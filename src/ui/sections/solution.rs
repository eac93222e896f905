use leptos::prelude::*;

/// Stages along the bridge line, with their dot and label colours
const BRIDGE_STEPS: [(&str, &str, &str); 4] = [
    ("Manual Chaos", "bg-warning-red", "text-warning-red"),
    ("Process Audit", "bg-cyan-interactive", "text-cyan-interactive"),
    ("AI Integration", "bg-amber-cta", "text-amber-cta"),
    ("Automated Profits", "bg-success-green", "text-success-green"),
];

/// Left offset of the `index`th dot along the line, in percent
fn step_offset(index: usize, steps: usize) -> f64 {
    if steps < 2 {
        return 0.0;
    }
    index as f64 * 100.0 / (steps - 1) as f64
}

#[component]
pub fn SolutionBridge() -> impl IntoView {
    view! {
        <section id="solution-bridge" class="bg-canvas-navy py-20">
            <div class="max-w-6xl mx-auto px-6">
                <p class="text-primary-text text-xl md:text-2xl leading-relaxed max-w-4xl mx-auto mb-16 text-center scroll-animate">
                    "You don't need a full tech team. Just the right buddy."
                </p>

                <div class="relative mx-auto max-w-5xl mb-8 scroll-animate">
                    <div class="h-1 bg-ai-glow-gradient relative">
                        {BRIDGE_STEPS
                            .iter()
                            .enumerate()
                            .map(|(index, (_, dot, _))| view! {
                                <div
                                    class=format!("absolute w-4 h-4 rounded-full -translate-x-1/2 {}", dot)
                                    style=format!(
                                        "left: {}%; top: -6px;",
                                        step_offset(index, BRIDGE_STEPS.len()),
                                    )
                                ></div>
                            })
                            .collect_view()}
                    </div>

                    <div class="grid grid-cols-4 gap-4 mt-8">
                        {BRIDGE_STEPS
                            .iter()
                            .map(|(label, _, text)| view! {
                                <div class=format!("text-center text-sm font-medium {}", text)>{*label}</div>
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn SolutionStatement() -> impl IntoView {
    view! {
        <section id="solution" class="bg-canvas-navy py-16">
            <div class="max-w-6xl mx-auto px-6 text-center scroll-animate">
                <p class="text-primary-text text-xl md:text-2xl leading-relaxed max-w-4xl mx-auto">
                    "Our AI Transformation Sprint finds, automates, and monetizes those hidden leaks, delivering provable savings in weeks, not quarters."
                </p>
                <div class="mt-12 h-1 bg-ai-glow-gradient mx-auto max-w-3xl"></div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_offsets_span_the_line() {
        let offsets: Vec<f64> = (0..4).map(|i| step_offset(i, 4)).collect();
        assert_eq!(offsets[0], 0.0);
        assert_eq!(offsets[3], 100.0);
        assert!((offsets[1] - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(step_offset(0, 1), 0.0);
    }
}
