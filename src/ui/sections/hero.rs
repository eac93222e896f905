use leptos::prelude::*;

use crate::core::catalog::{INDUSTRIES, REVENUE_RANGES, select_options};
use crate::core::{Field, FormValidation, LeadForm, Page, analytics};
use crate::ui::analytics::track;
use crate::ui::common::{
    Button, ButtonSize, ButtonVariant, FormField, SelectField, bind, field_error,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_nav_context;
use crate::ui::particles::ParticleCanvas;

const ACHIEVEMENTS: [&str; 3] = [
    "240+ Hours Saved",
    "85% Error Reduction",
    "150+ Companies Buddy-fied",
];

const TRUSTED_BY: [&str; 5] = ["ACME", "TechCorp", "Global", "Industries", "Innovate"];

#[component]
pub fn Hero() -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <section id="hero" class="relative min-h-screen bg-canvas-navy bg-circuit-pattern flex items-center pt-20 overflow-hidden">
            <ParticleCanvas/>

            <div class="relative z-10 max-w-7xl mx-auto px-6 py-20">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    // Pitch
                    <div class="relative animate-fade-in">
                        <div class="absolute inset-0 bg-ai-glow-gradient opacity-20 blur-3xl rounded-full"></div>

                        <h1 class="relative text-primary-text font-bold text-4xl md:text-5xl lg:text-6xl leading-tight mb-6 drop-shadow-ai-glow">
                            "Cut Costs by "
                            <span class="bg-ai-glow-gradient bg-clip-text text-transparent">"30%"</span>
                            " in 90 Days, Without Laying Off a Single Team Member"
                        </h1>

                        <p class="text-body-text text-lg md:text-xl leading-relaxed mb-8">
                            "Our AI buddies bolt onto your systems, streamline workflows & amplify ROI without disrupting your teams."
                        </p>

                        <ul class="space-y-4 mb-8">
                            {ACHIEVEMENTS
                                .iter()
                                .map(|text| view! {
                                    <li class="flex items-center gap-3">
                                        <Icon name=icons::CHECK_CIRCLE class="w-6 h-6 text-success-green"/>
                                        <span class="text-primary-text text-lg font-semibold">{*text}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>

                        <div class="flex flex-col sm:flex-row gap-4 mb-8">
                            <Button
                                size=ButtonSize::Large
                                icon=icons::CALCULATOR
                                class="animate-glow".to_string()
                                on_click=Callback::new(move |_| {
                                    track(analytics::HERO_ROI_CALCULATOR);
                                    nav.navigate(Page::RoiCalculator);
                                })
                            >
                                "Get ROI Calculator"
                            </Button>
                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Large
                                icon=icons::PHONE
                                on_click=Callback::new(move |_| {
                                    track(analytics::HERO_STRATEGY_CALL);
                                    nav.navigate(Page::StrategyCall);
                                })
                            >
                                "Book Strategy Call"
                            </Button>
                        </div>

                        <p class="text-body-text text-sm">"Trusted by CEOs at 150+ Companies"</p>
                    </div>

                    // Lead form
                    <div class="relative">
                        <LeadCaptureCard/>

                        <div class="mt-8">
                            <p class="text-body-text text-sm text-center mb-6">"Trusted by industry leaders"</p>
                            <div class="flex items-center justify-center flex-wrap gap-4">
                                {TRUSTED_BY
                                    .iter()
                                    .map(|name| view! {
                                        <div class="px-4 h-12 bg-elevated-card border border-neutral-stroke rounded-lg flex items-center justify-center hover:border-amber-cta transition-colors">
                                            <span class="text-body-text text-xs font-semibold">{*name}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Short assessment form. A valid submission opens the booking page with the
/// visitor's details prefilled.
#[component]
fn LeadCaptureCard() -> impl IntoView {
    let nav = use_nav_context();
    let form = RwSignal::new(LeadForm::default());
    let errors = RwSignal::new(FormValidation::new());

    let name = bind(form, |f| &f.name, |f| &mut f.name);
    let company = bind(form, |f| &f.company, |f| &mut f.company);
    let industry = bind(form, |f| &f.industry, |f| &mut f.industry);
    let revenue = bind(form, |f| &f.annual_revenue, |f| &mut f.annual_revenue);
    let phone = bind(form, |f| &f.phone, |f| &mut f.phone);
    let email = bind(form, |f| &f.email, |f| &mut f.email);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let validation = form.with(LeadForm::validate);
        let valid = validation.is_valid();
        errors.set(validation);
        if !valid {
            return;
        }
        track(analytics::HERO_LEAD_FORM);
        nav.book_call(form.with(LeadForm::to_prefill));
    };

    view! {
        <div class="bg-elevated-card rounded-xl p-8 shadow-2xl border border-neutral-stroke relative overflow-hidden">
            <div class="absolute top-0 right-0 w-32 h-32 bg-ai-glow-gradient opacity-10 rounded-full translate-x-16 -translate-y-16"></div>

            <div class="relative">
                <h3 class="text-primary-text font-bold text-2xl mb-2">"Get Your Free ROI Assessment"</h3>
                <p class="text-body-text mb-6">"See exactly how much you could save in 90 days"</p>

                <form class="space-y-4" method="post" on:submit=on_submit>
                    <FormField
                        name="name"
                        required=true
                        placeholder="Full Name"
                        value=name.value
                        on_input=name.on_input
                        error=field_error(errors, Field::Name)
                    />
                    <FormField
                        name="companyName"
                        required=true
                        placeholder="Company Name"
                        value=company.value
                        on_input=company.on_input
                        error=field_error(errors, Field::Company)
                    />
                    <SelectField
                        name="industry"
                        required=true
                        value=industry.value
                        on_change=industry.on_input
                        options=select_options("Select Industry", INDUSTRIES)
                        error=field_error(errors, Field::Industry)
                    />
                    <SelectField
                        name="annualRevenue"
                        required=true
                        value=revenue.value
                        on_change=revenue.on_input
                        options=select_options("Annual Revenue", REVENUE_RANGES)
                        error=field_error(errors, Field::AnnualRevenue)
                    />
                    <FormField
                        name="phone"
                        input_type="tel"
                        required=true
                        placeholder="Phone Number"
                        value=phone.value
                        on_input=phone.on_input
                        error=field_error(errors, Field::Phone)
                    />
                    <FormField
                        name="email"
                        input_type="email"
                        required=true
                        placeholder="Business Email"
                        value=email.value
                        on_input=email.on_input
                        error=field_error(errors, Field::Email)
                    />

                    <Button button_type="submit" size=ButtonSize::Large class="w-full".to_string()>
                        "Get My Free Assessment"
                    </Button>
                </form>

                <p class="text-body-text text-xs mt-4 text-center">
                    "No spam. Unsubscribe anytime. Results in 24 hours."
                </p>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::navigation::provide_nav_context;

    #[test]
    fn test_lead_form_posts_with_required_fields() {
        let owner = Owner::new();
        owner.set();
        provide_nav_context();
        let html = view! { <LeadCaptureCard/> }.to_html();

        assert!(html.contains(r#"method="post""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.matches("required").count() >= 6);
    }
}
