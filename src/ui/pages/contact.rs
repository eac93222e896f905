//! Full assessment request form and its thank-you view

use leptos::prelude::*;

use crate::core::catalog::{
    CONTACT_INDUSTRIES, CONTACT_REVENUE_RANGES, EMPLOYEE_RANGES, TIMELINES, select_options,
};
use crate::core::{ContactRequest, Field, FormValidation, analytics};
use crate::ui::analytics::track;
use crate::ui::common::{
    BackButton, Button, ButtonSize, ButtonVariant, FormField, SelectField, TextAreaField, bind,
    field_error,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_nav_context;

const NEXT_STEPS: [&str; 3] = [
    "We'll review your information and prepare a custom analysis",
    "Our team will reach out within 24 hours to schedule a brief discovery call",
    "You'll receive a detailed ROI forecast and implementation roadmap",
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let request = RwSignal::new(ContactRequest::default());
    let submitted = RwSignal::new(false);

    view! {
        <Show
            when=move || submitted.get()
            fallback=move || view! { <ContactFormView request=request submitted=submitted/> }
        >
            <ThankYouView request=request/>
        </Show>
    }
}

#[component]
fn ContactFormView(request: RwSignal<ContactRequest>, submitted: RwSignal<bool>) -> impl IntoView {
    let nav = use_nav_context();
    let errors = RwSignal::new(FormValidation::new());

    let first_name = bind(request, |r| &r.first_name, |r| &mut r.first_name);
    let last_name = bind(request, |r| &r.last_name, |r| &mut r.last_name);
    let email = bind(request, |r| &r.email, |r| &mut r.email);
    let phone = bind(request, |r| &r.phone, |r| &mut r.phone);
    let company = bind(request, |r| &r.company, |r| &mut r.company);
    let industry = bind(request, |r| &r.industry, |r| &mut r.industry);
    let revenue = bind(request, |r| &r.annual_revenue, |r| &mut r.annual_revenue);
    let employees = bind(request, |r| &r.employees, |r| &mut r.employees);
    let timeline = bind(request, |r| &r.timeline, |r| &mut r.timeline);
    let challenges = bind(request, |r| &r.challenges, |r| &mut r.challenges);
    let goals = bind(request, |r| &r.goals, |r| &mut r.goals);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let validation = request.with(ContactRequest::validate);
        let valid = validation.is_valid();
        errors.set(validation);
        if valid {
            track(analytics::CONTACT_FORM_SUBMIT);
            submitted.set(true);
        }
    };

    view! {
        <div class="min-h-screen bg-canvas-navy pt-20">
            <div class="max-w-4xl mx-auto px-6 py-12 animate-fade-in">
                <div class="flex items-center mb-8">
                    <BackButton on_click=Callback::new(move |_| nav.go_home())/>
                </div>

                <div class="text-center mb-12">
                    <div class="flex items-center justify-center gap-3 mb-4">
                        <Icon name=icons::MAIL class="w-8 h-8 text-amber-cta"/>
                        <h1 class="text-primary-text font-bold text-3xl md:text-4xl">"Get Your Free ROI Assessment"</h1>
                    </div>
                    <p class="text-body-text text-lg">
                        "Tell us about your business and we'll create a custom automation roadmap"
                    </p>
                </div>

                <form class="card p-8" method="post" on:submit=on_submit>
                    <div class="grid md:grid-cols-2 gap-6">
                        <div>
                            <h3 class="text-primary-text font-bold text-lg mb-4">"Contact Information"</h3>
                            <div class="space-y-4">
                                <div class="grid grid-cols-2 gap-4">
                                    <FormField
                                        label=Field::FirstName.to_string()
                                        name="firstName"
                                        required=true
                                        value=first_name.value
                                        on_input=first_name.on_input
                                        error=field_error(errors, Field::FirstName)
                                    />
                                    <FormField
                                        label=Field::LastName.to_string()
                                        name="lastName"
                                        required=true
                                        value=last_name.value
                                        on_input=last_name.on_input
                                        error=field_error(errors, Field::LastName)
                                    />
                                </div>
                                <FormField
                                    label=Field::Email.to_string()
                                    name="email"
                                    input_type="email"
                                    required=true
                                    value=email.value
                                    on_input=email.on_input
                                    error=field_error(errors, Field::Email)
                                />
                                <FormField
                                    label=Field::Phone.to_string()
                                    name="phone"
                                    input_type="tel"
                                    required=true
                                    value=phone.value
                                    on_input=phone.on_input
                                    error=field_error(errors, Field::Phone)
                                />
                            </div>
                        </div>

                        <div>
                            <h3 class="text-primary-text font-bold text-lg mb-4">"Company Information"</h3>
                            <div class="space-y-4">
                                <FormField
                                    label=Field::Company.to_string()
                                    name="company"
                                    required=true
                                    value=company.value
                                    on_input=company.on_input
                                    error=field_error(errors, Field::Company)
                                />
                                <SelectField
                                    label=Field::Industry.to_string()
                                    name="industry"
                                    required=true
                                    value=industry.value
                                    on_change=industry.on_input
                                    options=select_options("Select Industry", CONTACT_INDUSTRIES)
                                    error=field_error(errors, Field::Industry)
                                />
                                <SelectField
                                    label=Field::AnnualRevenue.to_string()
                                    name="annualRevenue"
                                    required=true
                                    value=revenue.value
                                    on_change=revenue.on_input
                                    options=select_options("Select Revenue Range", CONTACT_REVENUE_RANGES)
                                    error=field_error(errors, Field::AnnualRevenue)
                                />
                                <SelectField
                                    label=Field::Employees.to_string()
                                    name="employees"
                                    required=true
                                    value=employees.value
                                    on_change=employees.on_input
                                    options=select_options("Select Employee Range", EMPLOYEE_RANGES)
                                    error=field_error(errors, Field::Employees)
                                />
                            </div>
                        </div>
                    </div>

                    <div class="mt-8">
                        <h3 class="text-primary-text font-bold text-lg mb-4">"Project Information"</h3>
                        <div class="space-y-4">
                            <SelectField
                                label=Field::Timeline.to_string()
                                name="urgency"
                                required=true
                                value=timeline.value
                                on_change=timeline.on_input
                                options=select_options("Select Timeline", TIMELINES)
                                error=field_error(errors, Field::Timeline)
                            />
                            <TextAreaField
                                label=Field::Challenges.to_string()
                                name="challenges"
                                required=true
                                placeholder="Describe your biggest operational pain points, manual processes, or inefficiencies..."
                                value=challenges.value
                                on_input=challenges.on_input
                                error=field_error(errors, Field::Challenges)
                            />
                            <TextAreaField
                                label=Field::Goals.to_string()
                                name="goals"
                                rows=3
                                placeholder="What specific outcomes are you hoping to achieve with automation?"
                                value=goals.value
                                on_input=goals.on_input
                            />
                        </div>
                    </div>

                    <div class="mt-8 pt-6 border-t border-neutral-stroke">
                        <Button
                            button_type="submit"
                            variant=ButtonVariant::Gradient
                            size=ButtonSize::Large
                            icon=icons::SEND
                            class="w-full".to_string()
                        >
                            "Get My Free ROI Assessment"
                        </Button>
                        <p class="text-body-text text-sm text-center mt-4">
                            "* Required fields. We'll respond within 24 hours with your custom analysis."
                        </p>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Confirmation shown after a valid submission. Booking from here carries the
/// submitted details into the scheduler.
#[component]
fn ThankYouView(request: RwSignal<ContactRequest>) -> impl IntoView {
    let nav = use_nav_context();

    view! {
        <div class="min-h-screen bg-canvas-navy pt-20 flex items-center justify-center">
            <div class="max-w-2xl mx-auto px-6 text-center animate-fade-in">
                <div class="bg-elevated-card rounded-xl p-12 border border-success-green">
                    <Icon name=icons::CHECK_CIRCLE class="w-16 h-16 text-success-green mx-auto mb-6"/>
                    <h1 class="text-primary-text font-bold text-3xl mb-4">"Thank You for Your Interest!"</h1>
                    <p class="text-body-text text-lg mb-6">
                        "We've received your information and will be in touch within 24 hours with your custom ROI assessment."
                    </p>

                    <div class="bg-canvas-navy rounded-lg p-6 mb-6">
                        <h3 class="text-amber-cta font-bold text-lg mb-4">"What Happens Next:"</h3>
                        <ul class="text-left space-y-3">
                            {NEXT_STEPS
                                .iter()
                                .enumerate()
                                .map(|(i, step)| view! {
                                    <li class="flex items-start gap-3">
                                        <div class="w-6 h-6 bg-amber-cta text-canvas-navy rounded-full flex items-center justify-center text-sm font-bold mt-0.5 flex-shrink-0">
                                            {i + 1}
                                        </div>
                                        <span class="text-body-text">{*step}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <Button
                            variant=ButtonVariant::Gradient
                            on_click=Callback::new(move |_| nav.go_home())
                        >
                            "Return to Home"
                        </Button>
                        <Button
                            variant=ButtonVariant::Outline
                            icon=icons::CALENDAR
                            on_click=Callback::new(move |_| {
                                nav.book_call(request.with(ContactRequest::to_prefill))
                            })
                        >
                            "Book My Strategy Call"
                        </Button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::ui::navigation::provide_nav_context;

    fn render_contact_form() -> String {
        let owner = Owner::new();
        owner.set();
        provide_nav_context();
        view! { <ContactPage/> }.to_html()
    }

    #[test]
    fn test_contact_form_keeps_browser_required_checks() {
        let html = render_contact_form();

        assert!(!html.contains("novalidate"));
        assert!(html.contains(r#"name="firstName""#));
        assert!(html.matches("required").count() >= 10);
    }

    #[test]
    fn test_contact_form_posts_instead_of_query_string() {
        let html = render_contact_form();

        assert!(html.contains(r#"method="post""#));
    }
}
