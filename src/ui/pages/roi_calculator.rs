//! ROI calculator page

use leptos::prelude::*;

use crate::core::catalog::{INDUSTRIES, REVENUE_RANGES, select_options};
use crate::core::roi::{estimate, format_currency, format_roi};
use crate::core::{Page, RoiEstimate, RoiForm, RoiInputs, analytics};
use crate::ui::analytics::track;
use crate::ui::common::{BackButton, Button, ButtonSize, FormField, SelectField, bind};
use crate::ui::icon::{Icon, icons};
use crate::ui::navigation::use_nav_context;

#[component]
pub fn RoiCalculatorPage() -> impl IntoView {
    let nav = use_nav_context();
    let form = RwSignal::new(RoiForm::default());
    let result = RwSignal::new(None::<RoiEstimate>);

    let employees = bind(form, |f| &f.employees, |f| &mut f.employees);
    let hourly_rate = bind(form, |f| &f.hourly_rate, |f| &mut f.hourly_rate);
    let weekly_hours = bind(form, |f| &f.weekly_hours, |f| &mut f.weekly_hours);
    let error_rate = bind(form, |f| &f.error_rate, |f| &mut f.error_rate);
    let industry = bind(form, |f| &f.industry, |f| &mut f.industry);
    let revenue = bind(form, |f| &f.annual_revenue, |f| &mut f.annual_revenue);

    let calculate = Callback::new(move |_| {
        let outcome = form.with(|f| estimate(&RoiInputs::from_raw(f)));
        track(analytics::roi_calculation(outcome.total_annual_savings));
        result.set(Some(outcome));
    });

    view! {
        <div class="min-h-screen bg-canvas-navy pt-20">
            <div class="max-w-4xl mx-auto px-6 py-12 animate-fade-in">
                <div class="flex items-center mb-8">
                    <BackButton on_click=Callback::new(move |_| nav.go_home())/>
                </div>

                <div class="text-center mb-12">
                    <div class="flex items-center justify-center gap-3 mb-4">
                        <Icon name=icons::CALCULATOR class="w-8 h-8 text-amber-cta"/>
                        <h1 class="text-primary-text font-bold text-3xl md:text-4xl">"ROI Calculator"</h1>
                    </div>
                    <p class="text-body-text text-lg">"Calculate your potential savings with AI automation"</p>
                </div>

                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="card p-8">
                        <h3 class="text-primary-text font-bold text-xl mb-6">"Your Current Operations"</h3>
                        <div class="space-y-6">
                            <FormField
                                label="Number of Employees"
                                name="employees"
                                input_type="number"
                                placeholder="e.g., 50"
                                value=employees.value
                                on_input=employees.on_input
                            />
                            <FormField
                                label="Average Hourly Rate ($)"
                                name="avgHourlyRate"
                                input_type="number"
                                placeholder="e.g., 35"
                                value=hourly_rate.value
                                on_input=hourly_rate.on_input
                            />
                            <FormField
                                label="Manual Process Hours per Week"
                                name="manualHoursPerWeek"
                                input_type="number"
                                placeholder="e.g., 120"
                                value=weekly_hours.value
                                on_input=weekly_hours.on_input
                            />
                            <FormField
                                label="Current Error Rate (%)"
                                name="errorRate"
                                input_type="number"
                                placeholder="e.g., 5"
                                value=error_rate.value
                                on_input=error_rate.on_input
                            />
                            <SelectField
                                label="Industry"
                                name="industry"
                                value=industry.value
                                on_change=industry.on_input
                                options=select_options("Select Industry", INDUSTRIES)
                            />
                            <SelectField
                                label="Annual Revenue"
                                name="annualRevenue"
                                value=revenue.value
                                on_change=revenue.on_input
                                options=select_options("Select Revenue Range", REVENUE_RANGES)
                            />
                            <Button size=ButtonSize::Large class="w-full".to_string() on_click=calculate>
                                "Calculate My ROI"
                            </Button>
                        </div>
                    </div>

                    <div class="card p-8">
                        <h3 class="text-primary-text font-bold text-xl mb-6">"Your Potential Savings"</h3>
                        {move || match result.get() {
                            Some(estimate) => view! {
                                <EstimatePanel
                                    estimate=estimate
                                    on_report=Callback::new(move |_| {
                                        track(analytics::ROI_CALCULATOR_CTA);
                                        nav.navigate(Page::Contact);
                                    })
                                />
                            }
                            .into_any(),
                            None => view! {
                                <div class="text-center py-12">
                                    <Icon name=icons::CALCULATOR class="w-16 h-16 text-body-text mx-auto mb-4 opacity-50"/>
                                    <p class="text-body-text text-lg">"Fill out the form to see your potential savings"</p>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn EstimatePanel(estimate: RoiEstimate, on_report: Callback<()>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="grid grid-cols-2 gap-4">
                <div class="bg-canvas-navy rounded-lg p-4 text-center">
                    <Icon name=icons::CLOCK class="w-6 h-6 text-amber-cta mx-auto mb-2"/>
                    <div class="text-primary-text font-bold text-2xl">
                        {format_currency(estimate.weekly_savings)}
                    </div>
                    <div class="text-body-text text-sm">"Weekly Savings"</div>
                </div>
                <div class="bg-canvas-navy rounded-lg p-4 text-center">
                    <Icon name=icons::DOLLAR class="w-6 h-6 text-success-green mx-auto mb-2"/>
                    <div class="text-primary-text font-bold text-2xl">
                        {format_currency(estimate.annual_time_savings)}
                    </div>
                    <div class="text-body-text text-sm">"Annual Time Savings"</div>
                </div>
            </div>

            <div class="bg-canvas-navy rounded-lg p-6 text-center">
                <Icon name=icons::TRENDING_UP class="w-8 h-8 text-cyan-interactive mx-auto mb-3"/>
                <div class="text-primary-text font-bold text-3xl mb-2">
                    {format_currency(estimate.total_annual_savings)}
                </div>
                <div class="text-body-text text-lg mb-4">"Total Annual Savings"</div>
                <div class="text-amber-cta font-bold text-xl">{format_roi(estimate.roi_percent)}</div>
            </div>

            <div class="rounded-lg p-4 border border-amber-cta">
                <p class="text-primary-text text-center">
                    <strong>"Error Cost Savings: "</strong>
                    {format_currency(estimate.error_cost_savings)}
                    " annually"
                </p>
            </div>

            <Button size=ButtonSize::Large class="w-full".to_string() on_click=on_report>
                "Get My Custom ROI Report"
            </Button>
        </div>
    }
}
