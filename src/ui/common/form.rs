use crate::core::{Field, FormValidation};
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Label with an optional required marker
#[component]
fn FieldLabel(label: Option<String>, required: bool) -> impl IntoView {
    label.map(|label| {
        view! {
            <label class="label">
                {label}
                {required.then(|| view! { <span class="text-amber-cta ml-0.5">"*"</span> })}
            </label>
        }
    })
}

/// Error line under a field
#[component]
fn FieldErrorLine(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <div class="flex items-center gap-1 text-sm text-warning-red mt-1" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="w-4 h-4"/>
                    <span>{err}</span>
                </div>
            }
        })
    }
}

fn has_error(error: Option<Signal<Option<String>>>) -> bool {
    error.and_then(|e| e.get()).is_some()
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text; the hero form omits it and relies on the placeholder
    #[prop(optional, into)]
    label: Option<String>,
    /// `name` attribute
    name: &'static str,
    /// Whether field is required
    #[prop(default = false)]
    required: bool,
    /// Input type (text, email, tel, number)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required/>
            <input
                type=input_type
                name=name
                class="input-base"
                class:border-warning-red=move || has_error(error)
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    /// Field label text
    #[prop(into)]
    label: String,
    /// `name` attribute
    name: &'static str,
    /// Whether field is required
    #[prop(default = false)]
    required: bool,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 4)]
    rows: u32,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=Some(label) required=required/>
            <textarea
                name=name
                class="input-base resize-none"
                class:border-warning-red=move || has_error(error)
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    /// Field label text
    #[prop(optional, into)]
    label: Option<String>,
    /// `name` attribute
    name: &'static str,
    /// Whether field is required
    #[prop(default = false)]
    required: bool,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs; an empty value is the placeholder
    options: Vec<(String, String)>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <FieldLabel label=label required=required/>
            <select
                name=name
                class="input-base"
                class:border-warning-red=move || has_error(error)
                required=required
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, text)| {
                        let current = option_value.clone();
                        view! {
                            <option
                                value=option_value
                                selected=move || value.with(|v| *v == current)
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldErrorLine error=error/>
        </div>
    }
}

/// Two-way binding between an input and one `String` field of a form record
#[derive(Clone, Copy)]
pub struct Binding {
    pub value: Signal<String>,
    pub on_input: Callback<String>,
}

/// Bind the field selected by `get`/`get_mut` on the record held in `form`
pub fn bind<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> &String,
    get_mut: fn(&mut T) -> &mut String,
) -> Binding {
    Binding {
        value: Signal::derive(move || form.with(|f| get(f).clone())),
        on_input: Callback::new(move |value: String| form.update(|f| *get_mut(f) = value)),
    }
}

/// Validation message for `field`, if it failed the last submit
pub fn field_error(errors: RwSignal<FormValidation>, field: Field) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.message_for(field)))
}
