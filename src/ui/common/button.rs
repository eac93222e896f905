use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonVariant {
    /// Amber call to action
    Amber,
    /// Transparent with a cyan outline
    Outline,
    /// Purple gradient
    Gradient,
}

/// Button size options
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
    Hero,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Amber => "btn-amber",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Gradient => "btn-gradient",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
            ButtonSize::Hero => "btn-hero",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    ["btn-base", variant.class(), size.class(), extra]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Type-safe button component with variants and sizes
#[component]
pub fn Button(
    /// Button variant style
    #[prop(default = ButtonVariant::Amber)]
    variant: ButtonVariant,
    /// Button size
    #[prop(default = ButtonSize::Medium)]
    size: ButtonSize,
    /// Click handler; omit for submit buttons handled by the form
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// `type` attribute
    #[prop(default = "button")]
    button_type: &'static str,
    /// Button content (text or elements)
    children: Children,
    /// Optional icon name to show before text
    #[prop(optional)]
    icon: Option<&'static str>,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_classes(variant, size, &class)
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(())
                }
            }
        >
            {icon.map(|name| view! { <Icon name=name class="w-5 h-5 shrink-0"/> })}
            {children()}
        </button>
    }
}

/// "Back to Home" link shown at the top of every full-page view
#[component]
pub fn BackButton(on_click: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="inline-flex items-center gap-2 text-cyan-interactive hover:text-amber-cta transition-colors mb-8"
            on:click=move |_| on_click.run(())
        >
            <Icon name=icons::ARROW_LEFT class="w-5 h-5"/>
            <span>"Back to Home"</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes_skip_empty_parts() {
        assert_eq!(
            button_classes(ButtonVariant::Amber, ButtonSize::Medium, ""),
            "btn-base btn-amber"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Hero, "w-full"),
            "btn-base btn-outline btn-hero w-full"
        );
    }
}
