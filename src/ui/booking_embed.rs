//! Inline Cal.com scheduler

use leptos::prelude::*;

use crate::core::PrefillData;
use crate::core::booking::BookingSettings;

#[cfg(not(feature = "ssr"))]
use crate::core::booking::{BOOKING_LINK_META, BookingError, SCRIPT_ELEMENT_ID};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Placeholder the booking widget mounts into. The loader script is injected
/// once the placeholder exists and removed again when the view goes away.
#[component]
pub fn CalEmbed(
    /// Visitor details to open the booking form with
    prefill: Option<PrefillData>,
) -> impl IntoView {
    let settings = BookingSettings::default();
    let element_id = settings.element_id.clone();

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let settings = with_link_override(settings.clone());
            if let Err(err) = inject_script(&settings, prefill.as_ref()) {
                leptos::logging::warn!("{}", err);
            }
        });
        on_cleanup(remove_script);
    }
    #[cfg(feature = "ssr")]
    let _ = (settings, prefill);

    view! {
        <div
            id=element_id
            class="w-full h-full overflow-auto"
            style="min-height: 600px;"
        ></div>
    }
}

/// Apply the server-provided booking link, keeping the default when it is malformed
#[cfg(not(feature = "ssr"))]
fn with_link_override(settings: BookingSettings) -> BookingSettings {
    let Some(link) = crate::ui::dom::meta_content(BOOKING_LINK_META) else {
        return settings;
    };
    match settings.clone().with_link(&link) {
        Ok(settings) => settings,
        Err(err) => {
            leptos::logging::warn!("ignoring booking link override: {}", err);
            settings
        }
    }
}

#[cfg(not(feature = "ssr"))]
fn inject_script(
    settings: &BookingSettings,
    prefill: Option<&PrefillData>,
) -> Result<(), BookingError> {
    let source = settings.init_script(prefill)?;
    let inject = |err: leptos::wasm_bindgen::JsValue| BookingError::Inject(format!("{:?}", err));

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BookingError::Inject("no document".to_string()))?;
    let head = document
        .head()
        .ok_or_else(|| BookingError::Inject("no <head>".to_string()))?;

    remove_script();

    let script = document.create_element("script").map_err(inject)?;
    script.set_id(SCRIPT_ELEMENT_ID);
    script.set_attribute("type", "text/javascript").map_err(inject)?;
    script.set_text_content(Some(&source));
    head.append_child(&script).map_err(inject)?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn remove_script() {
    if let Some(script) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(SCRIPT_ELEMENT_ID))
    {
        script.remove();
    }
}
