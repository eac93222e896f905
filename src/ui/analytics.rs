//! Pushes tracked interactions onto the Tag Manager `dataLayer`

use crate::core::analytics::AnalyticsEvent;

#[cfg(not(feature = "ssr"))]
use leptos::wasm_bindgen::{JsCast, JsValue};

/// Record `event`. Skipped silently when no `dataLayer` exists on the page.
pub fn track(event: AnalyticsEvent) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Err(err) = push_data_layer(&event) {
            leptos::logging::warn!("analytics push failed for {}: {:?}", event.event_label, err);
        }
    }
    #[cfg(feature = "ssr")]
    {
        tracing::debug!(event = %event.to_json(), "analytics event outside the browser");
    }
}

#[cfg(not(feature = "ssr"))]
fn push_data_layer(event: &AnalyticsEvent) -> Result<(), JsValue> {
    use serde::Serialize;

    let Some(window) = leptos::web_sys::window() else {
        return Ok(());
    };
    let layer = js_sys::Reflect::get(&window, &JsValue::from_str("dataLayer"))?;
    let Some(layer) = layer.dyn_ref::<js_sys::Array>() else {
        return Ok(());
    };

    // Plain object rather than a JS Map so Tag Manager can read the fields
    let value = event.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
    layer.push(&value);
    Ok(())
}
