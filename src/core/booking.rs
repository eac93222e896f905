//! Cal.com inline booking embed
//!
//! The booking page injects a script that loads the Cal.com embed, then
//! mounts the inline scheduler into a placeholder element. Visitor details
//! collected earlier are passed through the embed's `config` object so the
//! booking form opens prefilled.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use super::leads::PrefillData;

/// Official Cal.com embed loader. Defines `window.Cal` and queues calls until
/// `embed.js` has loaded.
const CAL_LOADER: &str = r#"(function (C, A, L) {
  let p = function (a, ar) { a.q.push(ar); };
  let d = C.document;
  C.Cal = C.Cal || function () {
    let cal = C.Cal;
    let ar = arguments;
    if (!cal.loaded) {
      cal.ns = {};
      cal.q = cal.q || [];
      d.head.appendChild(d.createElement("script")).src = A;
      cal.loaded = true;
    }
    if (ar[0] === L) {
      const api = function () { p(api, arguments); };
      const namespace = ar[1];
      api.q = api.q || [];
      if (typeof namespace === "string") {
        cal.ns[namespace] = cal.ns[namespace] || api;
        p(cal.ns[namespace], ar);
        p(cal, ["initNamespace", namespace]);
      } else p(cal, ar);
      return;
    }
    p(cal, ar);
  };
})(window, "https://app.cal.com/embed/embed.js", "init");"#;

/// `id` given to the injected `<script>` so it can be removed on teardown
pub const SCRIPT_ELEMENT_ID: &str = "cal-embed-init";

/// Name of the `<meta>` tag the server uses to override the booking link
pub const BOOKING_LINK_META: &str = "booking-link";

pub const DEFAULT_CAL_LINK: &str = "buddybotsai/30min";

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("failed to serialize embed options: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("booking link must be `<user>/<event>`, got `{0}`")]
    InvalidLink(String),
    #[error("failed to inject embed script: {0}")]
    Inject(String),
}

/// Where and how the scheduler is mounted
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSettings {
    pub namespace: String,
    pub cal_link: String,
    pub origin: String,
    /// `id` of the placeholder element, without `#`
    pub element_id: String,
    pub brand_color: String,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            namespace: "30min".to_string(),
            cal_link: DEFAULT_CAL_LINK.to_string(),
            origin: "https://app.cal.com".to_string(),
            element_id: "my-cal-inline-30min".to_string(),
            brand_color: "#9c5de9".to_string(),
        }
    }
}

impl BookingSettings {
    /// Use `link` instead of the default event link when it is well formed
    pub fn with_link(mut self, link: &str) -> Result<Self, BookingError> {
        let link = link.trim().trim_matches('/');
        let valid = match link.split_once('/') {
            Some((user, event)) => !user.is_empty() && !event.is_empty() && !event.contains('/'),
            None => false,
        };
        if !valid {
            return Err(BookingError::InvalidLink(link.to_string()));
        }
        self.cal_link = link.to_string();
        Ok(self)
    }

    /// Render the script that loads the embed and mounts the scheduler
    pub fn init_script(&self, prefill: Option<&PrefillData>) -> Result<String, BookingError> {
        let namespace = serde_json::to_string(&self.namespace)?;
        let init_options = serde_json::to_string(&json!({ "origin": self.origin }))?;
        let inline_options = serde_json::to_string(&json!({
            "elementOrSelector": format!("#{}", self.element_id),
            "config": BookingConfig::from_prefill(prefill),
            "calLink": self.cal_link,
        }))?;
        let ui_options = serde_json::to_string(&json!({
            "cssVarsPerTheme": { "dark": { "cal-brand": self.brand_color } },
            "hideEventTypeDetails": true,
            "layout": "month_view",
        }))?;

        Ok(format!(
            "{CAL_LOADER}\n\
             Cal(\"init\", {namespace}, {init_options});\n\
             Cal.ns[{namespace}](\"inline\", {inline_options});\n\
             Cal.ns[{namespace}](\"ui\", {ui_options});\n"
        ))
    }
}

/// The embed's `config` object. Field names are fixed by the booking form
/// on the Cal.com side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfig {
    pub layout: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "attendeePhoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "CompanyName", skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(rename = "Annual-Revenue", skip_serializing_if = "Option::is_none")]
    pub annual_revenue: Option<String>,
}

impl BookingConfig {
    pub fn from_prefill(prefill: Option<&PrefillData>) -> Self {
        let prefill = prefill.cloned().unwrap_or_default();
        Self {
            layout: "month_view",
            name: prefill.name,
            email: prefill.email,
            phone: prefill.phone,
            company: prefill.company,
            industry: prefill.industry,
            annual_revenue: prefill.annual_revenue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefill() -> PrefillData {
        PrefillData {
            name: Some("Jordan Lee".to_string()),
            email: Some("jordan@acme.test".to_string()),
            phone: Some("+1 555 0100".to_string()),
            company: Some("Acme Tooling".to_string()),
            industry: Some("Manufacturing".to_string()),
            annual_revenue: Some("$5M - $25M".to_string()),
        }
    }

    #[test]
    fn test_config_without_prefill_only_has_layout() {
        let json = serde_json::to_value(BookingConfig::from_prefill(None)).unwrap();
        assert_eq!(json, json!({ "layout": "month_view" }));
    }

    #[test]
    fn test_config_uses_widget_field_names() {
        let json = serde_json::to_value(BookingConfig::from_prefill(Some(&prefill()))).unwrap();

        assert_eq!(json["name"], "Jordan Lee");
        assert_eq!(json["email"], "jordan@acme.test");
        assert_eq!(json["attendeePhoneNumber"], "+1 555 0100");
        assert_eq!(json["CompanyName"], "Acme Tooling");
        assert_eq!(json["industry"], "Manufacturing");
        assert_eq!(json["Annual-Revenue"], "$5M - $25M");
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn test_partial_prefill_skips_missing_fields() {
        let partial = PrefillData {
            email: Some("jordan@acme.test".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(BookingConfig::from_prefill(Some(&partial))).unwrap();

        assert_eq!(
            json,
            json!({ "layout": "month_view", "email": "jordan@acme.test" })
        );
    }

    #[test]
    fn test_init_script_mounts_inline_embed() {
        let script = BookingSettings::default()
            .init_script(Some(&prefill()))
            .unwrap();

        assert!(script.contains("https://app.cal.com/embed/embed.js"));
        assert!(script.contains(r#"Cal("init", "30min", {"origin":"https://app.cal.com"});"#));
        assert!(script.contains(r#"Cal.ns["30min"]("inline", "#));
        assert!(script.contains(r##""elementOrSelector":"#my-cal-inline-30min""##));
        assert!(script.contains(r#""calLink":"buddybotsai/30min""#));
        assert!(script.contains(r#""CompanyName":"Acme Tooling""#));
        assert!(script.contains(r#""hideEventTypeDetails":true"#));
    }

    #[test]
    fn test_init_script_escapes_visitor_input() {
        let hostile = PrefillData {
            name: Some(r#"x"});alert(1);//"#.to_string()),
            ..Default::default()
        };
        let script = BookingSettings::default()
            .init_script(Some(&hostile))
            .unwrap();

        assert!(script.contains(r#""name":"x\"});alert(1);//""#));
    }

    #[test]
    fn test_with_link() {
        let settings = BookingSettings::default()
            .with_link("/acme/intro-call/")
            .unwrap();
        assert_eq!(settings.cal_link, "acme/intro-call");

        assert!(BookingSettings::default().with_link("no-slash").is_err());
        assert!(BookingSettings::default().with_link("a/b/c").is_err());
        assert!(BookingSettings::default().with_link("/event").is_err());
    }
}
