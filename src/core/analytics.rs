//! Tag Manager events
//!
//! Each tracked interaction is a flat record pushed onto `window.dataLayer`.
//! The field names are the ones the Tag Manager container triggers on.

use serde::Serialize;

/// A single `dataLayer` entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub event: &'static str,
    pub event_category: &'static str,
    pub event_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi_value: Option<f64>,
}

impl AnalyticsEvent {
    pub const fn new(
        event: &'static str,
        event_category: &'static str,
        event_label: &'static str,
    ) -> Self {
        Self {
            event,
            event_category,
            event_label,
            roi_value: None,
        }
    }

    pub fn with_roi_value(mut self, value: f64) -> Self {
        self.roi_value = Some(value);
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

pub const HEADER_ROI_FORECAST: AnalyticsEvent =
    AnalyticsEvent::new("cta_click", "engagement", "Header-ROI-Forecast-Click");

pub const HERO_ROI_CALCULATOR: AnalyticsEvent =
    AnalyticsEvent::new("cta_click", "engagement", "Hero-ROI-Calculator-Click");

pub const HERO_STRATEGY_CALL: AnalyticsEvent =
    AnalyticsEvent::new("cta_click", "engagement", "Hero-Strategy-Call-Click");

pub const HERO_LEAD_FORM: AnalyticsEvent =
    AnalyticsEvent::new("form_submit", "lead_generation", "Hero-Lead-Form");

pub const ROI_CALCULATOR_CTA: AnalyticsEvent =
    AnalyticsEvent::new("cta_click", "conversion", "ROI-Calculator-CTA");

pub const STRATEGY_CALL_PAGE_VIEW: AnalyticsEvent = AnalyticsEvent::new(
    "strategy_call_page_view",
    "booking",
    "Strategy-Call-Page-Loaded",
);

pub const CONTACT_FORM_SUBMIT: AnalyticsEvent = AnalyticsEvent::new(
    "contact_form_submit",
    "lead_generation",
    "Contact-Form-Submit",
);

pub const CASE_STUDY_MODAL: AnalyticsEvent =
    AnalyticsEvent::new("modal_open", "engagement", "Case-Study-Modal");

pub const SPRINT_SLOT_RESERVE: AnalyticsEvent =
    AnalyticsEvent::new("cta_click", "urgency", "Sprint-Slot-Reserve");

pub const FINAL_STRATEGY_CALL: AnalyticsEvent =
    AnalyticsEvent::new("cta_click", "engagement", "Final-Strategy-Call-Click");

/// Fired once an estimate is shown, carrying total annual savings
pub fn roi_calculation(total_annual_savings: f64) -> AnalyticsEvent {
    AnalyticsEvent::new("roi_calculation", "engagement", "ROI-Calculator-Complete")
        .with_roi_value(total_annual_savings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_flat() {
        let json: serde_json::Value = serde_json::from_str(&HERO_LEAD_FORM.to_json()).unwrap();

        assert_eq!(json["event"], "form_submit");
        assert_eq!(json["event_category"], "lead_generation");
        assert_eq!(json["event_label"], "Hero-Lead-Form");
        assert!(json.get("roi_value").is_none());
    }

    #[test]
    fn test_roi_calculation_carries_value() {
        let event = roi_calculation(227_682.0);
        let json: serde_json::Value = serde_json::from_str(&event.to_json()).unwrap();

        assert_eq!(json["event"], "roi_calculation");
        assert_eq!(json["event_label"], "ROI-Calculator-Complete");
        assert_eq!(json["roi_value"], 227_682.0);
    }

    #[test]
    fn test_labels_are_unique() {
        let events = [
            HEADER_ROI_FORECAST,
            HERO_ROI_CALCULATOR,
            HERO_STRATEGY_CALL,
            HERO_LEAD_FORM,
            ROI_CALCULATOR_CTA,
            STRATEGY_CALL_PAGE_VIEW,
            CONTACT_FORM_SUBMIT,
            CASE_STUDY_MODAL,
            SPRINT_SLOT_RESERVE,
            FINAL_STRATEGY_CALL,
            roi_calculation(0.0),
        ];
        let mut labels: Vec<_> = events.iter().map(|e| e.event_label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), events.len());
    }
}
