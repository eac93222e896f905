#[cfg(test)]
mod tests {
    use crate::core::analytics;
    use crate::core::booking::{BookingConfig, BookingSettings};
    use crate::core::roi::{self, RoiForm, RoiInputs};
    use crate::core::{ContactRequest, LeadForm, Navigation, Page};

    fn hero_lead() -> LeadForm {
        LeadForm {
            name: "Jordan Lee".to_string(),
            company: "Acme Tooling".to_string(),
            industry: "Manufacturing".to_string(),
            annual_revenue: "$25M - $100M".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "jordan@acme.test".to_string(),
        }
    }

    #[test]
    fn test_hero_lead_flows_into_booking_widget() {
        let lead = hero_lead();
        assert!(lead.validate().is_valid());

        let mut nav = Navigation::new();
        nav.book_call(lead.to_prefill());
        assert_eq!(nav.page(), Page::StrategyCall);

        let config = serde_json::to_value(BookingConfig::from_prefill(nav.prefill())).unwrap();
        assert_eq!(config["name"], "Jordan Lee");
        assert_eq!(config["CompanyName"], "Acme Tooling");
        assert_eq!(config["Annual-Revenue"], "$25M - $100M");

        let script = BookingSettings::default().init_script(nav.prefill()).unwrap();
        assert!(script.contains("jordan@acme.test"));
    }

    #[test]
    fn test_invalid_lead_never_reaches_booking() {
        let lead = LeadForm {
            email: String::new(),
            ..hero_lead()
        };
        let mut nav = Navigation::new();

        if lead.validate().is_valid() {
            nav.book_call(lead.to_prefill());
        }
        assert_eq!(nav.page(), Page::Home);
        assert!(nav.prefill().is_none());
    }

    #[test]
    fn test_contact_request_can_book_with_its_details() {
        let request = ContactRequest {
            first_name: "Jordan".to_string(),
            last_name: "Lee".to_string(),
            email: "jordan@acme.test".to_string(),
            phone: "+1 555 0100".to_string(),
            company: "Acme Tooling".to_string(),
            industry: "Technology".to_string(),
            annual_revenue: "$1M - $5M".to_string(),
            employees: "51-200".to_string(),
            timeline: "Just exploring options".to_string(),
            challenges: "Manual reporting".to_string(),
            goals: "Weekly dashboards".to_string(),
        };
        assert!(request.validate().is_valid());

        let mut nav = Navigation::new();
        nav.navigate(Page::Contact);
        nav.book_call(request.to_prefill());

        let prefill = nav.prefill().unwrap();
        assert_eq!(prefill.name.as_deref(), Some("Jordan Lee"));
        assert_eq!(prefill.industry.as_deref(), Some("Technology"));
    }

    #[test]
    fn test_roi_form_to_tracked_event() {
        let form = RoiForm {
            employees: "50".to_string(),
            hourly_rate: "35".to_string(),
            weekly_hours: "120".to_string(),
            error_rate: "5".to_string(),
            industry: "Manufacturing".to_string(),
            annual_revenue: "$5M - $25M".to_string(),
        };
        let estimate = roi::estimate(&RoiInputs::from_raw(&form));
        let event = analytics::roi_calculation(estimate.total_annual_savings);

        assert_eq!(roi::format_currency(estimate.total_annual_savings), "$227,682");
        assert_eq!(roi::format_roi(estimate.roi_percent), "355% ROI");
        assert_eq!(event.roi_value, Some(estimate.total_annual_savings));
    }
}
