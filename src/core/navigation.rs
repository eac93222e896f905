//! In-page navigation between the landing page and its full-page views

use derive_more::Display;

use super::leads::PrefillData;

/// Which full-page view is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Page {
    #[default]
    #[display("home")]
    Home,
    #[display("roi-calculator")]
    RoiCalculator,
    #[display("strategy-call")]
    StrategyCall,
    #[display("contact")]
    Contact,
}

impl Page {
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "BuddyBots.ai - Cut Costs by 30% in 90 Days with AI",
            Page::RoiCalculator => "ROI Calculator - BuddyBots.ai",
            Page::StrategyCall => "Book Your Strategy Call - BuddyBots.ai",
            Page::Contact => "Get Your Free ROI Assessment - BuddyBots.ai",
        }
    }
}

/// Current page plus any record forwarded to it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Navigation {
    page: Page,
    prefill: Option<PrefillData>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Prefill destined for the booking widget. Only ever set while the
    /// strategy call page is showing.
    pub fn prefill(&self) -> Option<&PrefillData> {
        self.prefill.as_ref()
    }

    /// Swap to `page`, dropping any forwarded record
    pub fn navigate(&mut self, page: Page) {
        self.page = page;
        self.prefill = None;
    }

    /// Swap to the booking page carrying `prefill`. An empty record is
    /// treated as no record.
    pub fn book_call(&mut self, prefill: PrefillData) {
        self.page = Page::StrategyCall;
        self.prefill = (!prefill.is_empty()).then_some(prefill);
    }

    pub fn go_home(&mut self) {
        self.navigate(Page::Home);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefill() -> PrefillData {
        PrefillData {
            name: Some("Jordan Lee".to_string()),
            email: Some("jordan@acme.test".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_home() {
        let nav = Navigation::new();
        assert_eq!(nav.page(), Page::Home);
        assert!(nav.prefill().is_none());
    }

    #[test]
    fn test_navigate_swaps_page() {
        let mut nav = Navigation::new();

        nav.navigate(Page::RoiCalculator);
        assert_eq!(nav.page(), Page::RoiCalculator);

        nav.navigate(Page::Contact);
        assert_eq!(nav.page(), Page::Contact);

        nav.go_home();
        assert_eq!(nav.page(), Page::Home);
    }

    #[test]
    fn test_book_call_carries_prefill() {
        let mut nav = Navigation::new();
        nav.book_call(prefill());

        assert_eq!(nav.page(), Page::StrategyCall);
        assert_eq!(nav.prefill(), Some(&prefill()));
    }

    #[test]
    fn test_empty_prefill_is_dropped() {
        let mut nav = Navigation::new();
        nav.book_call(PrefillData::default());

        assert_eq!(nav.page(), Page::StrategyCall);
        assert!(nav.prefill().is_none());
    }

    #[test]
    fn test_leaving_booking_clears_prefill() {
        let mut nav = Navigation::new();
        nav.book_call(prefill());
        nav.go_home();
        assert!(nav.prefill().is_none());

        // Plain navigation to the booking page never inherits old data
        nav.book_call(prefill());
        nav.navigate(Page::StrategyCall);
        assert_eq!(nav.page(), Page::StrategyCall);
        assert!(nav.prefill().is_none());
    }

    #[test]
    fn test_page_display() {
        assert_eq!(Page::Home.to_string(), "home");
        assert_eq!(Page::RoiCalculator.to_string(), "roi-calculator");
        assert_eq!(Page::StrategyCall.to_string(), "strategy-call");
        assert_eq!(Page::Contact.to_string(), "contact");
    }
}
