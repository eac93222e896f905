//! Navigation context for swapping between the landing page and its
//! full-page views
//!
//! Provides:
//! - NavContext wrapping the current page and forwarded prefill data
//! - Scroll-to-top on every page swap

use leptos::prelude::*;

use crate::core::{Navigation, Page, PrefillData};
use crate::ui::dom::scroll_to_top;

/// Navigation context shared by every section and page
#[derive(Clone, Copy)]
pub struct NavContext {
    pub state: RwSignal<Navigation>,
}

impl NavContext {
    /// Current page (tracked)
    pub fn page(&self) -> Page {
        self.state.with(|nav| nav.page())
    }

    /// Prefill forwarded to the booking page (tracked)
    pub fn prefill(&self) -> Option<PrefillData> {
        self.state.with(|nav| nav.prefill().cloned())
    }

    pub fn navigate(&self, page: Page) {
        self.state.update(|nav| nav.navigate(page));
        scroll_to_top();
    }

    pub fn book_call(&self, prefill: PrefillData) {
        self.state.update(|nav| nav.book_call(prefill));
        scroll_to_top();
    }

    pub fn go_home(&self) {
        self.navigate(Page::Home);
    }
}

/// Create the navigation context and provide it to descendants
pub fn provide_nav_context() -> NavContext {
    let ctx = NavContext {
        state: RwSignal::new(Navigation::new()),
    };
    provide_context(ctx);
    ctx
}

/// Get the navigation context
pub fn use_nav_context() -> NavContext {
    use_context::<NavContext>().expect("NavContext should be provided")
}
