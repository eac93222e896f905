//! Application pages module
//!
//! The landing page is the only route; the other pages are full-page views
//! it swaps in. Unknown paths get the 404 page.

mod contact;
mod landing;
mod not_found;
mod roi_calculator;
mod strategy_call;

pub use contact::ContactPage;
pub use landing::LandingPage;
pub use not_found::NotFoundPage;
pub use roi_calculator::RoiCalculatorPage;
pub use strategy_call::StrategyCallPage;
