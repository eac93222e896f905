//! Landing page sections, in page order

mod case_study;
mod faq;
mod final_cta;
mod footer;
mod guarantee;
mod header;
mod hero;
mod pain;
mod roadmap;
mod solution;
mod testimonials;
mod urgency;
mod usp;

pub use case_study::CaseStudy;
pub use faq::Faq;
pub use final_cta::FinalCta;
pub use footer::Footer;
pub use guarantee::Guarantee;
pub use header::Header;
pub use hero::Hero;
pub use pain::Pain;
pub use roadmap::Roadmap;
pub use solution::{SolutionBridge, SolutionStatement};
pub use testimonials::Testimonials;
pub use urgency::Urgency;
pub use usp::Usp;
