//! Core domain logic for the landing site: forms, the ROI estimate, in-page
//! navigation and the third-party integrations' data contracts

pub mod analytics;
pub mod booking;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod countdown;
pub mod leads;
pub mod navigation;
pub mod particles;
pub mod roi;
#[cfg(test)]
mod tests;

pub use leads::{ContactRequest, Field, FieldError, FormValidation, LeadForm, PrefillData};
pub use navigation::{Navigation, Page};
pub use roi::{RoiEstimate, RoiForm, RoiInputs};
