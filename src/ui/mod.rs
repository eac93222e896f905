pub mod analytics;
pub mod booking_embed;
pub mod common;
pub mod dom;
pub mod icon;
pub mod navigation;
pub mod pages;
pub mod particles;
pub mod sections;
pub mod timers;

