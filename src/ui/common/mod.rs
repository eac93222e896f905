//! Common reusable UI components shared by the landing sections and the
//! full-page views.

pub mod button;
pub mod form;
pub mod modal;

pub use button::{BackButton, Button, ButtonSize, ButtonVariant};
pub use form::{Binding, FormField, SelectField, TextAreaField, bind, field_error};
pub use modal::BaseModal;
