//! Lead capture records and required-field validation
//!
//! The hero form and the contact form collect flat records. A record is only
//! handed on (to the booking view or the thank-you view) once every required
//! field is non-empty, mirroring the browser's own `required` checks.

use derive_more::Display;
use serde::Serialize;
use thiserror::Error;

/// Every field a visitor can fill in, named as the form labels them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display("Full Name")]
    Name,
    #[display("First Name")]
    FirstName,
    #[display("Last Name")]
    LastName,
    #[display("Business Email")]
    Email,
    #[display("Phone Number")]
    Phone,
    #[display("Company Name")]
    Company,
    #[display("Industry")]
    Industry,
    #[display("Annual Revenue")]
    AnnualRevenue,
    #[display("Number of Employees")]
    Employees,
    #[display("Implementation Timeline")]
    Timeline,
    #[display("Current Operational Challenges")]
    Challenges,
    #[display("Automation Goals")]
    Goals,
}

/// Field validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("{0} must be a valid email address")]
    InvalidEmail(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) | FieldError::InvalidEmail(field) => *field,
        }
    }
}

/// Outcome of validating a form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValidation {
    pub errors: Vec<FieldError>,
}

impl FormValidation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Record a `Required` error when `value` is blank
    pub fn require(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.add_error(FieldError::Required(field));
        }
    }

    /// Require `value` and check it looks like an email address
    pub fn require_email(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.add_error(FieldError::Required(field));
        } else if !is_email(value) {
            self.add_error(FieldError::InvalidEmail(field));
        }
    }

    /// First error message recorded for `field`
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.errors
            .iter()
            .find(|e| e.field() == field)
            .map(|e| e.to_string())
    }

    /// Convert to Result, returning first error if any
    pub fn to_result(&self) -> Result<(), FieldError> {
        match self.errors.first() {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

/// Same shape the browser accepts for `type="email"`: one `@`, non-empty
/// local part, dotted or bare domain, no whitespace.
pub fn is_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

/// Values forwarded to the booking widget. Blank values are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PrefillData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub annual_revenue: Option<String>,
}

impl PrefillData {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.industry.is_none()
            && self.annual_revenue.is_none()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Short lead form shown beside the hero headline
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeadForm {
    pub name: String,
    pub company: String,
    pub industry: String,
    pub annual_revenue: String,
    pub phone: String,
    pub email: String,
}

impl LeadForm {
    pub fn validate(&self) -> FormValidation {
        let mut result = FormValidation::new();
        result.require(Field::Name, &self.name);
        result.require(Field::Company, &self.company);
        result.require(Field::Industry, &self.industry);
        result.require(Field::AnnualRevenue, &self.annual_revenue);
        result.require(Field::Phone, &self.phone);
        result.require_email(Field::Email, &self.email);
        result
    }

    pub fn to_prefill(&self) -> PrefillData {
        PrefillData {
            name: non_blank(&self.name),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            company: non_blank(&self.company),
            industry: non_blank(&self.industry),
            annual_revenue: non_blank(&self.annual_revenue),
        }
    }
}

/// Full assessment request from the contact page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub industry: String,
    pub annual_revenue: String,
    pub employees: String,
    pub timeline: String,
    pub challenges: String,
    /// Optional free text
    pub goals: String,
}

impl ContactRequest {
    pub fn validate(&self) -> FormValidation {
        let mut result = FormValidation::new();
        result.require(Field::FirstName, &self.first_name);
        result.require(Field::LastName, &self.last_name);
        result.require_email(Field::Email, &self.email);
        result.require(Field::Phone, &self.phone);
        result.require(Field::Company, &self.company);
        result.require(Field::Industry, &self.industry);
        result.require(Field::AnnualRevenue, &self.annual_revenue);
        result.require(Field::Employees, &self.employees);
        result.require(Field::Timeline, &self.timeline);
        result.require(Field::Challenges, &self.challenges);
        result
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub fn to_prefill(&self) -> PrefillData {
        PrefillData {
            name: non_blank(&self.full_name()),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            company: non_blank(&self.company),
            industry: non_blank(&self.industry),
            annual_revenue: non_blank(&self.annual_revenue),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_lead() -> LeadForm {
        LeadForm {
            name: "Jordan Lee".to_string(),
            company: "Acme Tooling".to_string(),
            industry: "Manufacturing".to_string(),
            annual_revenue: "$5M - $25M".to_string(),
            phone: "+1 555 0100".to_string(),
            email: "jordan@acme.test".to_string(),
        }
    }

    fn complete_contact() -> ContactRequest {
        ContactRequest {
            first_name: "Jordan".to_string(),
            last_name: "Lee".to_string(),
            email: "jordan@acme.test".to_string(),
            phone: "+1 555 0100".to_string(),
            company: "Acme Tooling".to_string(),
            industry: "Construction".to_string(),
            annual_revenue: "Under $1M".to_string(),
            employees: "11-50".to_string(),
            timeline: "Short-term (1-3 months)".to_string(),
            challenges: "Manual invoice matching".to_string(),
            goals: String::new(),
        }
    }

    #[test]
    fn test_complete_lead_is_valid() {
        assert!(complete_lead().validate().is_valid());
    }

    #[test]
    fn test_empty_lead_reports_every_required_field() {
        let result = LeadForm::default().validate();

        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 6);
        assert_eq!(result.to_result(), Err(FieldError::Required(Field::Name)));
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let lead = LeadForm {
            company: "   ".to_string(),
            ..complete_lead()
        };
        let result = lead.validate();

        assert_eq!(result.errors, vec![FieldError::Required(Field::Company)]);
        assert_eq!(
            result.message_for(Field::Company),
            Some("Company Name is required".to_string())
        );
        assert!(result.message_for(Field::Email).is_none());
    }

    #[test]
    fn test_invalid_email() {
        let lead = LeadForm {
            email: "jordan.acme.test".to_string(),
            ..complete_lead()
        };
        assert_eq!(
            lead.validate().to_result(),
            Err(FieldError::InvalidEmail(Field::Email))
        );
    }

    #[test]
    fn test_is_email() {
        assert!(is_email("a@b"));
        assert!(is_email("first.last@example.co.uk"));
        assert!(is_email("  padded@example.com "));
        assert!(!is_email(""));
        assert!(!is_email("@example.com"));
        assert!(!is_email("user@"));
        assert!(!is_email("user@@example.com"));
        assert!(!is_email("user name@example.com"));
        assert!(!is_email("user@.example.com"));
    }

    #[test]
    fn test_lead_prefill_trims_and_drops_blanks() {
        let lead = LeadForm {
            name: "  Jordan Lee ".to_string(),
            phone: String::new(),
            ..complete_lead()
        };
        let prefill = lead.to_prefill();

        assert_eq!(prefill.name.as_deref(), Some("Jordan Lee"));
        assert_eq!(prefill.phone, None);
        assert_eq!(prefill.company.as_deref(), Some("Acme Tooling"));
        assert!(!prefill.is_empty());
        assert!(LeadForm::default().to_prefill().is_empty());
    }

    #[test]
    fn test_contact_goals_are_optional() {
        let request = complete_contact();
        assert!(request.goals.is_empty());
        assert!(request.validate().is_valid());
    }

    #[test]
    fn test_contact_requires_challenges_and_timeline() {
        let request = ContactRequest {
            challenges: String::new(),
            timeline: String::new(),
            ..complete_contact()
        };
        let result = request.validate();

        assert_eq!(
            result.errors,
            vec![
                FieldError::Required(Field::Timeline),
                FieldError::Required(Field::Challenges),
            ]
        );
    }

    #[test]
    fn test_contact_prefill_joins_name() {
        let prefill = complete_contact().to_prefill();
        assert_eq!(prefill.name.as_deref(), Some("Jordan Lee"));
        assert_eq!(prefill.annual_revenue.as_deref(), Some("Under $1M"));

        let first_only = ContactRequest {
            last_name: String::new(),
            ..complete_contact()
        };
        assert_eq!(first_only.full_name(), "Jordan");
    }
}
