//! Static option tables shared by the site's forms

/// Industries offered by the hero form and the ROI calculator
pub const INDUSTRIES: &[&str] = &[
    "Manufacturing",
    "Healthcare",
    "Financial Services",
    "Retail/E-commerce",
    "Technology",
    "Professional Services",
    "Other",
];

/// Longer industry list used by the full contact form
pub const CONTACT_INDUSTRIES: &[&str] = &[
    "Manufacturing",
    "Healthcare",
    "Financial Services",
    "Retail/E-commerce",
    "Technology",
    "Professional Services",
    "Construction",
    "Transportation & Logistics",
    "Other",
];

/// Annual revenue brackets for the hero form and the ROI calculator
pub const REVENUE_RANGES: &[&str] = &[
    "$1M - $5M",
    "$5M - $25M",
    "$25M - $100M",
    "$100M - $500M",
    "$500M+",
];

/// Annual revenue brackets for the contact form (adds the smallest bracket)
pub const CONTACT_REVENUE_RANGES: &[&str] = &[
    "Under $1M",
    "$1M - $5M",
    "$5M - $25M",
    "$25M - $100M",
    "$100M - $500M",
    "$500M+",
];

pub const EMPLOYEE_RANGES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

pub const TIMELINES: &[&str] = &[
    "Immediate (within 30 days)",
    "Short-term (1-3 months)",
    "Medium-term (3-6 months)",
    "Long-term (6+ months)",
    "Just exploring options",
];

/// Build `(value, label)` pairs for a select, led by an empty placeholder option
pub fn select_options(placeholder: &str, values: &[&str]) -> Vec<(String, String)> {
    std::iter::once((String::new(), placeholder.to_string()))
        .chain(values.iter().map(|v| (v.to_string(), v.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_sizes() {
        assert_eq!(INDUSTRIES.len(), 7);
        assert_eq!(CONTACT_INDUSTRIES.len(), 9);
        assert_eq!(REVENUE_RANGES.len(), 5);
        assert_eq!(CONTACT_REVENUE_RANGES.len(), 6);
        assert_eq!(EMPLOYEE_RANGES.len(), 6);
        assert_eq!(TIMELINES.len(), 5);
    }

    #[test]
    fn test_contact_tables_extend_short_tables() {
        for industry in INDUSTRIES {
            assert!(CONTACT_INDUSTRIES.contains(industry));
        }
        for range in REVENUE_RANGES {
            assert!(CONTACT_REVENUE_RANGES.contains(range));
        }
    }

    #[test]
    fn test_select_options_has_empty_placeholder() {
        let options = select_options("Select Industry", INDUSTRIES);

        assert_eq!(options.len(), INDUSTRIES.len() + 1);
        assert_eq!(options[0], (String::new(), "Select Industry".to_string()));
        assert_eq!(
            options[1],
            ("Manufacturing".to_string(), "Manufacturing".to_string())
        );
    }
}
