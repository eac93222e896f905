//! ROI estimator
//!
//! Closed-form savings estimate used by the ROI calculator page. Every input
//! arrives as raw form text; anything that does not parse is treated as zero.

use serde::Serialize;

/// Working weeks per year
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Share of error-related cost recovered by automation
pub const ERROR_COST_FRACTION: f64 = 0.85;

/// Assumed cost of an implementation project, in dollars
pub const PROJECT_COST: f64 = 50_000.0;

/// Largest accepted hourly rate or weekly hour count. Keeps every product in
/// the estimate finite.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

/// Bounds for the reported ROI percentage
pub const ROI_PERCENT_MIN: f64 = -999.0;
pub const ROI_PERCENT_MAX: f64 = 999.0;

/// Raw text of the estimator form, exactly as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoiForm {
    pub employees: String,
    pub hourly_rate: String,
    pub weekly_hours: String,
    pub error_rate: String,
    pub industry: String,
    pub annual_revenue: String,
}

/// Normalised estimator inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoiInputs {
    pub employees: u32,
    pub hourly_rate: f64,
    pub weekly_hours: f64,
    /// Percentage in `[0, 100]`
    pub error_rate: f64,
    pub industry: String,
    pub annual_revenue: String,
}

impl RoiInputs {
    /// Parse the raw form. Missing or malformed numbers become zero, amounts
    /// are bounded to `[0, MAX_AMOUNT]` and the error rate is clamped to
    /// `[0, 100]`.
    pub fn from_raw(form: &RoiForm) -> Self {
        Self {
            employees: parse_count(&form.employees),
            hourly_rate: parse_amount(&form.hourly_rate),
            weekly_hours: parse_amount(&form.weekly_hours),
            error_rate: clamp_error_rate(parse_amount(&form.error_rate)),
            industry: form.industry.trim().to_string(),
            annual_revenue: form.annual_revenue.trim().to_string(),
        }
    }
}

/// Result of an estimate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RoiEstimate {
    pub weekly_savings: f64,
    pub annual_hours: f64,
    pub annual_time_savings: f64,
    pub error_cost_savings: f64,
    pub total_annual_savings: f64,
    /// Return on the assumed project cost, clamped to `[-999, 999]`
    pub roi_percent: f64,
}

/// Compute the savings estimate for a set of inputs.
///
/// Pure: the same inputs always produce the same estimate.
pub fn estimate(inputs: &RoiInputs) -> RoiEstimate {
    let rate = bounded(inputs.hourly_rate);
    let weekly_hours = bounded(inputs.weekly_hours);
    let error_rate = clamp_error_rate(inputs.error_rate);

    let annual_hours = weekly_hours * WEEKS_PER_YEAR;
    let annual_time_savings = annual_hours * rate;
    let error_cost_savings = ERROR_COST_FRACTION * annual_hours * (error_rate / 100.0) * rate;
    let total_annual_savings = annual_time_savings + error_cost_savings;

    RoiEstimate {
        weekly_savings: weekly_hours * rate,
        annual_hours,
        annual_time_savings,
        error_cost_savings,
        total_annual_savings,
        roi_percent: roi_percent(total_annual_savings),
    }
}

/// Percentage return of `total_savings` over [`PROJECT_COST`]
pub fn roi_percent(total_savings: f64) -> f64 {
    let roi = (total_savings - PROJECT_COST) / PROJECT_COST * 100.0;
    if roi.is_nan() {
        return 0.0;
    }
    roi.clamp(ROI_PERCENT_MIN, ROI_PERCENT_MAX)
}

pub fn clamp_error_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        return 0.0;
    }
    rate.clamp(0.0, 100.0)
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn bounded(value: f64) -> f64 {
    non_negative(value).min(MAX_AMOUNT)
}

/// Parse a decimal amount into `[0, MAX_AMOUNT]`, defaulting to zero
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(bounded)
        .unwrap_or(0.0)
}

/// Parse a whole count. Decimal input is truncated.
pub fn parse_count(raw: &str) -> u32 {
    let trimmed = raw.trim();
    trimmed
        .parse::<u32>()
        .ok()
        .or_else(|| {
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .map(|v| v.min(u32::MAX as f64) as u32)
        })
        .unwrap_or(0)
}

/// Format a dollar amount rounded to whole dollars with thousands separators
pub fn format_currency(amount: f64) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(rounded.abs() as u64))
}

/// Format an ROI percentage as a whole number, e.g. `"380% ROI"`
pub fn format_roi(percent: f64) -> String {
    format!("{:.0}% ROI", percent)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(rate: f64, hours: f64, error_rate: f64) -> RoiInputs {
        RoiInputs {
            employees: 50,
            hourly_rate: rate,
            weekly_hours: hours,
            error_rate,
            industry: "Manufacturing".to_string(),
            annual_revenue: "$5M - $25M".to_string(),
        }
    }

    #[test]
    fn test_estimate_basic() {
        let result = estimate(&inputs(35.0, 120.0, 5.0));

        assert_eq!(result.weekly_savings, 4200.0);
        assert_eq!(result.annual_hours, 6240.0);
        assert_eq!(result.annual_time_savings, 218_400.0);
        // 0.85 * 6240 * 0.05 * 35
        assert!((result.error_cost_savings - 9282.0).abs() < 1e-6);
        assert!((result.total_annual_savings - 227_682.0).abs() < 1e-6);
        assert!((result.roi_percent - 355.364).abs() < 1e-6);
    }

    #[test]
    fn test_estimate_is_pure() {
        let a = inputs(42.5, 37.0, 12.0);
        assert_eq!(estimate(&a), estimate(&a.clone()));
    }

    #[test]
    fn test_zero_inputs_give_full_loss() {
        let result = estimate(&RoiInputs::default());
        assert_eq!(result.total_annual_savings, 0.0);
        assert_eq!(result.roi_percent, -100.0);
    }

    #[test]
    fn test_error_rate_is_clamped() {
        let high = RoiInputs::from_raw(&RoiForm {
            error_rate: "250".to_string(),
            ..Default::default()
        });
        assert_eq!(high.error_rate, 100.0);

        let low = RoiInputs::from_raw(&RoiForm {
            error_rate: "-4".to_string(),
            ..Default::default()
        });
        assert_eq!(low.error_rate, 0.0);

        // Inputs built by hand are clamped at estimate time too
        let over = estimate(&inputs(10.0, 10.0, 500.0));
        let capped = estimate(&inputs(10.0, 10.0, 100.0));
        assert_eq!(over, capped);
    }

    #[test]
    fn test_roi_percent_is_clamped() {
        let huge = estimate(&inputs(1_000.0, 10_000.0, 100.0));
        assert_eq!(huge.roi_percent, ROI_PERCENT_MAX);

        assert_eq!(roi_percent(f64::MAX), ROI_PERCENT_MAX);
        assert_eq!(roi_percent(-1e12), ROI_PERCENT_MIN);
        assert_eq!(roi_percent(PROJECT_COST), 0.0);
    }

    #[test]
    fn test_roi_percent_stays_in_bounds() {
        for rate in [0.0, 1.0, 25.0, 80.0, 500.0] {
            for hours in [0.0, 5.0, 40.0, 400.0] {
                for err in [0.0, 50.0, 100.0] {
                    let roi = estimate(&inputs(rate, hours, err)).roi_percent;
                    assert!((ROI_PERCENT_MIN..=ROI_PERCENT_MAX).contains(&roi));
                }
            }
        }
    }

    #[test]
    fn test_huge_inputs_stay_finite() {
        let idle = estimate(&RoiInputs::from_raw(&RoiForm {
            hourly_rate: "0".to_string(),
            weekly_hours: "1e308".to_string(),
            error_rate: "5".to_string(),
            ..Default::default()
        }));
        assert_eq!(idle.total_annual_savings, 0.0);
        assert_eq!(idle.roi_percent, -100.0);
        assert_eq!(format_roi(idle.roi_percent), "-100% ROI");

        let huge = estimate(&RoiInputs::from_raw(&RoiForm {
            hourly_rate: "1e200".to_string(),
            weekly_hours: "1e200".to_string(),
            error_rate: "100".to_string(),
            ..Default::default()
        }));
        assert!(huge.annual_hours.is_finite());
        assert!(huge.total_annual_savings.is_finite());
        assert!(huge.total_annual_savings > PROJECT_COST);
        assert_eq!(huge.roi_percent, ROI_PERCENT_MAX);
        assert_ne!(format_currency(huge.total_annual_savings), "$0");

        // Inputs built by hand are bounded at estimate time too
        let manual = estimate(&inputs(f64::MAX, f64::MAX, 50.0));
        assert!(manual.total_annual_savings.is_finite());
    }

    #[test]
    fn test_unparseable_input_is_zero() {
        let form = RoiForm {
            employees: "lots".to_string(),
            hourly_rate: "".to_string(),
            weekly_hours: "  ".to_string(),
            error_rate: "five".to_string(),
            industry: " Healthcare ".to_string(),
            annual_revenue: String::new(),
        };
        let parsed = RoiInputs::from_raw(&form);

        assert_eq!(parsed.employees, 0);
        assert_eq!(parsed.hourly_rate, 0.0);
        assert_eq!(parsed.weekly_hours, 0.0);
        assert_eq!(parsed.error_rate, 0.0);
        assert_eq!(parsed.industry, "Healthcare");
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_amount("35.5"), 35.5);
        assert_eq!(parse_amount(" 12 "), 12.0);
        assert_eq!(parse_amount("-3"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
        assert_eq!(parse_amount("1e308"), MAX_AMOUNT);

        assert_eq!(parse_count("50"), 50);
        assert_eq!(parse_count("12.9"), 12);
        assert_eq!(parse_count("-1"), 0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.4), "$999");
        assert_eq!(format_currency(1000.0), "$1,000");
        assert_eq!(format_currency(227_682.0), "$227,682");
        assert_eq!(format_currency(1_234_567.89), "$1,234,568");
        assert_eq!(format_currency(-2500.0), "-$2,500");
    }

    #[test]
    fn test_format_roi() {
        assert_eq!(format_roi(355.364), "355% ROI");
        assert_eq!(format_roi(-100.0), "-100% ROI");
    }
}
