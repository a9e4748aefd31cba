use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bounds::{MAX_SPAN, MAX_VALUE};
use crate::field::{Field, FieldInputs};

/// Parse trimmed text as an integral number.
///
/// Accepts plain integer form and any numeric form whose value has a zero
/// fraction ("5.0", "1e2"), matching the host form's loose numeric entry.
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(n);
    }
    let f: f64 = text.parse().ok()?;
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// True iff the text parses as an integer.
pub fn is_integer(text: &str) -> bool {
    parse_integer(text).is_some()
}

/// True iff the text parses as an integer with |v| <= MAX_VALUE.
pub fn within_magnitude(text: &str) -> bool {
    match parse_integer(text) {
        Some(v) => v.abs() <= MAX_VALUE as i64,
        None => false,
    }
}

/// True iff value <= other. Vacuously true when either side is empty or
/// non-integer, deferring the "not a number" error to the integer rule.
pub fn less_than_or_equal(text: &str, other: &str) -> bool {
    match (parse_integer(text), parse_integer(other)) {
        (Some(a), Some(b)) => a <= b,
        _ => true,
    }
}

/// True iff value >= other. Vacuous on empty/non-integer input.
pub fn greater_than_or_equal(text: &str, other: &str) -> bool {
    match (parse_integer(text), parse_integer(other)) {
        (Some(a), Some(b)) => a >= b,
        _ => true,
    }
}

/// True iff |value - other| <= MAX_SPAN. Vacuous on empty/non-integer input.
pub fn within_span(text: &str, other: &str) -> bool {
    match (parse_integer(text), parse_integer(other)) {
        (Some(a), Some(b)) => (a - b).abs() <= MAX_SPAN as i64,
        _ => true,
    }
}

/// A single rule violation on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    Required,
    NotInteger,
    OutOfRange,
    MinAboveMax,
    MaxBelowMin,
    SpanTooLarge,
}

impl FieldError {
    /// User-facing message for this violation.
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "This field is required.",
            FieldError::NotInteger => "Integer numbers are required.",
            FieldError::OutOfRange => {
                "Numbers cannot be larger than 500, or smaller than -500."
            }
            FieldError::MinAboveMax => "Minimum values cannot be greater than maximum values.",
            FieldError::MaxBelowMin => "Maximum values cannot be less than minimum values.",
            FieldError::SpanTooLarge => {
                "There cannot be more than 100 rows or 100 columns. \
                 Try increasing min values or decreasing max values."
            }
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Validation outcome for the whole form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    entries: Vec<(Field, Vec<FieldError>)>,
}

impl ValidationReport {
    /// The form is valid iff no field has any violation.
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, errors)| errors.is_empty())
    }

    /// Violations recorded for one field.
    pub fn errors_for(&self, field: Field) -> &[FieldError] {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, errors)| errors.as_slice())
            .unwrap_or(&[])
    }

    /// All (field, violations) pairs in form order.
    pub fn entries(&self) -> &[(Field, Vec<FieldError>)] {
        &self.entries
    }
}

/// Run every applicable rule against one field.
pub fn validate_field(field: Field, inputs: &FieldInputs) -> Vec<FieldError> {
    let text = inputs.get(field);

    if text.trim().is_empty() {
        return vec![FieldError::Required];
    }
    if !is_integer(text) {
        return vec![FieldError::NotInteger];
    }

    let mut errors = Vec::new();
    if !within_magnitude(text) {
        errors.push(FieldError::OutOfRange);
    }

    let other = inputs.get(field.counterpart());
    if field.is_min() {
        if !less_than_or_equal(text, other) {
            errors.push(FieldError::MinAboveMax);
        }
    } else if !greater_than_or_equal(text, other) {
        errors.push(FieldError::MaxBelowMin);
    }
    if !within_span(text, other) {
        errors.push(FieldError::SpanTooLarge);
    }

    errors
}

/// Validate all four fields simultaneously.
pub fn validate_form(inputs: &FieldInputs) -> ValidationReport {
    ValidationReport {
        entries: Field::ALL
            .iter()
            .map(|&field| (field, validate_field(field, inputs)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(min_col: &str, max_col: &str, min_row: &str, max_row: &str) -> FieldInputs {
        let mut i = FieldInputs::new();
        i.set(Field::MinCol, min_col);
        i.set(Field::MaxCol, max_col);
        i.set(Field::MinRow, min_row);
        i.set(Field::MaxRow, max_row);
        i
    }

    #[test]
    fn test_parse_integer_plain() {
        assert_eq!(parse_integer("5"), Some(5));
        assert_eq!(parse_integer("-500"), Some(-500));
        assert_eq!(parse_integer("  42  "), Some(42));
    }

    #[test]
    fn test_parse_integer_numeric_forms() {
        assert_eq!(parse_integer("5.0"), Some(5));
        assert_eq!(parse_integer("1e2"), Some(100));
        assert_eq!(parse_integer("-3.00"), Some(-3));
    }

    #[test]
    fn test_parse_integer_rejects() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("   "), None);
        assert_eq!(parse_integer("5.5"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("1/2"), None);
    }

    #[test]
    fn test_within_magnitude() {
        assert!(within_magnitude("500"));
        assert!(within_magnitude("-500"));
        assert!(!within_magnitude("501"));
        assert!(!within_magnitude("-501"));
        assert!(!within_magnitude("abc"));
    }

    #[test]
    fn test_ordering_rules() {
        assert!(less_than_or_equal("3", "5"));
        assert!(less_than_or_equal("5", "5"));
        assert!(!less_than_or_equal("5", "3"));

        assert!(greater_than_or_equal("5", "3"));
        assert!(!greater_than_or_equal("3", "5"));
    }

    #[test]
    fn test_ordering_vacuous_on_invalid() {
        // Empty or non-integer counterpart defers to the integer rule.
        assert!(less_than_or_equal("5", ""));
        assert!(less_than_or_equal("", "3"));
        assert!(less_than_or_equal("5", "abc"));
        assert!(greater_than_or_equal("abc", "5"));
        assert!(within_span("", "150"));
        assert!(within_span("0", "x"));
    }

    #[test]
    fn test_within_span() {
        assert!(within_span("0", "100"));
        assert!(within_span("100", "0"));
        assert!(!within_span("0", "150"));
        assert!(within_span("-50", "50"));
        assert!(!within_span("-51", "50"));
    }

    #[test]
    fn test_valid_form() {
        let report = validate_form(&inputs("1", "3", "1", "2"));
        assert!(report.is_valid());
        for field in Field::ALL {
            assert!(report.errors_for(field).is_empty());
        }
    }

    #[test]
    fn test_empty_field_required() {
        let report = validate_form(&inputs("1", "3", "", "2"));
        assert!(!report.is_valid());
        assert_eq!(report.errors_for(Field::MinRow), &[FieldError::Required]);
        // Other fields stay clean: cross-field rules pass vacuously.
        assert!(report.errors_for(Field::MaxRow).is_empty());
    }

    #[test]
    fn test_non_integer_single_report() {
        let report = validate_form(&inputs("1.5", "3", "1", "2"));
        assert_eq!(report.errors_for(Field::MinCol), &[FieldError::NotInteger]);
        assert!(report.errors_for(Field::MaxCol).is_empty());
    }

    #[test]
    fn test_inverted_min_max() {
        let report = validate_form(&inputs("5", "3", "1", "2"));
        assert!(!report.is_valid());
        assert_eq!(report.errors_for(Field::MinCol), &[FieldError::MinAboveMax]);
        assert_eq!(report.errors_for(Field::MaxCol), &[FieldError::MaxBelowMin]);
    }

    #[test]
    fn test_span_too_large() {
        let report = validate_form(&inputs("0", "150", "1", "2"));
        assert!(!report.is_valid());
        assert_eq!(
            report.errors_for(Field::MinCol),
            &[FieldError::SpanTooLarge]
        );
        assert_eq!(
            report.errors_for(Field::MaxCol),
            &[FieldError::SpanTooLarge]
        );
    }

    #[test]
    fn test_span_at_limit_passes() {
        let report = validate_form(&inputs("0", "100", "1", "2"));
        assert!(report.is_valid());
    }

    #[test]
    fn test_magnitude_violation() {
        let report = validate_form(&inputs("-501", "3", "1", "2"));
        let errors = report.errors_for(Field::MinCol);
        assert!(errors.contains(&FieldError::OutOfRange));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            FieldError::NotInteger.to_string(),
            "Integer numbers are required."
        );
        assert!(FieldError::SpanTooLarge.message().contains("100 rows"));
    }
}
