//! Field values extracted from records for sorting and display

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A comparable value read from a single record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text, compared by byte order
    Text(String),
    /// Whole number (view counts, years)
    Integer(i64),
    /// Fractional number (ratings)
    Decimal(f64),
    /// Point in time, compared by instant rather than by its rendering
    Timestamp(DateTime<Utc>),
    /// Enumerated label (status, plan, quality)
    Label(&'static str),
}

impl FieldValue {
    /// Try to get as f64, promoting integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(v) => Some(*v as f64),
            FieldValue::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Label(s) => Some(s),
            _ => None,
        }
    }

    /// Total comparison used by the sort stage.
    ///
    /// Values of the same kind compare naturally. Numbers of different kinds are
    /// promoted to f64. Decimals use IEEE total order, so NaN sorts after every
    /// number instead of comparing equal to it. Anything else falls back to
    /// comparing the rendered text.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Label(a), FieldValue::Label(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.total_cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),

            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.to_string().cmp(&b.to_string()),
            },
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(v) => write!(f, "{}", v),
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Decimal(v) => write!(f, "{}", v),
            FieldValue::Timestamp(v) => write!(f, "{}", v.to_rfc3339()),
            FieldValue::Label(v) => write!(f, "{}", v),
        }
    }
}

/// Parse numeric text that may carry grouping separators ("12,345").
///
/// Returns `None` when what remains after stripping separators is not an integer.
pub fn parse_grouped_number(text: &str) -> Option<i64> {
    let digits: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_' && !c.is_whitespace())
        .collect();
    digits.parse::<i64>().ok()
}

/// Render a count with comma grouping, e.g. `12345` -> `"12,345"`
pub fn format_grouped(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_grouped_numbers() {
        assert_eq!(parse_grouped_number("1,200"), Some(1200));
        assert_eq!(parse_grouped_number("950"), Some(950));
        assert_eq!(parse_grouped_number(" 49,999 "), Some(49999));
        assert_eq!(parse_grouped_number("n/a"), None);

        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(950), "950");
        assert_eq!(format_grouped(1200), "1,200");
        assert_eq!(format_grouped(1234567), "1,234,567");
    }

    #[test]
    fn test_numeric_compare_is_not_lexical() {
        let a = FieldValue::Integer(1200);
        let b = FieldValue::Integer(950);
        assert_eq!(a.compare(&b), Ordering::Greater);

        // Lexically "1,200" < "950"; numerically it is larger
        let text_a = FieldValue::Text("1,200".into());
        let text_b = FieldValue::Text("950".into());
        assert_eq!(text_a.compare(&text_b), Ordering::Less);
    }

    #[test]
    fn test_timestamp_compare_by_instant() {
        let earlier = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(
            FieldValue::Timestamp(earlier).compare(&FieldValue::Timestamp(later)),
            Ordering::Less
        );
    }

    #[test]
    fn test_mixed_numeric_promotion() {
        assert_eq!(
            FieldValue::Integer(4).compare(&FieldValue::Decimal(3.5)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_non_finite_decimals_are_ordered() {
        let nan = FieldValue::Decimal(f64::NAN);
        assert_eq!(nan.compare(&FieldValue::Decimal(1.0)), Ordering::Greater);
        assert_eq!(FieldValue::Decimal(1.0).compare(&nan), Ordering::Less);
        assert_eq!(nan.compare(&FieldValue::Integer(5)), Ordering::Greater);
        assert_eq!(
            FieldValue::Decimal(f64::INFINITY).compare(&FieldValue::Decimal(4.9)),
            Ordering::Greater
        );
    }
}
