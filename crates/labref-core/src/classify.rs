//! Result classification.

use labref_model::{ReferenceRange, ResultStatus};

/// Parse entered text as a decimal number.
///
/// Surrounding whitespace is ignored. Empty text, text that is not a
/// number, and non-finite values (`NaN`, `inf`) yield `None`.
pub fn parse_entered_value(entered: &str) -> Option<f64> {
    let trimmed = entered.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Classify an entered value against a reference range.
pub fn classify(entered: &str, range: &ReferenceRange) -> ResultStatus {
    match parse_entered_value(entered) {
        None => ResultStatus::Unparseable,
        Some(value) if range.contains(value) => ResultStatus::InRange,
        Some(_) => ResultStatus::OutOfRange,
    }
}

/// Classify against a `(min, max?)` pair.
///
/// Without `max`, `min` is a strict upper limit ("< 140"), not a lower
/// bound. A pair that does not form a valid range gives no verdict.
pub fn classify_bounds(entered: &str, min: f64, max: Option<f64>) -> ResultStatus {
    match ReferenceRange::from_bounds(min, max) {
        Ok(range) => classify(entered, &range),
        Err(_) => ResultStatus::Unparseable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_entered_value("13.5"), Some(13.5));
        assert_eq!(parse_entered_value("  4000 "), Some(4000.0));
        assert_eq!(parse_entered_value("-2"), Some(-2.0));
        assert_eq!(parse_entered_value("1e3"), Some(1000.0));
    }

    #[test]
    fn rejects_empty_text_and_words() {
        assert_eq!(parse_entered_value(""), None);
        assert_eq!(parse_entered_value("   "), None);
        assert_eq!(parse_entered_value("abc"), None);
        assert_eq!(parse_entered_value("13,5"), None);
        assert_eq!(parse_entered_value("NaN"), None);
        assert_eq!(parse_entered_value("inf"), None);
    }

    #[test]
    fn inverted_bounds_give_no_verdict() {
        assert_eq!(
            classify_bounds("5", 10.0, Some(1.0)),
            ResultStatus::Unparseable
        );
    }
}
