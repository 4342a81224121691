//! Field normalization: coerce raw board text into typed values.
//!
//! Number coercion keeps the "strip every non-numeric character, then parse
//! the longest numeric prefix" behaviour, quirks included: `"12.5k"` becomes
//! `12.5`, `"1.2.3"` becomes `1.2`, and anything without a leading number
//! becomes `0`.

use once_cell::sync::Lazy;
use regex::Regex;
use skylark_domain::constants::{PROBABILITY_HIGH, PROBABILITY_LOW, PROBABILITY_MEDIUM};

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^0-9.\-]+").expect("NON_NUMERIC regex should compile - this is a bug")
});

static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)")
        .expect("NUMERIC_PREFIX regex should compile - this is a bug")
});

/// Parse a currency or number-like string. Unparsable or empty input is `0`.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    NUMERIC_PREFIX
        .find(&cleaned)
        .and_then(|prefix| prefix.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Parse a monetary amount; negative amounts clamp to `0`.
pub fn parse_amount(raw: Option<&str>) -> f64 {
    raw.map(parse_number).unwrap_or(0.0).max(0.0)
}

/// Map a qualitative or percentage probability onto `0..=100`.
///
/// "high", "medium" and "low" are matched as case-insensitive substrings in
/// that order; otherwise a `%` is dropped and the number rule applies.
pub fn parse_probability(raw: Option<&str>) -> u8 {
    let raw = raw.unwrap_or_default();
    let lower = raw.to_lowercase();

    if lower.contains("high") {
        PROBABILITY_HIGH
    } else if lower.contains("medium") {
        PROBABILITY_MEDIUM
    } else if lower.contains("low") {
        PROBABILITY_LOW
    } else {
        let value = parse_number(&raw.replacen('%', "", 1));
        // clamped to 0..=100 before the cast
        value.round().clamp(0.0, 100.0) as u8
    }
}

/// Trim surrounding whitespace; absent text becomes `""`.
pub fn normalize_text(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Trimmed text, or `default` when that is empty.
pub fn text_or(raw: Option<&str>, default: &str) -> String {
    let text = normalize_text(raw);
    if text.is_empty() {
        default.to_string()
    } else {
        text
    }
}

/// Dates are passed through untouched; absent stays `""`.
pub fn normalize_date(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_currency_strings() {
        assert!(approx(parse_number("$12,500.50"), 12_500.50));
        assert!(approx(parse_number("USD 100,000"), 100_000.0));
        assert!(approx(parse_number("42"), 42.0));
    }

    #[test]
    fn empty_and_non_numeric_become_zero() {
        assert!(approx(parse_number(""), 0.0));
        assert!(approx(parse_number("N/A"), 0.0));
        assert!(approx(parse_number("-"), 0.0));
        assert!(approx(parse_number("."), 0.0));
    }

    #[test]
    fn suffix_letters_are_dropped_not_scaled() {
        assert!(approx(parse_number("12.5k"), 12.5));
    }

    #[test]
    fn multiple_decimal_points_keep_first_valid_prefix() {
        assert!(approx(parse_number("1.2.3"), 1.2));
        assert!(approx(parse_number("12-5"), 12.0));
        assert!(approx(parse_number(".5"), 0.5));
    }

    #[test]
    fn negative_numbers_parse_but_amounts_clamp() {
        assert!(approx(parse_number("-250"), -250.0));
        assert!(approx(parse_amount(Some("-250")), 0.0));
        assert!(approx(parse_amount(None), 0.0));
    }

    #[test]
    fn qualitative_probabilities() {
        assert_eq!(parse_probability(Some("High")), 90);
        assert_eq!(parse_probability(Some("Medium")), 50);
        assert_eq!(parse_probability(Some("Low")), 20);
        assert_eq!(parse_probability(Some("very HIGH")), 90);
    }

    #[test]
    fn high_wins_over_medium_and_low() {
        assert_eq!(parse_probability(Some("Medium-High")), 90);
        assert_eq!(parse_probability(Some("low to medium")), 50);
    }

    #[test]
    fn numeric_probabilities() {
        assert_eq!(parse_probability(Some("75%")), 75);
        assert_eq!(parse_probability(Some("")), 0);
        assert_eq!(parse_probability(None), 0);
        assert_eq!(parse_probability(Some("abc")), 0);
    }

    #[test]
    fn probabilities_are_clamped_and_rounded() {
        assert_eq!(parse_probability(Some("150%")), 100);
        assert_eq!(parse_probability(Some("-10")), 0);
        assert_eq!(parse_probability(Some("33.6%")), 34);
    }

    #[test]
    fn text_is_trimmed_and_defaulted() {
        assert_eq!(normalize_text(Some("  Energy ")), "Energy");
        assert_eq!(normalize_text(None), "");
        assert_eq!(text_or(Some("   "), "Unassigned"), "Unassigned");
        assert_eq!(text_or(Some(" Mining"), "Unassigned"), "Mining");
    }

    #[test]
    fn dates_pass_through() {
        assert_eq!(normalize_date(Some("2025-01-31")), "2025-01-31");
        assert_eq!(normalize_date(None), "");
    }
}
