//! Decimal money parsing and formatting
//!
//! The core works in i64 cents; the CLI converts between that and the
//! "30.00" style amounts users type.

use anyhow::{bail, Context, Result};

/// Parse a positive decimal amount ("30", "30.5", "30.00") into cents.
///
/// Rejects empty input, signs, more than two decimal places, and zero.
pub fn parse_amount(input: &str) -> Result<i64> {
    let input = input.trim();
    if input.is_empty() {
        bail!("amount is empty");
    }
    if input.starts_with('-') || input.starts_with('+') {
        bail!("amount must be a plain positive number: {input}");
    }

    let (whole, frac) = match input.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (input, ""),
    };
    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        bail!("malformed amount: {input}");
    }
    if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
        bail!("amounts have at most two decimal places: {input}");
    }

    let whole: i64 = whole.parse().context("amount out of range")?;
    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>()? * 10,
        _ => frac.parse::<i64>()?,
    };
    let cents = whole
        .checked_mul(100)
        .and_then(|c| c.checked_add(frac_cents))
        .context("amount out of range")?;
    if cents == 0 {
        bail!("amount must be positive");
    }
    Ok(cents)
}

/// Format cents as a decimal string ("2000" -> "20.00", "-50" -> "-0.50")
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_forms() {
        assert_eq!(parse_amount("30").unwrap(), 3_000);
        assert_eq!(parse_amount("30.5").unwrap(), 3_050);
        assert_eq!(parse_amount("30.05").unwrap(), 3_005);
        assert_eq!(parse_amount("0.01").unwrap(), 1);
        assert_eq!(parse_amount(" 12.34 ").unwrap(), 1_234);
    }

    #[test]
    fn rejects_bad_input() {
        for input in ["", "-5", "+5", "abc", "1.234", "1.2.3", ".5", "0", "0.00"] {
            assert!(parse_amount(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn formats_signed_cents() {
        assert_eq!(format_cents(2_000), "20.00");
        assert_eq!(format_cents(-1_000), "-10.00");
        assert_eq!(format_cents(5), "0.05");
        assert_eq!(format_cents(-50), "-0.50");
        assert_eq!(format_cents(0), "0.00");
    }
}
