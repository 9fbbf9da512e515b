//! Rendering of results as plain and display strings.
//!
//! Display strings group the integer part with a single space every three
//! digits (`1234567.5` becomes `1 234 567.5`).

/// Render `value` with `precision` fraction digits, then drop trailing zeros
/// and a trailing point. Negative zero renders as `"0"`.
#[must_use]
pub fn plain(value: f64, precision: usize) -> String {
    let fixed = format!("{value:.precision$}");
    let trimmed = strip_fraction_zeros(&fixed);
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Format a decimal string for display.
///
/// Text that does not parse as a finite number is returned unchanged.
/// Values that round to zero at `precision` render as `"0"`.
///
/// # Examples
///
/// ```
/// use calculator::domain::format::display;
///
/// assert_eq!(display("1234567.5", 6), "1 234 567.5");
/// assert_eq!(display("-0.0000001", 6), "0");
/// assert_eq!(display("n/a", 6), "n/a");
/// ```
#[must_use]
pub fn display(text: &str, precision: usize) -> String {
    let Ok(value) = text.trim().parse::<f64>() else {
        return text.to_owned();
    };
    if !value.is_finite() {
        return text.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let fixed = format!("{:.precision$}", value.abs());
    let magnitude = strip_fraction_zeros(&fixed);
    if magnitude == "0" {
        return "0".to_owned();
    }

    let grouped = match magnitude.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_thousands(integer)),
        None => group_thousands(magnitude),
    };

    if value.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Grouped rendering that keeps all `precision` fraction digits, e.g.
/// `1 000 000 000 000.000000`.
#[must_use]
pub fn fixed_grouped(value: f64, precision: usize) -> String {
    let fixed = format!("{:.precision$}", value.abs());
    let grouped = match fixed.split_once('.') {
        Some((integer, fraction)) => format!("{}.{fraction}", group_thousands(integer)),
        None => group_thousands(&fixed),
    };
    if value.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn strip_fraction_zeros(fixed: &str) -> &str {
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::new();
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_integer_part() {
        assert_eq!(display("1234567.5", 6), "1 234 567.5");
        assert_eq!(display("1000", 6), "1 000");
        assert_eq!(display("100", 6), "100");
        assert_eq!(display("1000000000000", 6), "1 000 000 000 000");
    }

    #[test]
    fn test_display_zero() {
        assert_eq!(display("0", 6), "0");
        assert_eq!(display("-0", 6), "0");
        assert_eq!(display("0.0", 10), "0");
    }

    #[test]
    fn test_display_below_resolution_collapses() {
        assert_eq!(display("-0.000001", 6), "-0.000001");
        assert_eq!(display("-0.0000001", 6), "0");
        assert_eq!(display("0.00000000001", 10), "0");
    }

    #[test]
    fn test_display_rounds_to_precision() {
        assert_eq!(display("0.1234567", 6), "0.123457");
        assert_eq!(display("2.50", 6), "2.5");
        assert_eq!(display("1234.0000000001", 10), "1 234.0000000001");
    }

    #[test]
    fn test_display_whole_values_have_no_fraction() {
        assert_eq!(display("7.000", 6), "7");
        assert_eq!(display("-1234.0000001", 6), "-1 234");
        assert_eq!(display("1000.4", 0), "1 000");
        assert!(!display("999999.9999999", 6).contains('.'));
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(display("-1234567.25", 6), "-1 234 567.25");
        assert_eq!(display("-5", 6), "-5");
    }

    #[test]
    fn test_display_unparseable_returned_unchanged() {
        assert_eq!(display("abc", 6), "abc");
        assert_eq!(display("", 6), "");
        assert_eq!(display("inf", 6), "inf");
    }

    #[test]
    fn test_display_reparses_to_value() {
        for text in ["1234567.5", "-0.25", "999999999999.999999", "42"] {
            let shown = display(text, 6).replace(' ', "");
            let original: f64 = text.parse().unwrap();
            let reparsed: f64 = shown.parse().unwrap();
            assert!((original - reparsed).abs() < 1e-6, "{text} -> {shown}");
        }
    }

    #[test]
    fn test_plain() {
        assert_eq!(plain(3.0, 6), "3");
        assert_eq!(plain(0.1 + 0.2, 6), "0.3");
        assert_eq!(plain(-0.0, 6), "0");
        assert_eq!(plain(-0.000_000_1, 6), "0");
        assert_eq!(plain(1_234_567.5, 10), "1234567.5");
        assert_eq!(plain(100.0, 0), "100");
    }

    #[test]
    fn test_fixed_grouped() {
        assert_eq!(
            fixed_grouped(1_000_000_000_000.0, 6),
            "1 000 000 000 000.000000"
        );
        assert_eq!(fixed_grouped(-1234.5, 1), "-1 234.5");
        assert_eq!(fixed_grouped(999.0, 0), "999");
    }
}
