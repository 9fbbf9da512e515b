use calculator_sdk::RoundingMode;

/// Round `value` to an integer using `mode`.
///
/// Out-of-range values saturate at the `i64` bounds and `NaN` maps to `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_integer(value: f64, mode: RoundingMode) -> i64 {
    let rounded = match mode {
        RoundingMode::Mathematical => value.round(),
        RoundingMode::Bankers => value.round_ties_even(),
        RoundingMode::Truncate => value.trunc(),
    };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_values() {
        assert_eq!(round_integer(2.5, RoundingMode::Mathematical), 3);
        assert_eq!(round_integer(2.5, RoundingMode::Bankers), 2);
        assert_eq!(round_integer(2.5, RoundingMode::Truncate), 2);

        assert_eq!(round_integer(3.5, RoundingMode::Mathematical), 4);
        assert_eq!(round_integer(3.5, RoundingMode::Bankers), 4);

        assert_eq!(round_integer(-2.5, RoundingMode::Mathematical), -3);
        assert_eq!(round_integer(-2.5, RoundingMode::Bankers), -2);
        assert_eq!(round_integer(-2.5, RoundingMode::Truncate), -2);
    }

    #[test]
    fn test_non_half_values() {
        assert_eq!(round_integer(2.4999, RoundingMode::Mathematical), 2);
        assert_eq!(round_integer(2.6, RoundingMode::Bankers), 3);
        assert_eq!(round_integer(2.7, RoundingMode::Truncate), 2);
        assert_eq!(round_integer(-2.7, RoundingMode::Truncate), -2);
        assert_eq!(round_integer(13.0, RoundingMode::Bankers), 13);
    }

    #[test]
    fn test_degenerate_values() {
        assert_eq!(round_integer(f64::NAN, RoundingMode::Mathematical), 0);
        assert_eq!(round_integer(f64::INFINITY, RoundingMode::Truncate), i64::MAX);
    }
}
