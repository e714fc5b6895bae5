/// Parses a decimal number typed by a user.
///
/// Both `.` and `,` are accepted as decimal separator. Empty, malformed and non-finite input
/// yields `None`, so that an absent value can be told apart from zero.
#[must_use]
pub fn parse_decimal(text: &str) -> Option<f64> {
    let normalized = text.trim().replacen(',', ".", 1);
    if normalized.is_empty() {
        return None;
    }
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Rounds to two decimal places, halves away from zero.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats a number without a trailing `.0` for whole values.
#[must_use]
pub fn format_decimal(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("80", Some(80.0))]
    #[case(" 82.5 ", Some(82.5))]
    #[case("82,5", Some(82.5))]
    #[case("-3", Some(-3.0))]
    #[case("0", Some(0.0))]
    #[case("", None)]
    #[case("   ", None)]
    #[case("abc", None)]
    #[case("1,2,3", None)]
    #[case("inf", None)]
    #[case("NaN", None)]
    fn test_parse_decimal(#[case] text: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_decimal(text), expected);
    }

    #[rstest]
    #[case(2.0, 2.0)]
    #[case(1.234, 1.23)]
    #[case(1.235_000_1, 1.24)]
    #[case(0.125, 0.13)]
    #[case(-0.125, -0.13)]
    fn test_round_to_hundredths(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(round_to_hundredths(value), expected);
    }

    #[rstest]
    #[case(None, "")]
    #[case(Some(60.0), "60")]
    #[case(Some(2.5), "2.5")]
    fn test_format_decimal(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_decimal(value), expected);
    }
}
