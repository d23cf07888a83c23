//! Display formatting for derived metrics.
//!
//! All helpers are pure. Division helpers do not guard against a zero
//! denominator: `0/0` renders as `NaN` and `n/0` as `inf`.

/// Group the integer digits of `value` in threes with `,`.
///
/// Fractional digits are kept as-is and never grouped.
///
/// # Examples
///
/// ```rust
/// use csstat::format::thousands;
///
/// assert_eq!(thousands(999.0), "999");
/// assert_eq!(thousands(1234567.0), "1,234,567");
/// assert_eq!(thousands(1234.5), "1,234.5");
/// ```
pub fn thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let text = value.to_string();
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int, frac) = match unsigned.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(text.len() + int.len() / 3);
    out.push_str(sign);
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if let Some(frac) = frac {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Render a number of seconds as whole days and hours.
///
/// Below 24 hours only hours are shown; minutes and seconds are dropped.
///
/// # Examples
///
/// ```rust
/// use csstat::format::duration;
///
/// assert_eq!(duration(82_800.0), "23h");
/// assert_eq!(duration(90_000.0), "1d 1h");
/// ```
pub fn duration(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor() as u64;
    if hours >= 24 {
        format!("{}d {}h", hours / 24, hours % 24)
    } else {
        format!("{hours}h")
    }
}

/// `100 * numerator / denominator` with one decimal place and a `%` suffix.
pub fn percent(numerator: f64, denominator: f64) -> String {
    format!("{:.1}%", round_half_away(100.0 * numerator / denominator, 1))
}

/// `numerator / denominator` with two decimal places.
pub fn ratio(numerator: f64, denominator: f64) -> String {
    format!("{:.2}", round_half_away(numerator / denominator, 2))
}

/// Round to `places` decimals with ties away from zero.
///
/// `{:.N}` alone rounds exact ties to even (`1.125` -> `1.12`). Non-finite
/// values pass through.
fn round_half_away(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0.0), "0");
        assert_eq!(thousands(1.0), "1");
        assert_eq!(thousands(999.0), "999");
        assert_eq!(thousands(1000.0), "1,000");
        assert_eq!(thousands(100000.0), "100,000");
        assert_eq!(thousands(1234567.0), "1,234,567");
        assert_eq!(thousands(-1234.0), "-1,234");
    }

    #[test]
    fn test_thousands_keeps_fraction() {
        assert_eq!(thousands(1234.75), "1,234.75");
        assert_eq!(thousands(0.5), "0.5");
    }

    #[test]
    fn test_thousands_non_finite() {
        assert_eq!(thousands(f64::NAN), "NaN");
        assert_eq!(thousands(f64::INFINITY), "inf");
    }

    #[test]
    fn test_duration() {
        assert_eq!(duration(0.0), "0h");
        assert_eq!(duration(3599.0), "0h");
        assert_eq!(duration(3600.0), "1h");
        assert_eq!(duration(82_800.0), "23h");
        assert_eq!(duration(86_400.0), "1d 0h");
        assert_eq!(duration(90_000.0), "1d 1h");
        assert_eq!(duration(1_000_000.0), "11d 13h");
    }

    #[test]
    fn test_percent_and_ratio() {
        assert_eq!(percent(450.0, 1000.0), "45.0%");
        assert_eq!(percent(40.0, 100.0), "40.0%");
        assert_eq!(ratio(150.0, 100.0), "1.50");
        assert_eq!(ratio(1.0, 3.0), "0.33");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(ratio(9.0, 8.0), "1.13");
        assert_eq!(ratio(1.0, 8.0), "0.13");
        assert_eq!(ratio(-9.0, 8.0), "-1.13");
        assert_eq!(percent(49.0, 400.0), "12.3%");
        assert_eq!(percent(1.0, 400.0), "0.3%");
    }

    #[test]
    fn test_zero_denominator_is_not_guarded() {
        assert_eq!(percent(0.0, 0.0), "NaN%");
        assert_eq!(ratio(0.0, 0.0), "NaN");
        assert_eq!(ratio(5.0, 0.0), "inf");
    }
}
