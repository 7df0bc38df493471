//! Display formatting for computed values

/// Renders a value the way the display shows it
///
/// Integral values drop the fractional part entirely (`2`, not `2.0`), and
/// negative zero is shown as `0`. Everything else uses the shortest decimal
/// string that round-trips to the same `f64`, so `1/3` shows
/// `0.3333333333333333`. No exponent notation is ever produced.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integral_values_have_no_fraction() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-15.0), "-15");
        assert_eq!(format_number(1024.0), "1024");
    }

    #[test]
    fn test_zero_and_negative_zero() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(-2.25), "-2.25");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_float_noise_is_kept() {
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_large_integral_value_is_written_out() {
        assert_eq!(format_number(1e16), "10000000000000000");
    }

    #[test]
    fn test_small_value_has_no_exponent() {
        assert_eq!(format_number(1e-7), "0.0000001");
    }
}
