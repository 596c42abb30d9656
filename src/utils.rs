//! Number formatting and small numeric helpers shared by the checks.

/// Absolute tolerance used when comparing scale factors and offsets.
pub(crate) const TOLERANCE: f64 = 0.000_000_1;

/// Returns true if `n` is within `tolerance` of `m`.
pub(crate) fn is_close(n: f64, m: f64, tolerance: f64) -> bool {
    n >= m - tolerance && n <= m + tolerance
}

/// Clamps a 64-bit count into the 32-bit legacy fields.
pub(crate) fn clamp_u32(n: u64) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Formats a float with the fewest digits that read back as the same value.
///
/// ```text
/// 0.01     -> "0.01"
/// 100.0    -> "100"
/// 1000.005 -> "1000.005"
/// ```
pub(crate) fn format_trimmed(value: f64) -> String {
    value.to_string()
}

/// Formats a float with as many decimals as the scale factor resolves.
///
/// Scales that need more than eight decimals fall back to [format_trimmed].
pub(crate) fn format_with_scale(value: f64, scale: f64) -> String {
    if !(scale > 0.0 && scale.is_finite()) {
        return format_trimmed(value);
    }
    let decimals = (-scale.log10() - 1e-6).ceil().max(0.0) as usize;
    if decimals > 8 {
        format_trimmed(value)
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Formats a float the way C's `%g` does: six significant digits, trailing zeros removed,
/// scientific notation for very small or very large magnitudes.
///
/// ```text
/// 0.0         -> "0"
/// 12345.678   -> "12345.7"
/// 1234567.0   -> "1.23457e+06"
/// ```
pub(crate) fn format_general(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }
    let scientific = format!("{:.5e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => return scientific,
    };
    if !(-4..6).contains(&exponent) {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let s = format!("{:.*}", (5 - exponent) as usize, value);
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            s
        }
    }
}

/// English ordinal suffix, used for "1st", "2nd", "3rd" and "4th" returns.
pub(crate) fn ordinal_suffix(n: usize) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed() {
        assert_eq!("0.01", format_trimmed(0.01));
        assert_eq!("100", format_trimmed(100.));
        assert_eq!("0.017", format_trimmed(0.017));
        assert_eq!("-2.5", format_trimmed(-2.5));
        assert_eq!("1000.005", format_trimmed(1000.005));
        assert_eq!("0.00000001", format_trimmed(0.000_000_01));
    }

    #[test]
    fn with_scale() {
        assert_eq!("12.35", format_with_scale(12.3456, 0.01));
        assert_eq!("12.346", format_with_scale(12.3456, 0.001));
        assert_eq!("12", format_with_scale(12.3456, 1.));
        assert_eq!("12.3", format_with_scale(12.3456, 0.25));
        assert_eq!("12.35", format_with_scale(12.3456, 0.025));
        assert_eq!("600000.000000", format_with_scale(600000., 0.000001));
    }

    #[test]
    fn general() {
        assert_eq!("0", format_general(0.));
        assert_eq!("12345.7", format_general(12345.678));
        assert_eq!("1.23457e+06", format_general(1234567.));
        assert_eq!("1e+09", format_general(1e9));
        assert_eq!("0.5", format_general(0.5));
        assert_eq!("1e-05", format_general(0.00001));
        assert_eq!("42", format_general(42.));
    }

    #[test]
    fn clamp() {
        assert_eq!(7, clamp_u32(7));
        assert_eq!(u32::MAX, clamp_u32(u64::from(u32::MAX) + 1));
    }

    #[test]
    fn close() {
        assert!(is_close(0.00999999, 0.01, TOLERANCE));
        assert!(!is_close(0.017, 0.01, TOLERANCE));
    }
}
