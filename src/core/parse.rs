use once_cell::sync::Lazy;
use regex::Regex;

// Decimal, NaN and Infinity forms with an optional float/double suffix.
static DECIMAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)(?:(NaN)|(Infinity)|((?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)[fFdD]?)$")
        .expect("decimal literal pattern")
});

static HEX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+-]?)0[xX]([0-9a-fA-F]*)(?:\.([0-9a-fA-F]*))?[pP]([+-]?[0-9]+)[fFdD]?$")
        .expect("hex literal pattern")
});

/// Parses user text into a temperature, falling back to `0.0`.
///
/// An empty field or anything that is not a number reads as zero. The
/// converter then shows the conversion of 0.0 rather than an error.
pub fn parse_input_text(text: &str) -> f64 {
    parse_input_text_strict(text).unwrap_or(0.0)
}

/// Same grammar as [`parse_input_text`] without the zero fallback.
pub fn parse_input_text_strict(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| c <= '\u{20}');

    if let Some(caps) = DECIMAL_RE.captures(trimmed) {
        let negative = &caps[1] == "-";
        if caps.get(2).is_some() {
            return Some(f64::NAN);
        }
        if caps.get(3).is_some() {
            return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
        }
        let digits = caps.get(4)?.as_str();
        let magnitude: f64 = digits.parse().ok()?;
        return Some(if negative { -magnitude } else { magnitude });
    }

    let caps = HEX_RE.captures(trimmed)?;
    let int_part = caps.get(2).map_or("", |m| m.as_str());
    let frac_part = caps.get(3).map_or("", |m| m.as_str());
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let magnitude = parse_hex_magnitude(int_part, frac_part, &caps[4]);
    Some(if &caps[1] == "-" { -magnitude } else { magnitude })
}

fn parse_hex_magnitude(int_part: &str, frac_part: &str, exponent: &str) -> f64 {
    // 15 hex digits fit in 60 bits; later digits only feed the sticky bit.
    const MAX_DIGITS: usize = 15;

    let mut mantissa: u64 = 0;
    let mut taken = 0usize;
    let mut shift: i64 = 0;
    let mut sticky = false;

    let digits = int_part
        .chars()
        .map(|c| (c, false))
        .chain(frac_part.chars().map(|c| (c, true)));
    for (c, fractional) in digits {
        let value = c.to_digit(16).unwrap_or(0) as u64;
        if mantissa == 0 && value == 0 {
            if fractional {
                shift -= 4;
            }
            continue;
        }
        if taken < MAX_DIGITS {
            mantissa = (mantissa << 4) | value;
            taken += 1;
            if fractional {
                shift -= 4;
            }
        } else {
            sticky |= value != 0;
            if !fractional {
                shift += 4;
            }
        }
    }

    if mantissa == 0 {
        return 0.0;
    }
    if sticky {
        // Keep round-to-nearest from collapsing a value just above a tie.
        mantissa = (mantissa << 1) | 1;
        shift -= 1;
    }

    let exp = exponent.parse::<i64>().unwrap_or(if exponent.starts_with('-') {
        i64::MIN / 2
    } else {
        i64::MAX / 2
    });
    scale_by_pow2(mantissa as f64, exp.saturating_add(shift))
}

fn scale_by_pow2(mut value: f64, mut exp: i64) -> f64 {
    while exp > 1000 {
        value *= 2f64.powi(1000);
        exp -= 1000;
        if value.is_infinite() {
            return value;
        }
    }
    while exp < -1000 {
        value *= 2f64.powi(-1000);
        exp += 1000;
        if value == 0.0 {
            return value;
        }
    }
    value * 2f64.powi(exp as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_garbage_read_as_zero() {
        assert_eq!(parse_input_text(""), 0.0);
        assert_eq!(parse_input_text("abc"), 0.0);
        assert_eq!(parse_input_text("   "), 0.0);
        assert_eq!(parse_input_text("-"), 0.0);
        assert_eq!(parse_input_text("."), 0.0);
        assert_eq!(parse_input_text("1,5"), 0.0);
        assert_eq!(parse_input_text("12abc"), 0.0);
        assert_eq!(parse_input_text("1e"), 0.0);
    }

    #[test]
    fn test_plain_decimals() {
        assert_eq!(parse_input_text("98.6"), 98.6);
        assert_eq!(parse_input_text("-40"), -40.0);
        assert_eq!(parse_input_text("+12.5"), 12.5);
        assert_eq!(parse_input_text("12."), 12.0);
        assert_eq!(parse_input_text(".5"), 0.5);
        assert_eq!(parse_input_text("1e3"), 1000.0);
        assert_eq!(parse_input_text("2.5E-1"), 0.25);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_input_text("  37.5\n"), 37.5);
        assert_eq!(parse_input_text("\t-3"), -3.0);
    }

    #[test]
    fn test_type_suffixes() {
        assert_eq!(parse_input_text("10f"), 10.0);
        assert_eq!(parse_input_text("10.5D"), 10.5);
        assert_eq!(parse_input_text("10ff"), 0.0);
    }

    #[test]
    fn test_special_literals_are_case_sensitive() {
        assert!(parse_input_text("NaN").is_nan());
        assert_eq!(parse_input_text("Infinity"), f64::INFINITY);
        assert_eq!(parse_input_text("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_input_text("inf"), 0.0);
        assert_eq!(parse_input_text("nan"), 0.0);
        assert_eq!(parse_input_text("infinity"), 0.0);
        assert_eq!(parse_input_text("NaNf"), 0.0);
    }

    #[test]
    fn test_hex_literals() {
        assert_eq!(parse_input_text("0x1p3"), 8.0);
        assert_eq!(parse_input_text("0x1.8p1"), 3.0);
        assert_eq!(parse_input_text("-0X.8P0"), -0.5);
        assert_eq!(parse_input_text("0x10p-4"), 1.0);
        assert_eq!(parse_input_text("0x0p0"), 0.0);
        assert_eq!(parse_input_text("0x1p99999999999999999999"), f64::INFINITY);
        assert_eq!(parse_input_text("0x1"), 0.0);
        assert_eq!(parse_input_text("0xp1"), 0.0);
    }

    #[test]
    fn test_strict_distinguishes_failure_from_zero() {
        assert_eq!(parse_input_text_strict("0"), Some(0.0));
        assert_eq!(parse_input_text_strict("abc"), None);
        assert_eq!(parse_input_text_strict(""), None);
    }

    #[test]
    fn test_huge_exponent_saturates() {
        assert_eq!(parse_input_text("1e400"), f64::INFINITY);
        assert_eq!(parse_input_text("1e-400"), 0.0);
    }
}
