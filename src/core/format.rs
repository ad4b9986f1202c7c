use crate::domain::model::Direction;

const DECIMALS: usize = 2;

/// `"<input> <from> is <output> <to>"`, both numbers with two decimals.
pub fn format_result(input: f64, output: f64, direction: impl Into<Direction>) -> String {
    let direction = direction.into();
    format!(
        "{} {} is {} {}",
        format_fixed(input, DECIMALS),
        direction.from_scale(),
        format_fixed(output, DECIMALS),
        direction.to_scale()
    )
}

/// Fixed-point rendering with half-away-from-zero rounding.
///
/// Rounding is applied to the shortest decimal string that round-trips the
/// value, not to its exact binary expansion, so `1.005` gives `1.01` and
/// `0.125` gives `0.13`. The sign bit is kept: `-0.0` and `-0.001` both
/// render with a leading minus.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // Display for f64 never switches to exponent notation.
    let shortest = value.abs().to_string();
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(decimals)
        .is_some_and(|&next| next >= b'5');
    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, 1);
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|d| char::from(b'0' + d)));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|d| char::from(b'0' + d)));
    }
    out
}
