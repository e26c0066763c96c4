//! Brazilian Portuguese number formatting
//!
//! Currency, percentage and plain-number display following pt-BR
//! conventions: period as thousands separator, comma as decimal separator,
//! "R$ " currency prefix.

/// Default fraction-digit cap for [`format_number`]
const DEFAULT_MAX_FRACTION_DIGITS: usize = 6;

/// Render `value` with pt-BR separators.
///
/// Shows at most `max_frac` fraction digits; trailing zeros beyond
/// `min_frac` are trimmed, as is a bare decimal comma.
fn format_br(value: f64, min_frac: usize, max_frac: usize) -> String {
    let is_negative = value < 0.0;
    let abs_value = value.abs();

    let rendered = format!("{:.*}", max_frac, abs_value);
    let (integer_part, fraction_part) = match rendered.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (rendered.as_str(), ""),
    };

    let mut frac_len = fraction_part.len();
    while frac_len > min_frac && fraction_part.as_bytes()[frac_len - 1] == b'0' {
        frac_len -= 1;
    }

    // Thousands separators (.) on the integer part
    let grouped: String = integer_part
        .chars()
        .rev()
        .enumerate()
        .flat_map(|(i, c)| {
            if i > 0 && i % 3 == 0 {
                vec!['.', c]
            } else {
                vec![c]
            }
        })
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();

    let sign = if is_negative { "-" } else { "" };
    if frac_len == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, &fraction_part[..frac_len])
    }
}

/// Format as Brazilian Real: `"R$ 1.234,56"`.
///
/// Always two fraction digits; the sign goes after the prefix
/// (`"R$ -500,00"`).
///
/// # Examples
/// ```
/// use installment_simulator::format::format_currency;
///
/// assert_eq!(format_currency(1234.56), "R$ 1.234,56");
/// ```
pub fn format_currency(value: f64) -> String {
    format!("R$ {}", format_br(value, 2, 2))
}

/// Format a decimal fraction as a percentage: `0.0294` becomes `"2,94%"`.
///
/// At least 2 and at most 4 fraction digits are shown.
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_br(value * 100.0, 2, 4))
}

/// Format a plain number with up to 6 fraction digits: `1234.5` becomes
/// `"1.234,5"`.
pub fn format_number(value: f64) -> String {
    format_number_with(value, DEFAULT_MAX_FRACTION_DIGITS)
}

/// Format a plain number with an explicit fraction-digit cap
pub fn format_number_with(value: f64, max_fraction_digits: usize) -> String {
    format_br(value, 0, max_fraction_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_basic() {
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(0.99), "R$ 0,99");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(0.01), "R$ 0,01");
        assert_eq!(format_currency(12.0), "R$ 12,00");
        assert_eq!(format_currency(999.99), "R$ 999,99");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(-500.0), "R$ -500,00");
        assert_eq!(format_currency(-0.01), "R$ -0,01");
        assert_eq!(format_currency(-1234.56), "R$ -1.234,56");
    }

    #[test]
    fn test_format_percent_minimum_two_digits() {
        assert_eq!(format_percent(0.5), "50,00%");
        assert_eq!(format_percent(1.0), "100,00%");
        assert_eq!(format_percent(0.044), "4,40%");
    }

    #[test]
    fn test_format_percent_up_to_four_digits() {
        assert_eq!(format_percent(0.0294), "2,94%");
        assert_eq!(format_percent(0.029412), "2,9412%");
        assert_eq!(format_percent(0.008416), "0,8416%");
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(1234.5), "1.234,5");
        assert_eq!(format_number(1000.0), "1.000");
        assert_eq!(format_number(2.5), "2,5");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_caps_fraction_digits() {
        assert_eq!(format_number(0.123456789), "0,123457");
        assert_eq!(format_number_with(1234.5678, 2), "1.234,57");
        assert_eq!(format_number_with(12.3, 0), "12");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(-1234.5), "-1.234,5");
        assert_eq!(format_number_with(-0.25, 2), "-0,25");
    }
}
