//! Price Formatting
//!
//! Brazilian currency convention: `R$ 1.234,56`.

/// Format `price` with a symbol prefix, `.` thousands and `,` decimals.
///
/// Rounds half away from zero on the shortest decimal form of `price`, so
/// `1.005` gives `1,01` even though its binary value is slightly below.
pub fn format_price(price: f64, symbol: &str) -> String {
    if !price.is_finite() {
        return format!("{symbol} {price}");
    }

    // f64 Display never uses exponent notation
    let repr = price.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    // Integer digits followed by exactly two cent digits
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if frac_part.as_bytes().get(2).map_or(false, |d| *d >= b'5') {
        round_up(&mut digits);
    }

    let (units, cents) = digits.split_at(digits.len() - 2);
    let is_zero = digits.iter().all(|d| *d == 0);
    let sign = if price < 0.0 && !is_zero { "-" } else { "" };

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, d) in units.iter().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(char::from(b'0' + d));
    }

    format!("{sign}{symbol} {grouped},{}{}", cents[0], cents[1])
}

/// Add one to the last decimal digit, carrying to the left
fn round_up(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.5, "R$"), "R$ 12,50");
        assert_eq!(format_price(1234.56, "R$"), "R$ 1.234,56");
        assert_eq!(format_price(0.0, "R$"), "R$ 0,00");
        assert_eq!(format_price(0.5, "R$"), "R$ 0,50");
        assert_eq!(format_price(9.99, "R$"), "R$ 9,99");
        assert_eq!(format_price(100.0, "R$"), "R$ 100,00");
        assert_eq!(format_price(1_000_000.0, "R$"), "R$ 1.000.000,00");
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(format_price(3.999, "R$"), "R$ 4,00");
        assert_eq!(format_price(7.001, "R$"), "R$ 7,00");
    }

    #[test]
    fn test_rounds_half_up_on_decimal_form() {
        assert_eq!(format_price(1.005, "R$"), "R$ 1,01");
        assert_eq!(format_price(0.145, "R$"), "R$ 0,15");
        assert_eq!(format_price(0.285, "R$"), "R$ 0,29");
        assert_eq!(format_price(1.015, "R$"), "R$ 1,02");
        assert_eq!(format_price(0.004, "R$"), "R$ 0,00");
    }

    #[test]
    fn test_rounding_carries_into_units() {
        assert_eq!(format_price(9.995, "R$"), "R$ 10,00");
        assert_eq!(format_price(999.995, "R$"), "R$ 1.000,00");
    }

    #[test]
    fn test_large_prices_do_not_overflow() {
        assert_eq!(format_price(1e20, "R$"), "R$ 100.000.000.000.000.000.000,00");
    }

    #[test]
    fn test_other_symbol() {
        assert_eq!(format_price(2500.0, "€"), "€ 2.500,00");
    }
}
