//! Token amount parsing and formatting
//!
//! Contract values are base-unit integers serialized as strings. Formatting is
//! done on the digit string itself so no precision is lost to floats.

/// Parse a base-unit integer string. Surrounding whitespace is ignored.
pub fn parse_amount(raw: &str) -> Option<u128> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse().ok()
}

/// Render a base-unit integer string as a decimal amount.
///
/// Trailing fractional zeros are trimmed. Input that is not a plain digit
/// string is returned unchanged.
pub fn format_token_amount(raw: &str, decimals: u8) -> String {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let digits = digits.trim_start_matches('0');
    if digits.is_empty() {
        return "0".to_string();
    }

    let decimals = decimals as usize;
    if decimals == 0 {
        return digits.to_string();
    }

    let (whole, frac) = if digits.len() > decimals {
        let split = digits.len() - decimals;
        (digits[..split].to_string(), digits[split..].to_string())
    } else {
        let padding = "0".repeat(decimals - digits.len());
        ("0".to_string(), format!("{}{}", padding, digits))
    };

    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        whole
    } else {
        format!("{}.{}", whole, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("500"), Some(500));
        assert_eq!(parse_amount(" 42 "), Some(42));
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("1.5"), None);
        assert_eq!(
            parse_amount("340282366920938463463374607431768211455"),
            Some(u128::MAX)
        );
        assert_eq!(parse_amount("340282366920938463463374607431768211456"), None);
    }

    #[test]
    fn test_format_whole_numbers() {
        assert_eq!(format_token_amount("500", 0), "500");
        assert_eq!(format_token_amount("1000000", 6), "1");
        assert_eq!(format_token_amount("0", 24), "0");
        assert_eq!(format_token_amount("000", 6), "0");
    }

    #[test]
    fn test_format_fractional_amounts() {
        assert_eq!(format_token_amount("1500000", 6), "1.5");
        assert_eq!(format_token_amount("1", 6), "0.000001");
        assert_eq!(format_token_amount("123456789", 3), "123456.789");
    }

    #[test]
    fn test_format_keeps_precision_beyond_f64() {
        assert_eq!(
            format_token_amount("1000000000000000000000001", 24),
            "1.000000000000000000000001"
        );
    }

    #[test]
    fn test_format_malformed_input_unchanged() {
        assert_eq!(format_token_amount("n/a", 6), "n/a");
        assert_eq!(format_token_amount("", 6), "");
    }
}
