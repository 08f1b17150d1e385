//! Quantity input normalization.

/// Turn free-form quantity input into a quantity of at least 1.
///
/// Input is read like a lenient integer field: leading whitespace and an
/// optional sign are accepted, then the leading run of digits is used and
/// anything after it is ignored. Input with no digits, zero, and negative
/// values all become 1. Values too large for `u32` saturate.
///
/// ```
/// use topshop_commerce::cart::parse_quantity;
/// assert_eq!(parse_quantity("5"), 5);
/// assert_eq!(parse_quantity("3 pcs"), 3);
/// assert_eq!(parse_quantity("lots"), 1);
/// ```
pub fn parse_quantity(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(u32::from(b - b'0'));
    }

    if !seen_digit || negative {
        return 1;
    }
    value.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_quantity("1"), 1);
        assert_eq!(parse_quantity("5"), 5);
        assert_eq!(parse_quantity("  12"), 12);
        assert_eq!(parse_quantity("+4"), 4);
    }

    #[test]
    fn test_non_numeric_defaults_to_one() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("-"), 1);
    }

    #[test]
    fn test_non_positive_clamps_to_one() {
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-3"), 1);
    }

    #[test]
    fn test_leading_digits_are_used() {
        assert_eq!(parse_quantity("3abc"), 3);
        assert_eq!(parse_quantity("2.9"), 2);
        assert_eq!(parse_quantity("1e3"), 1);
    }

    #[test]
    fn test_huge_values_saturate() {
        assert_eq!(parse_quantity("99999999999999"), u32::MAX);
    }
}
