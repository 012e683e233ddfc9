//! Payment amount normalization.

use crate::errors::{Error, Result};

/// Normalizes user-entered amount text into a whole number of pesos.
///
/// Treasurers type amounts the way they write them: `50.000`, `50,000` or
/// `50000` all mean fifty thousand, so `.` and `,` thousands separators are
/// stripped before parsing. Empty input means zero. Anything else that is
/// not all digits is rejected.
pub fn parse_amount(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    let digits = trimmed.replace(['.', ','], "");
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidAmount {
            input: trimmed.to_string(),
        });
    }
    digits.parse().map_err(|_| Error::InvalidAmount {
        input: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators_are_stripped() {
        assert_eq!(parse_amount("50.000").unwrap(), 50_000);
        assert_eq!(parse_amount("50,000").unwrap(), 50_000);
        assert_eq!(parse_amount("1.234.567").unwrap(), 1_234_567);
    }

    #[test]
    fn plain_digits_pass_through() {
        assert_eq!(parse_amount("50000").unwrap(), 50_000);
        assert_eq!(parse_amount("0").unwrap(), 0);
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(parse_amount("").unwrap(), 0);
        assert_eq!(parse_amount("   ").unwrap(), 0);
    }

    #[test]
    fn non_numeric_text_is_rejected() {
        assert!(matches!(
            parse_amount("abc"),
            Err(Error::InvalidAmount { .. })
        ));
        assert!(matches!(
            parse_amount("50a00"),
            Err(Error::InvalidAmount { .. })
        ));
        // Separators alone leave nothing to parse.
        assert!(matches!(
            parse_amount(".,"),
            Err(Error::InvalidAmount { .. })
        ));
        // Negative amounts are not representable.
        assert!(matches!(
            parse_amount("-5000"),
            Err(Error::InvalidAmount { .. })
        ));
    }
}
