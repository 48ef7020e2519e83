//! Input validation

use rust_decimal::Decimal;
use std::str::FromStr;

/// Why a typed salary was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SalaryError {
    /// Not a decimal number at all
    #[error("Please enter a valid number.")]
    NotANumber,

    /// Well-formed, but beyond 96-bit decimal precision
    #[error("That number is too large. Salaries are limited to 28 significant digits.")]
    OutOfRange,
}

/// Parse a salary typed by the user.
///
/// Surrounding whitespace is ignored. Plain decimals (`50000`, `.5`, `-12.75`)
/// and exponent form (`1e5`) are accepted; trailing text, thousands separators
/// and empty input are not. Values must fit a 96-bit decimal, which caps them
/// at 28 significant digits (magnitude below 7.9e28).
pub fn parse_salary(raw: &str) -> Result<Decimal, SalaryError> {
    let trimmed = raw.trim();
    if !is_decimal_literal(trimmed) {
        return Err(SalaryError::NotANumber);
    }
    Decimal::from_str(trimmed).map_err(|_| SalaryError::OutOfRange)
}

/// `[+-]digits[.digits][e[+-]digits]` with at least one mantissa digit
fn is_decimal_literal(s: &str) -> bool {
    let s = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match s.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (s, None),
    };

    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return false;
    }
    if !all_digits(int_part) || !all_digits(frac_part) {
        return false;
    }

    match exponent {
        None => true,
        Some(e) => {
            let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
            !digits.is_empty() && all_digits(digits)
        }
    }
}
