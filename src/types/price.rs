//! Decimal price and amount utilities.
//!
//! ## Overview
//!
//! All prices and amounts are exact `rust_decimal::Decimal` values. Binary
//! floating point never enters the book: values are parsed from, and printed
//! to, base-10 strings.
//!
//! ## Examples
//!
//! ```
//! use limit_orderbook::types::price::{parse_decimal, is_positive};
//!
//! let price = parse_decimal("50000.12345678").unwrap();
//! assert_eq!(price.to_string(), "50000.12345678");
//! assert!(is_positive(price));
//! ```

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::RestoreError;

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse an exact decimal string
///
/// Surrounding whitespace is ignored. Scientific notation is accepted.
///
/// # Errors
///
/// [`RestoreError::InvalidDecimal`] when the string is not a decimal number.
pub fn parse_decimal(s: &str) -> Result<Decimal, RestoreError> {
    let trimmed = s.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| RestoreError::InvalidDecimal {
            value: s.to_string(),
        })
}

/// Canonical string form with trailing zeros removed
///
/// # Example
///
/// ```
/// use limit_orderbook::types::price::{parse_decimal, to_canonical_string};
///
/// assert_eq!(to_canonical_string(parse_decimal("1.500").unwrap()), "1.5");
/// assert_eq!(to_canonical_string(parse_decimal("100").unwrap()), "100");
/// ```
pub fn to_canonical_string(d: Decimal) -> String {
    d.normalize().to_string()
}

// ============================================================================
// Comparison Helpers
// ============================================================================

/// `true` if `d > 0`
#[inline]
pub fn is_positive(d: Decimal) -> bool {
    d > Decimal::ZERO
}

// ============================================================================
// Unit Tests
// ============================================================================
