//! Shared field validation for ledger mutations.
//!
//! The mutation modules all take the same raw inputs from the caller: a date
//! string, an integer quantity, and a floating-point price. These helpers
//! centralize the checks so every transaction kind rejects bad input with the
//! same error variants.

use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Parses a `YYYY-MM-DD` date string into a calendar date.
///
/// # Errors
/// Returns [`Error::InvalidDate`] for any other format or an impossible date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

/// Checks that a quantity or amount is a positive integer.
///
/// # Errors
/// Returns [`Error::InvalidQuantity`] for zero or negative values.
pub fn check_quantity(quantity: i32) -> Result<()> {
    if quantity <= 0 {
        return Err(Error::InvalidQuantity { quantity });
    }
    Ok(())
}

/// Checks that a unit price or receipt total is finite and non-negative.
///
/// # Errors
/// Returns [`Error::InvalidPrice`] for negative, NaN, or infinite values.
pub fn check_price(price: f64) -> Result<()> {
    if price < 0.0 || !price.is_finite() {
        return Err(Error::InvalidPrice { price });
    }
    Ok(())
}
