//! Hourly rates

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while computing a booking total.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateError {
    /// The total in minor units does not fit the money representation.
    #[error("total amount overflows for {hours} billable hours")]
    AmountOverflow {
        /// Billable hours requested.
        hours: i64,
    },
}

/// Total amount for a whole-hour rental: hourly price times billable hours.
///
/// All arithmetic happens in minor units.
///
/// # Errors
///
/// Returns [`RateError::AmountOverflow`] when the multiplication leaves the
/// representable minor-unit range.
pub fn total_amount(
    price_per_hour: Money<'static, Currency>,
    hours: i64,
) -> Result<Money<'static, Currency>, RateError> {
    let minor = price_per_hour
        .to_minor_units()
        .checked_mul(hours)
        .ok_or(RateError::AmountOverflow { hours })?;

    Ok(Money::from_minor(minor, price_per_hour.currency()))
}
