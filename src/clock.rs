//! Canonical time frame
//!
//! Bookings arrive with whatever zone the renter's client supplied. All
//! overlap and closure comparisons happen in one frame: the timestamp
//! rebased to UTC with the zone stripped off. The originally supplied zoned
//! values stay on the booking for display.

use jiff::{Zoned, civil, tz::TimeZone};

/// Rebase a zoned timestamp to UTC and drop the zone.
pub fn canonical_utc(timestamp: &Zoned) -> civil::DateTime {
    timestamp.timestamp().to_zoned(TimeZone::UTC).datetime()
}

/// The calendar date of a zoned timestamp in the canonical UTC frame.
pub fn canonical_date(timestamp: &Zoned) -> civil::Date {
    timestamp.timestamp().to_zoned(TimeZone::UTC).date()
}
