//! Membership purchase payloads.

use jiff::civil::Weekday;

/// A renter's request to purchase recurring access.
#[derive(Debug, Clone)]
pub struct NewMembership {
    /// Purchasing renter's email.
    pub renter_email: String,

    /// Covered month, 1 through 12.
    pub month: i8,

    /// Covered weekday.
    pub weekday: Weekday,
}
