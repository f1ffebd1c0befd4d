//! Membership records.

use hotdesk::ids::TypedUuid;
use jiff::civil::{Date, Weekday};
use thiserror::Error;

/// Membership id.
pub type MembershipId = TypedUuid<MembershipAcquisition>;

/// Membership construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembershipError {
    /// Month must be 1 through 12.
    #[error("month {0} is outside 1..=12")]
    InvalidMonth(i8),
}

/// A purchased right of access for one weekday across one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipAcquisition {
    id: MembershipId,
    renter_email: String,
    month: i8,
    weekday: Weekday,
    active: bool,
}

impl MembershipAcquisition {
    /// Create an active membership for the given month and weekday.
    ///
    /// # Errors
    ///
    /// Returns [`MembershipError::InvalidMonth`] for months outside 1..=12.
    pub fn new(
        id: MembershipId,
        renter_email: impl Into<String>,
        month: i8,
        weekday: Weekday,
    ) -> Result<Self, MembershipError> {
        if !(1..=12).contains(&month) {
            return Err(MembershipError::InvalidMonth(month));
        }

        Ok(Self {
            id,
            renter_email: renter_email.into(),
            month,
            weekday,
            active: true,
        })
    }

    /// Whether the membership grants access on the given date.
    pub fn covers(&self, date: Date) -> bool {
        self.active && date.month() == self.month && date.weekday() == self.weekday
    }

    /// Deactivate; cancelled memberships cover nothing.
    #[must_use]
    pub fn cancel(self) -> Self {
        Self {
            active: false,
            ..self
        }
    }

    /// Membership id.
    pub fn id(&self) -> MembershipId {
        self.id
    }

    /// Owning renter's email.
    pub fn renter_email(&self) -> &str {
        &self.renter_email
    }

    /// Covered month, 1 through 12.
    pub fn month(&self) -> i8 {
        self.month
    }

    /// Covered weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Whether the membership is still active.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
