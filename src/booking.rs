//! Booking aggregate

use jiff::Zoned;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    clock::canonical_utc,
    ids::TypedUuid,
    interval::{Interval, InvalidInterval},
    office::OfficeId,
    rates::{self, RateError},
};

/// Booking id.
pub type BookingId = TypedUuid<Booking>;

const SECONDS_PER_HOUR: i64 = 3600;

/// Structural violations of a proposed schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The proposed end does not fall strictly after the proposed start.
    #[error(transparent)]
    Inverted(#[from] InvalidInterval),

    /// The wall-clock length is not a whole, positive number of hours.
    ///
    /// The hour is the billing unit; partial hours are rejected rather than
    /// silently truncated.
    #[error("booking length must be a whole number of billable hours")]
    NotWholeHours,

    /// A booking needs at least one attendee.
    #[error("booking must include at least one attendee")]
    NoAttendees,
}

/// Why a booking proposal was refused.
///
/// Every variant is an expected, caller-recoverable business outcome; the
/// engine never retries and never swallows a failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    /// The proposed interval violates a structural invariant. Surfaced to
    /// the caller as-is and never retried.
    #[error("invalid schedule time")]
    InvalidScheduleTime(#[from] ScheduleError),

    /// The office is closed on the proposed dates or its sharing policy
    /// refused admission. A business rejection, not a system fault.
    #[error("office is not available for the proposed time")]
    OfficeNotAvailable,

    /// Total-amount arithmetic failed.
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// A booking was asked to transition from a status it is not in.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// Payment was attached to a booking that is no longer pending.
    #[error("booking has already been scheduled")]
    AlreadyScheduled,
}

/// Payment lifecycle of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Created, awaiting payment.
    Pending,

    /// Payment attached; the reservation is confirmed.
    Scheduled,
}

/// Payment details attached when a payment attempt succeeds.
///
/// Gateway integration lives outside this crate; the reference is whatever
/// the payment collaborator uses to identify the completed payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInformation {
    /// The payment collaborator's reference for the completed payment.
    pub reference: String,
}

/// One reservation of an office for a renter.
///
/// Holds the as-supplied zoned timestamps for display alongside the
/// canonical interval used for all conflict comparisons. References its
/// office by id only; created exclusively through
/// [`Office::book`](crate::office::Office::book).
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    id: BookingId,
    office_id: OfficeId,
    renter_email: String,
    start: Zoned,
    end: Zoned,
    interval: Interval,
    billable_hours: i64,
    attendees: u32,
    status: BookingStatus,
    total_amount: Money<'static, Currency>,
    payment: Option<PaymentInformation>,
}

impl Booking {
    /// Validate a proposal and construct a pending booking.
    ///
    /// The total amount is computed here, from the office's hourly price and
    /// the wall-clock duration as the renter experiences it (the supplied
    /// zone, not the canonical frame).
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidScheduleTime`] when the end does not
    /// fall strictly after the start, the length is not a whole positive
    /// number of hours, or no attendees were given;
    /// [`BookingError::Rate`] when the total amount cannot be represented.
    pub fn create(
        id: BookingId,
        office_id: OfficeId,
        price_per_hour: Money<'static, Currency>,
        start: &Zoned,
        end: &Zoned,
        renter_email: impl Into<String>,
        attendees: u32,
    ) -> Result<Self, BookingError> {
        if attendees == 0 {
            return Err(ScheduleError::NoAttendees.into());
        }

        let interval =
            Interval::new(canonical_utc(start), canonical_utc(end)).map_err(ScheduleError::from)?;

        let billable_hours = billable_hours(start, end)?;
        let total_amount = rates::total_amount(price_per_hour, billable_hours)?;

        Ok(Self {
            id,
            office_id,
            renter_email: renter_email.into(),
            start: start.clone(),
            end: end.clone(),
            interval,
            billable_hours,
            attendees,
            status: BookingStatus::Pending,
            total_amount,
            payment: None,
        })
    }

    /// Attach payment details and confirm the reservation.
    ///
    /// The only transition defined for a booking is `Pending -> Scheduled`;
    /// payment-webhook idempotency belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::AlreadyScheduled`] when the booking has
    /// already been confirmed.
    pub fn mark_scheduled(self, payment: PaymentInformation) -> Result<Self, TransitionError> {
        match self.status {
            BookingStatus::Pending => Ok(Self {
                status: BookingStatus::Scheduled,
                payment: Some(payment),
                ..self
            }),
            BookingStatus::Scheduled => Err(TransitionError::AlreadyScheduled),
        }
    }

    /// Whether this booking's interval overlaps the proposed one.
    pub fn conflicts_with(&self, proposed: Interval) -> bool {
        self.interval.overlaps(proposed)
    }

    /// Booking id.
    pub fn id(&self) -> BookingId {
        self.id
    }

    /// Id of the booked office.
    pub fn office_id(&self) -> OfficeId {
        self.office_id
    }

    /// Renter contact email.
    pub fn renter_email(&self) -> &str {
        &self.renter_email
    }

    /// Start as supplied by the renter, zone retained.
    pub fn start(&self) -> &Zoned {
        &self.start
    }

    /// End as supplied by the renter, zone retained.
    pub fn end(&self) -> &Zoned {
        &self.end
    }

    /// The canonical UTC interval used for conflict checks.
    pub fn interval(&self) -> Interval {
        self.interval
    }

    /// Whole billable hours, in the renter's wall clock.
    pub fn billable_hours(&self) -> i64 {
        self.billable_hours
    }

    /// Number of attendees.
    pub fn attendees(&self) -> u32 {
        self.attendees
    }

    /// Current payment lifecycle status.
    pub fn status(&self) -> BookingStatus {
        self.status
    }

    /// Hourly price times billable hours, fixed at construction.
    pub fn total_amount(&self) -> Money<'static, Currency> {
        self.total_amount
    }

    /// Payment details, present once scheduled.
    pub fn payment(&self) -> Option<&PaymentInformation> {
        self.payment.as_ref()
    }
}

/// Whole billable hours between the supplied timestamps, wall clock.
fn billable_hours(start: &Zoned, end: &Zoned) -> Result<i64, ScheduleError> {
    let length = start.datetime().duration_until(end.datetime());
    let seconds = length.as_secs();

    if seconds <= 0 {
        return Err(ScheduleError::Inverted(InvalidInterval));
    }

    if seconds % SECONDS_PER_HOUR != 0 || length.subsec_nanos() != 0 {
        return Err(ScheduleError::NotWholeHours);
    }

    Ok(seconds / SECONDS_PER_HOUR)
}
