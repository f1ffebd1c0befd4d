//! Hotdesk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    booking::{
        Booking, BookingError, BookingId, BookingStatus, PaymentInformation, ScheduleError,
        TransitionError,
    },
    clock::{canonical_date, canonical_utc},
    ids::TypedUuid,
    inactivity::{Inactivity, InactivityError, InactivityId},
    interval::{Interval, InvalidInterval},
    office::{Office, OfficeId},
    privacy::{Privacy, PrivacyError},
    rates::{RateError, total_amount},
};
