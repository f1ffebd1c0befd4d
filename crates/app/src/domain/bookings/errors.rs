//! Bookings service errors.

use hotdesk::booking::{BookingError, TransitionError};
use thiserror::Error;

use crate::storage::StorageError;

/// Failures surfaced by the bookings service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingsServiceError {
    /// The office does not exist in the replica, or has been soft-deleted.
    #[error("office not found")]
    OfficeNotFound,

    /// The booking id is unknown.
    #[error("booking not found")]
    BookingNotFound,

    /// The engine refused the proposal; carries the business reason.
    #[error("booking refused")]
    Refused(#[from] BookingError),

    /// The booking is not in a status that allows the transition.
    #[error("invalid booking transition")]
    Transition(#[from] TransitionError),

    /// A repository failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
