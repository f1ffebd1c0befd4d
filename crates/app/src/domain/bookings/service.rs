//! Bookings service.

use std::sync::Arc;

use async_trait::async_trait;
use hotdesk::{
    booking::{Booking, BookingId, PaymentInformation},
    office::OfficeId,
};
use mockall::automock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::{
    bookings::{BookingsRepository, BookingsServiceError, NewBookingRequest},
    offices::OfficesRepository,
};

/// Booking orchestration over the offices replica and the bookings store.
///
/// Implementations must not let two placements for the same office observe
/// the same availability snapshot: the snapshot has to be taken under a
/// guard that is still held when the admitted booking is persisted,
/// otherwise both proposals can be admitted against stale state. The
/// default implementation serializes placements with an internal mutex; a
/// database-backed implementation would use a row lock on the office or an
/// equivalent constraint-plus-retry.
#[automock]
#[async_trait]
pub trait BookingsService: Send + Sync {
    /// Decide a booking proposal and persist the admitted booking.
    async fn place_booking(
        &self,
        request: NewBookingRequest,
    ) -> Result<Booking, BookingsServiceError>;

    /// Attach payment details to a pending booking, scheduling it.
    async fn confirm_payment(
        &self,
        booking_id: BookingId,
        payment: PaymentInformation,
    ) -> Result<Booking, BookingsServiceError>;

    /// Every booking held against an office, any status.
    async fn bookings_for_office(
        &self,
        office_id: OfficeId,
    ) -> Result<Vec<Booking>, BookingsServiceError>;
}

/// Default bookings service over repository seams.
pub struct DefaultBookingsService {
    offices: Arc<dyn OfficesRepository>,
    bookings: Arc<dyn BookingsRepository>,
    placement_guard: Mutex<()>,
}

impl DefaultBookingsService {
    /// Create a service over the given repositories.
    #[must_use]
    pub fn new(offices: Arc<dyn OfficesRepository>, bookings: Arc<dyn BookingsRepository>) -> Self {
        Self {
            offices,
            bookings,
            placement_guard: Mutex::new(()),
        }
    }
}

#[async_trait]
impl BookingsService for DefaultBookingsService {
    async fn place_booking(
        &self,
        request: NewBookingRequest,
    ) -> Result<Booking, BookingsServiceError> {
        // Held until the admitted booking is stored, so no two placements
        // can both pass the availability check against the same snapshot.
        let _guard = self.placement_guard.lock().await;

        let office = self
            .offices
            .find_by_id(request.office_id)
            .await?
            .filter(|office| !office.is_deleted())
            .ok_or(BookingsServiceError::OfficeNotFound)?;

        let existing = self.bookings.find_by_office(request.office_id).await?;

        debug!(
            office_id = %request.office_id,
            existing = existing.len(),
            "deciding booking proposal"
        );

        let booking = office.book(
            request.renter_email,
            request.attendees,
            &request.start,
            &request.end,
            &existing,
        )?;

        self.bookings.store(booking.clone()).await?;

        info!(
            booking_id = %booking.id(),
            office_id = %office.id(),
            hours = booking.billable_hours(),
            "booking placed"
        );

        Ok(booking)
    }

    async fn confirm_payment(
        &self,
        booking_id: BookingId,
        payment: PaymentInformation,
    ) -> Result<Booking, BookingsServiceError> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingsServiceError::BookingNotFound)?;

        let scheduled = booking.mark_scheduled(payment)?;

        self.bookings.store(scheduled.clone()).await?;

        info!(booking_id = %booking_id, "booking scheduled");

        Ok(scheduled)
    }

    async fn bookings_for_office(
        &self,
        office_id: OfficeId,
    ) -> Result<Vec<Booking>, BookingsServiceError> {
        Ok(self.bookings.find_by_office(office_id).await?)
    }
}
