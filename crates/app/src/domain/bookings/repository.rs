//! Bookings repository.

use std::sync::RwLock;

use async_trait::async_trait;
use hotdesk::{
    booking::{Booking, BookingId},
    office::OfficeId,
};
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::storage::StorageError;

/// Booking persistence and the per-office conflict snapshot.
#[automock]
#[async_trait]
pub trait BookingsRepository: Send + Sync {
    /// Insert or replace a booking.
    async fn store(&self, booking: Booking) -> Result<(), StorageError>;

    /// Find a booking by id.
    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>, StorageError>;

    /// Every booking held against an office, any status.
    ///
    /// This is the snapshot the privacy policy checks proposals against; it
    /// deliberately includes pending bookings so an unpaid reservation still
    /// occupies its slot.
    async fn find_by_office(&self, office_id: OfficeId) -> Result<Vec<Booking>, StorageError>;
}

/// Process-local bookings store.
#[derive(Debug, Default)]
pub struct InMemoryBookingsRepository {
    bookings: RwLock<FxHashMap<BookingId, Booking>>,
}

impl InMemoryBookingsRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingsRepository for InMemoryBookingsRepository {
    async fn store(&self, booking: Booking) -> Result<(), StorageError> {
        let mut bookings = self.bookings.write().map_err(|_| StorageError::LockPoisoned)?;

        bookings.insert(booking.id(), booking);

        Ok(())
    }

    async fn find_by_id(&self, booking_id: BookingId) -> Result<Option<Booking>, StorageError> {
        let bookings = self.bookings.read().map_err(|_| StorageError::LockPoisoned)?;

        Ok(bookings.get(&booking_id).cloned())
    }

    async fn find_by_office(&self, office_id: OfficeId) -> Result<Vec<Booking>, StorageError> {
        let bookings = self.bookings.read().map_err(|_| StorageError::LockPoisoned)?;

        Ok(bookings
            .values()
            .filter(|booking| booking.office_id() == office_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use hotdesk::booking::BookingId;
    use jiff::{Zoned, civil, tz::TimeZone};
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use super::{
        Booking, BookingsRepository, InMemoryBookingsRepository, OfficeId,
    };

    fn at(hour: i8) -> Result<Zoned, jiff::Error> {
        civil::date(2024, 6, 5).at(hour, 0, 0, 0).to_zoned(TimeZone::UTC)
    }

    fn booking(office_id: OfficeId) -> TestResult<Booking> {
        Ok(Booking::create(
            BookingId::new(),
            office_id,
            Money::from_minor(1000, iso::EUR),
            &at(10)?,
            &at(11)?,
            "renter@example.com",
            1,
        )?)
    }

    #[tokio::test]
    async fn snapshot_is_scoped_to_the_office() -> TestResult {
        let repo = InMemoryBookingsRepository::new();
        let office_a = OfficeId::new();
        let office_b = OfficeId::new();

        repo.store(booking(office_a)?).await?;
        repo.store(booking(office_a)?).await?;
        repo.store(booking(office_b)?).await?;

        assert_eq!(repo.find_by_office(office_a).await?.len(), 2);
        assert_eq!(repo.find_by_office(office_b).await?.len(), 1);
        assert_eq!(repo.find_by_office(OfficeId::new()).await?.len(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn store_is_an_upsert_by_booking_id() -> TestResult {
        let repo = InMemoryBookingsRepository::new();
        let office_id = OfficeId::new();
        let booking = booking(office_id)?;
        let id = booking.id();

        repo.store(booking.clone()).await?;
        repo.store(booking).await?;

        assert_eq!(repo.find_by_office(office_id).await?.len(), 1);
        assert!(repo.find_by_id(id).await?.is_some());

        Ok(())
    }
}
