//! App Context

use std::sync::Arc;

use crate::{
    domain::{
        bookings::{BookingsRepository, BookingsService, DefaultBookingsService,
            InMemoryBookingsRepository},
        memberships::{DefaultMembershipsService, InMemoryMembershipsRepository,
            MembershipsService},
        offices::{InMemoryOfficesRepository, OfficesRepository},
    },
    sync::Projector,
};

/// Wired application services.
pub struct AppContext {
    /// Offices replica, written by the projector.
    pub offices: Arc<dyn OfficesRepository>,

    /// Booking placement and payment confirmation.
    pub bookings: Arc<dyn BookingsService>,

    /// Membership sales and coverage checks.
    pub memberships: Arc<dyn MembershipsService>,

    /// Backoffice event applier feeding the offices replica.
    pub projector: Projector,
}

impl AppContext {
    /// Build a context over process-local stores.
    #[must_use]
    pub fn in_memory() -> Self {
        let offices: Arc<dyn OfficesRepository> = Arc::new(InMemoryOfficesRepository::new());
        let bookings: Arc<dyn BookingsRepository> = Arc::new(InMemoryBookingsRepository::new());

        Self {
            bookings: Arc::new(DefaultBookingsService::new(
                Arc::clone(&offices),
                bookings,
            )),
            memberships: Arc::new(DefaultMembershipsService::new(Arc::new(
                InMemoryMembershipsRepository::new(),
            ))),
            projector: Projector::new(Arc::clone(&offices)),
            offices,
        }
    }
}
