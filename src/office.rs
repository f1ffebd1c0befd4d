//! Office aggregate

use jiff::{Zoned, civil::Date};
use rusty_money::{Money, iso::Currency};

use crate::{
    booking::{Booking, BookingError, BookingId},
    clock::canonical_date,
    ids::TypedUuid,
    inactivity::{Inactivity, InactivityId},
    privacy::Privacy,
};

/// Office id.
pub type OfficeId = TypedUuid<Office>;

/// A rentable space with a pricing and sharing policy.
///
/// The office owns its inactivity list and exactly one privacy policy, and
/// is the sole entry point for creating bookings against itself. State is
/// replicated from backoffice events; offices are soft-deleted, never
/// physically removed.
///
/// Updates return a new value instead of mutating in place; callers hold
/// single ownership and persist the replacement explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Office {
    id: OfficeId,
    name: String,
    price_per_hour: Money<'static, Currency>,
    deleted: bool,
    inactivities: Vec<Inactivity>,
    privacy: Privacy,
}

impl Office {
    /// Create an office with an empty closure calendar.
    pub fn new(
        id: OfficeId,
        name: impl Into<String>,
        price_per_hour: Money<'static, Currency>,
        privacy: Privacy,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price_per_hour,
            deleted: false,
            inactivities: Vec::new(),
            privacy,
        }
    }

    /// Decide a booking proposal against this office.
    ///
    /// Validates the candidate booking, then checks the closure calendar on
    /// the canonical start and end dates and asks the privacy policy for
    /// admission against the supplied booking snapshot. No side effects
    /// beyond constructing the pending booking; persistence is the caller's
    /// responsibility, and the snapshot must still be protected by the
    /// caller's guard when the booking is stored.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::InvalidScheduleTime`] when the proposal is
    /// structurally invalid and [`BookingError::OfficeNotAvailable`] when
    /// the calendar closes either date or the policy refuses admission.
    pub fn book(
        &self,
        renter_email: impl Into<String>,
        attendees: u32,
        start: &Zoned,
        end: &Zoned,
        existing: &[Booking],
    ) -> Result<Booking, BookingError> {
        let candidate = Booking::create(
            BookingId::new(),
            self.id,
            self.price_per_hour,
            start,
            end,
            renter_email,
            attendees,
        )?;

        if self.is_closed_on(canonical_date(start)) || self.is_closed_on(canonical_date(end)) {
            return Err(BookingError::OfficeNotAvailable);
        }

        if !self.privacy.admits(candidate.interval(), existing) {
            return Err(BookingError::OfficeNotAvailable);
        }

        Ok(candidate)
    }

    /// Whether any inactivity entry closes the office on the given date.
    pub fn is_closed_on(&self, date: Date) -> bool {
        self.inactivities
            .iter()
            .any(|entry| entry.is_unavailable_at(date))
    }

    /// Replace name and hourly price.
    #[must_use]
    pub fn with_details(
        self,
        name: impl Into<String>,
        price_per_hour: Money<'static, Currency>,
    ) -> Self {
        Self {
            name: name.into(),
            price_per_hour,
            ..self
        }
    }

    /// Replace the privacy policy wholesale.
    ///
    /// A policy never changes variant in place; swapping the owned value is
    /// the only way to go from exclusive to shared or back.
    #[must_use]
    pub fn with_privacy(self, privacy: Privacy) -> Self {
        Self { privacy, ..self }
    }

    /// Add a closure entry. Re-adding an id already present is a no-op, so
    /// replaying a creation event converges.
    #[must_use]
    pub fn with_inactivity(mut self, inactivity: Inactivity) -> Self {
        let already_present = self
            .inactivities
            .iter()
            .any(|entry| entry.id() == inactivity.id());

        if !already_present {
            self.inactivities.push(inactivity);
        }

        self
    }

    /// Remove a closure entry by id. Unknown ids are a no-op.
    #[must_use]
    pub fn without_inactivity(mut self, id: InactivityId) -> Self {
        self.inactivities.retain(|entry| entry.id() != id);
        self
    }

    /// Soft-delete the office.
    #[must_use]
    pub fn mark_deleted(self) -> Self {
        Self {
            deleted: true,
            ..self
        }
    }

    /// Office id.
    pub fn id(&self) -> OfficeId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hourly rental price.
    pub fn price_per_hour(&self) -> Money<'static, Currency> {
        self.price_per_hour
    }

    /// Whether the office has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// The closure calendar.
    pub fn inactivities(&self) -> &[Inactivity] {
        &self.inactivities
    }

    /// The sharing policy.
    pub fn privacy(&self) -> &Privacy {
        &self.privacy
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Zoned, civil, tz::TimeZone};
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        booking::{Booking, BookingError},
        inactivity::{Inactivity, InactivityId},
        privacy::Privacy,
    };

    use super::{Office, OfficeId};

    fn at(day: i8, hour: i8) -> Result<Zoned, jiff::Error> {
        civil::date(2021, 9, day).at(hour, 0, 0, 0).to_zoned(TimeZone::UTC)
    }

    fn office(privacy: Privacy) -> Office {
        Office::new(
            OfficeId::new(),
            "Main Street 12",
            Money::from_minor(2000, iso::EUR),
            privacy,
        )
    }

    fn exclusive_office() -> Office {
        office(Privacy::Exclusive { capacity: 6 })
    }

    #[test]
    fn books_an_open_conflict_free_office() -> TestResult {
        let office = exclusive_office();

        let booking = office.book("renter@example.com", 2, &at(16, 10)?, &at(16, 12)?, &[])?;

        assert_eq!(booking.office_id(), office.id());
        assert_eq!(booking.total_amount(), Money::from_minor(4000, iso::EUR));

        Ok(())
    }

    #[test]
    fn invalid_proposals_never_reach_availability_checks() -> TestResult {
        let office = exclusive_office();

        let result = office.book("renter@example.com", 2, &at(16, 12)?, &at(16, 10)?, &[]);

        assert!(
            matches!(result, Err(BookingError::InvalidScheduleTime(_))),
            "expected InvalidScheduleTime, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn conflicting_booking_makes_the_office_unavailable() -> TestResult {
        let office = exclusive_office();

        let existing: Vec<Booking> =
            vec![office.book("first@example.com", 1, &at(16, 10)?, &at(16, 12)?, &[])?];

        let result = office.book("second@example.com", 1, &at(16, 11)?, &at(16, 13)?, &existing);

        assert_eq!(result, Err(BookingError::OfficeNotAvailable));

        Ok(())
    }

    #[test]
    fn recurring_closure_rejects_on_the_canonical_start_date() -> TestResult {
        // 2021-09-20 is a Monday.
        let office = exclusive_office().with_inactivity(Inactivity::RecurringDay {
            id: InactivityId::new(),
            weekday: civil::Weekday::Monday,
        });

        let result = office.book("renter@example.com", 1, &at(20, 10)?, &at(20, 12)?, &[]);

        assert_eq!(result, Err(BookingError::OfficeNotAvailable));

        Ok(())
    }

    #[test]
    fn recurring_closure_rejects_on_the_canonical_end_date() -> TestResult {
        // Sunday 23:00 through Monday 01:00: only the end date is closed.
        let office = exclusive_office().with_inactivity(Inactivity::RecurringDay {
            id: InactivityId::new(),
            weekday: civil::Weekday::Monday,
        });

        let result = office.book("renter@example.com", 1, &at(19, 23)?, &at(20, 1)?, &[]);

        assert_eq!(result, Err(BookingError::OfficeNotAvailable));

        Ok(())
    }

    #[test]
    fn closure_is_evaluated_on_canonical_dates_not_wall_clock() -> TestResult {
        // 00:30 Tuesday at UTC+2 normalizes to 22:30 Monday: closed.
        let office = exclusive_office().with_inactivity(Inactivity::RecurringDay {
            id: InactivityId::new(),
            weekday: civil::Weekday::Monday,
        });

        let zone = TimeZone::fixed(jiff::tz::offset(2));
        let start = civil::date(2021, 9, 21).at(0, 30, 0, 0).to_zoned(zone.clone())?;
        let end = civil::date(2021, 9, 21).at(1, 30, 0, 0).to_zoned(zone)?;

        let result = office.book("renter@example.com", 1, &start, &end, &[]);

        assert_eq!(result, Err(BookingError::OfficeNotAvailable));

        Ok(())
    }

    #[test]
    fn specific_date_closure_only_blocks_that_date() -> TestResult {
        let office = exclusive_office().with_inactivity(Inactivity::SpecificDate {
            id: InactivityId::new(),
            date: civil::date(2021, 9, 17),
        });

        assert!(office.book("renter@example.com", 1, &at(17, 10)?, &at(17, 12)?, &[]).is_err());
        assert!(office.book("renter@example.com", 1, &at(16, 10)?, &at(16, 12)?, &[]).is_ok());

        Ok(())
    }

    #[test]
    fn removing_an_inactivity_reopens_the_office() -> TestResult {
        let entry_id = InactivityId::new();
        let office = exclusive_office().with_inactivity(Inactivity::SpecificDate {
            id: entry_id,
            date: civil::date(2021, 9, 16),
        });

        assert!(office.is_closed_on(civil::date(2021, 9, 16)));

        let reopened = office.without_inactivity(entry_id);

        assert!(!reopened.is_closed_on(civil::date(2021, 9, 16)));

        Ok(())
    }

    #[test]
    fn readding_the_same_inactivity_is_a_no_op() {
        let entry_id = InactivityId::new();
        let entry = Inactivity::SpecificDate {
            id: entry_id,
            date: civil::date(2021, 9, 16),
        };

        let office = exclusive_office()
            .with_inactivity(entry.clone())
            .with_inactivity(entry);

        assert_eq!(office.inactivities().len(), 1);
    }

    #[test]
    fn updates_return_new_values() {
        let office = office(Privacy::Exclusive { capacity: 2 });
        let id = office.id();

        let updated = office
            .with_details("Harbour View 3", Money::from_minor(3500, iso::EUR))
            .with_privacy(Privacy::Shared {
                tables_quantity: 4,
                capacity_per_table: 2,
            })
            .mark_deleted();

        assert_eq!(updated.id(), id);
        assert_eq!(updated.name(), "Harbour View 3");
        assert_eq!(updated.price_per_hour(), Money::from_minor(3500, iso::EUR));
        assert!(updated.is_deleted());
        assert!(matches!(
            updated.privacy(),
            Privacy::Shared {
                tables_quantity: 4,
                ..
            }
        ));
    }
}
