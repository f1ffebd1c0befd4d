//! Sharing policy and conflict resolution

use smallvec::SmallVec;
use thiserror::Error;

use crate::{booking::Booking, interval::Interval};

/// Wire token for exclusive-use offices.
const PRIVATE: &str = "PRIVATE";

/// Wire token for shared-desk offices.
const SHARED: &str = "SHARED";

/// Errors raised while building a privacy policy from backoffice input.
///
/// These are configuration failures at office-creation/update time; an
/// office never reaches booking with an unparsed policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrivacyError {
    /// The declared type was neither `PRIVATE` nor `SHARED` (case-sensitive).
    #[error("unknown privacy kind {0:?}")]
    UnknownKind(String),

    /// A private-office payload arrived without a capacity.
    #[error("private office is missing its capacity")]
    MissingCapacity,

    /// A shared-office payload arrived without a table count.
    #[error("shared office is missing its tables quantity")]
    MissingTablesQuantity,

    /// A shared-office payload arrived without a per-table capacity.
    #[error("shared office is missing its capacity per table")]
    MissingCapacityPerTable,
}

/// How an office may be shared among concurrent bookings.
///
/// An office owns exactly one policy, chosen at creation and replaceable
/// only by an explicit update; a policy never mutates between variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Privacy {
    /// At most one party holds the office for any overlapping interval.
    Exclusive {
        /// Seats in the office. Informational only: exclusivity does not
        /// depend on headcount.
        capacity: u32,
    },

    /// Independent desks rented out concurrently, up to the table quota.
    Shared {
        /// Number of independently bookable tables.
        tables_quantity: u32,
        /// Seats per table. Informational for admission.
        capacity_per_table: u32,
    },
}

impl Privacy {
    /// Build a policy from the backoffice wire representation.
    ///
    /// # Errors
    ///
    /// Returns a [`PrivacyError`] when the kind token is unrecognized or a
    /// field the variant requires is absent. Callers treat this as a
    /// configuration error, never as a booking rejection.
    pub fn from_parts(
        kind: &str,
        capacity: Option<u32>,
        tables_quantity: Option<u32>,
        capacity_per_table: Option<u32>,
    ) -> Result<Self, PrivacyError> {
        match kind {
            PRIVATE => Ok(Self::Exclusive {
                capacity: capacity.ok_or(PrivacyError::MissingCapacity)?,
            }),
            SHARED => Ok(Self::Shared {
                tables_quantity: tables_quantity.ok_or(PrivacyError::MissingTablesQuantity)?,
                capacity_per_table: capacity_per_table
                    .ok_or(PrivacyError::MissingCapacityPerTable)?,
            }),
            other => Err(PrivacyError::UnknownKind(other.to_owned())),
        }
    }

    /// Decide whether a proposed interval can be granted next to the
    /// existing bookings for the office.
    ///
    /// Pure function of its inputs. `existing` is the office's full booking
    /// list, any status; the caller is responsible for fetching it under a
    /// guard that still holds when the admitted booking is persisted.
    ///
    /// Exclusive offices admit only conflict-free proposals. Shared offices
    /// admit immediately while fewer bookings conflict than there are
    /// tables; at or above that, each conflicting booking's overlap count
    /// within the conflicting set (including itself) must stay below the
    /// table quota. The count is per-booking and pairwise, not a global
    /// peak-occupancy sweep.
    pub fn admits(&self, proposed: Interval, existing: &[Booking]) -> bool {
        match self {
            Self::Exclusive { .. } => existing.iter().all(|other| !other.conflicts_with(proposed)),
            Self::Shared {
                tables_quantity, ..
            } => {
                let tables = usize::try_from(*tables_quantity).unwrap_or(usize::MAX);

                let conflicting: SmallVec<[&Booking; 8]> = existing
                    .iter()
                    .filter(|other| other.conflicts_with(proposed))
                    .collect();

                if conflicting.len() < tables {
                    return true;
                }

                conflicting.iter().all(|booking| {
                    let overlapping = conflicting
                        .iter()
                        .filter(|other| other.conflicts_with(booking.interval()))
                        .count();

                    overlapping < tables
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::{Zoned, civil, tz::TimeZone};
    use rusty_money::{Money, iso};
    use testresult::TestResult;

    use crate::{
        booking::{Booking, BookingId},
        interval::Interval,
        office::OfficeId,
    };

    use super::{Privacy, PrivacyError};

    fn at(hour: i8) -> Result<Zoned, jiff::Error> {
        civil::date(2021, 9, 16).at(hour, 0, 0, 0).to_zoned(TimeZone::UTC)
    }

    fn booking(start_hour: i8, end_hour: i8) -> TestResult<Booking> {
        Ok(Booking::create(
            BookingId::new(),
            OfficeId::new(),
            Money::from_minor(1000, iso::EUR),
            &at(start_hour)?,
            &at(end_hour)?,
            "renter@example.com",
            1,
        )?)
    }

    fn span(start_hour: i8, end_hour: i8) -> TestResult<Interval> {
        Ok(Interval::new(
            civil::date(2021, 9, 16).at(start_hour, 0, 0, 0),
            civil::date(2021, 9, 16).at(end_hour, 0, 0, 0),
        )?)
    }

    fn exclusive() -> Privacy {
        Privacy::Exclusive { capacity: 4 }
    }

    fn shared(tables: u32) -> Privacy {
        Privacy::Shared {
            tables_quantity: tables,
            capacity_per_table: 10,
        }
    }

    #[test]
    fn exclusive_admits_when_no_booking_overlaps() -> TestResult {
        let existing = [booking(8, 10)?, booking(14, 16)?];

        assert!(exclusive().admits(span(10, 12)?, &existing));

        Ok(())
    }

    #[test]
    fn exclusive_admits_against_an_empty_office() -> TestResult {
        assert!(exclusive().admits(span(10, 12)?, &[]));

        Ok(())
    }

    #[test]
    fn exclusive_rejects_any_overlap_regardless_of_headcount() -> TestResult {
        let existing = [booking(11, 13)?];

        assert!(!exclusive().admits(span(10, 12)?, &existing));

        Ok(())
    }

    #[test]
    fn shared_admits_while_conflicts_stay_below_the_table_quota() -> TestResult {
        let existing = [booking(10, 12)?, booking(10, 12)?];

        assert!(shared(3).admits(span(10, 12)?, &existing));

        Ok(())
    }

    #[test]
    fn shared_with_one_table_behaves_like_exclusive() -> TestResult {
        let existing = [booking(10, 11)?];

        assert!(!shared(1).admits(span(10, 11)?, &existing));
        assert!(shared(1).admits(span(11, 12)?, &existing));

        Ok(())
    }

    #[test]
    fn shared_rejects_a_fully_stacked_slot() -> TestResult {
        // Two bookings over the same hours on a two-table office: each
        // conflicting booking overlaps the other, so both counts reach the
        // quota and the proposal is refused.
        let existing = [booking(10, 12)?, booking(10, 12)?];

        assert!(!shared(2).admits(span(10, 12)?, &existing));

        Ok(())
    }

    #[test]
    fn shared_admits_a_chain_of_back_to_back_conflicts() -> TestResult {
        // Three bookings all conflict with the long proposal but never with
        // each other, so every per-booking count is 1 (itself) and the
        // two-table office admits. A global peak computation agrees here:
        // at most one existing booking is active at any instant.
        let existing = [booking(10, 12)?, booking(12, 14)?, booking(14, 16)?];

        assert!(shared(2).admits(span(10, 16)?, &existing));

        Ok(())
    }

    #[test]
    fn shared_counts_include_the_booking_itself() -> TestResult {
        // Two conflicting bookings that touch but do not overlap each
        // other: counts stay at 1 each, below the two-table quota.
        let existing = [booking(10, 12)?, booking(12, 14)?];

        assert!(shared(2).admits(span(11, 13)?, &existing));

        Ok(())
    }

    #[test]
    fn builds_exclusive_from_wire_parts() {
        assert_eq!(
            Privacy::from_parts("PRIVATE", Some(4), None, None),
            Ok(Privacy::Exclusive { capacity: 4 })
        );
    }

    #[test]
    fn builds_shared_from_wire_parts() {
        assert_eq!(
            Privacy::from_parts("SHARED", None, Some(3), Some(10)),
            Ok(Privacy::Shared {
                tables_quantity: 3,
                capacity_per_table: 10,
            })
        );
    }

    #[test]
    fn kind_tokens_are_case_sensitive() {
        assert_eq!(
            Privacy::from_parts("private", Some(4), None, None),
            Err(PrivacyError::UnknownKind("private".to_owned()))
        );
        assert_eq!(
            Privacy::from_parts("HOT_DESK", None, Some(3), Some(10)),
            Err(PrivacyError::UnknownKind("HOT_DESK".to_owned()))
        );
    }

    #[test]
    fn variant_fields_are_required() {
        assert_eq!(
            Privacy::from_parts("PRIVATE", None, None, None),
            Err(PrivacyError::MissingCapacity)
        );
        assert_eq!(
            Privacy::from_parts("SHARED", None, None, Some(10)),
            Err(PrivacyError::MissingTablesQuantity)
        );
        assert_eq!(
            Privacy::from_parts("SHARED", None, Some(3), None),
            Err(PrivacyError::MissingCapacityPerTable)
        );
    }
}
