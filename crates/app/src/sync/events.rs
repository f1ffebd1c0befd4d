//! Backoffice event payloads.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Raw privacy policy as carried on office events.
///
/// `kind` is `PRIVATE` or `SHARED`, case-sensitive; the variant decides
/// which of the remaining fields must be present. Parsing happens in the
/// engine so an unrecognized policy fails office maintenance, not booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacySpec {
    /// Policy discriminator.
    pub kind: String,

    /// Seats, for private offices.
    #[serde(default)]
    pub capacity: Option<u32>,

    /// Bookable tables, for shared offices.
    #[serde(default)]
    pub tables_quantity: Option<u32>,

    /// Seats per table, for shared offices.
    #[serde(default)]
    pub capacity_per_table: Option<u32>,
}

/// Events published by the backoffice module.
///
/// Office payloads carry the full office description so every event can be
/// applied as an upsert; inactivity payloads carry a `RECURRING_DAY` or
/// `SPECIFIC_DATE` kind with the field that kind requires.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackofficeEvent {
    /// A new office was created.
    OfficeCreated {
        /// Office id.
        office_id: Uuid,
        /// Display name.
        name: String,
        /// Hourly price in minor units.
        price_per_hour_minor: i64,
        /// ISO 4217 currency code.
        currency: String,
        /// Sharing policy.
        privacy: PrivacySpec,
    },

    /// An office's details or policy changed.
    OfficeUpdated {
        /// Office id.
        office_id: Uuid,
        /// Display name.
        name: String,
        /// Hourly price in minor units.
        price_per_hour_minor: i64,
        /// ISO 4217 currency code.
        currency: String,
        /// Sharing policy.
        privacy: PrivacySpec,
    },

    /// An office was deleted. Deletion is soft on this side.
    OfficeDeleted {
        /// Office id.
        office_id: Uuid,
    },

    /// A closure entry was added to an office's calendar.
    InactivityCreated {
        /// Owning office id.
        office_id: Uuid,
        /// Entry id.
        inactivity_id: Uuid,
        /// `RECURRING_DAY` or `SPECIFIC_DATE`.
        kind: String,
        /// Day-of-week token for recurring closures, `MONDAY`..`SUNDAY`.
        #[serde(default)]
        day_of_week: Option<String>,
        /// Date for one-off closures.
        #[serde(default)]
        date: Option<Date>,
    },

    /// A closure entry was removed.
    InactivityDeleted {
        /// Owning office id.
        office_id: Uuid,
        /// Entry id.
        inactivity_id: Uuid,
    },
}
