//! Closure calendar

use jiff::civil::{Date, Weekday};
use thiserror::Error;

use crate::ids::TypedUuid;

/// Inactivity entry id.
pub type InactivityId = TypedUuid<Inactivity>;

/// Wire tag for recurring weekly closures.
const RECURRING_DAY: &str = "RECURRING_DAY";

/// Wire tag for one-off blackout dates.
const SPECIFIC_DATE: &str = "SPECIFIC_DATE";

/// Errors raised while building an inactivity entry from backoffice input.
///
/// These are configuration failures at office-maintenance time, never
/// booking-time errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InactivityError {
    /// The payload's type tag was neither `RECURRING_DAY` nor `SPECIFIC_DATE`.
    #[error("unknown inactivity kind {0:?}")]
    UnknownKind(String),

    /// A recurring-day payload arrived without a day of week.
    #[error("recurring-day inactivity is missing its day of week")]
    MissingDayOfWeek,

    /// The day-of-week token was not one of MONDAY..SUNDAY.
    #[error("unknown day of week {0:?}")]
    UnknownDayOfWeek(String),

    /// A specific-date payload arrived without a date.
    #[error("specific-date inactivity is missing its date")]
    MissingDate,
}

/// A calendar closure for an office.
///
/// Owned by the office whose inactivity list contains it; replicated from
/// backoffice events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inactivity {
    /// The office closes every week on the given day.
    RecurringDay {
        /// Entry id, as assigned by the backoffice.
        id: InactivityId,
        /// Day of week the office is closed.
        weekday: Weekday,
    },

    /// The office is closed on one specific date.
    SpecificDate {
        /// Entry id, as assigned by the backoffice.
        id: InactivityId,
        /// The blackout date.
        date: Date,
    },
}

impl Inactivity {
    /// Build an entry from the backoffice wire representation.
    ///
    /// # Errors
    ///
    /// Returns an [`InactivityError`] when the kind tag is unknown or the
    /// field the kind requires is absent or unparseable.
    pub fn from_parts(
        id: InactivityId,
        kind: &str,
        day_of_week: Option<&str>,
        date: Option<Date>,
    ) -> Result<Self, InactivityError> {
        match kind {
            RECURRING_DAY => {
                let token = day_of_week.ok_or(InactivityError::MissingDayOfWeek)?;

                Ok(Self::RecurringDay {
                    id,
                    weekday: parse_weekday(token)?,
                })
            }
            SPECIFIC_DATE => {
                let date = date.ok_or(InactivityError::MissingDate)?;

                Ok(Self::SpecificDate { id, date })
            }
            other => Err(InactivityError::UnknownKind(other.to_owned())),
        }
    }

    /// The entry id.
    pub fn id(&self) -> InactivityId {
        match self {
            Self::RecurringDay { id, .. } | Self::SpecificDate { id, .. } => *id,
        }
    }

    /// Whether this entry closes the office on the given canonical date.
    pub fn is_unavailable_at(&self, date: Date) -> bool {
        match self {
            Self::RecurringDay { weekday, .. } => date.weekday() == *weekday,
            Self::SpecificDate { date: closed, .. } => date == *closed,
        }
    }
}

/// Parse a backoffice day-of-week token.
fn parse_weekday(token: &str) -> Result<Weekday, InactivityError> {
    match token {
        "MONDAY" => Ok(Weekday::Monday),
        "TUESDAY" => Ok(Weekday::Tuesday),
        "WEDNESDAY" => Ok(Weekday::Wednesday),
        "THURSDAY" => Ok(Weekday::Thursday),
        "FRIDAY" => Ok(Weekday::Friday),
        "SATURDAY" => Ok(Weekday::Saturday),
        "SUNDAY" => Ok(Weekday::Sunday),
        other => Err(InactivityError::UnknownDayOfWeek(other.to_owned())),
    }
}
