//! Scenario files for the CLI runner.
//!
//! A scenario is a YAML document with a stream of backoffice events to
//! replay and a list of booking requests to decide against the resulting
//! replica.

use std::{fs, path::Path};

use jiff::Zoned;
use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;

use crate::sync::BackofficeEvent;

/// Scenario loading errors.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    #[error("failed to read scenario file")]
    Io(#[from] std::io::Error),

    /// The scenario file is not valid YAML for this schema.
    #[error("failed to parse scenario file")]
    Parse(#[from] serde_norway::Error),
}

/// A booking request row in a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequestSpec {
    /// Office to book.
    pub office_id: Uuid,

    /// Renter contact email.
    pub renter_email: String,

    /// Number of attendees.
    pub attendees: u32,

    /// Proposed start, any zone (RFC 9557, e.g.
    /// `2026-03-02T10:00:00+01:00[Europe/Madrid]`).
    pub start: Zoned,

    /// Proposed end, any zone.
    pub end: Zoned,
}

/// A replayable scenario.
#[derive(Debug, Deserialize)]
pub struct Scenario {
    /// Backoffice events, applied in order before any request runs.
    #[serde(default)]
    pub events: Vec<BackofficeEvent>,

    /// Booking requests, decided in order.
    #[serde(default)]
    pub requests: Vec<BookingRequestSpec>,
}

/// Load a scenario from a YAML file.
///
/// # Errors
///
/// Returns a [`ScenarioError`] when the file cannot be read or parsed.
pub fn load(path: &Path) -> Result<Scenario, ScenarioError> {
    let raw = fs::read_to_string(path)?;

    Ok(serde_norway::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use testresult::TestResult;

    use super::load;

    const SCENARIO: &str = "\
events:
  - type: office_created
    office_id: 018f33a0-5c6e-7cc4-b7a2-111111111111
    name: Harbour View 3
    price_per_hour_minor: 2500
    currency: EUR
    privacy:
      kind: PRIVATE
      capacity: 6
requests:
  - office_id: 018f33a0-5c6e-7cc4-b7a2-111111111111
    renter_email: renter@example.com
    attendees: 4
    start: 2026-03-02T10:00:00+01:00[+01:00]
    end: 2026-03-02T12:00:00+01:00[+01:00]
";

    #[test]
    fn loads_events_and_requests_from_yaml() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(SCENARIO.as_bytes())?;

        let scenario = load(file.path())?;

        assert_eq!(scenario.events.len(), 1);
        assert_eq!(scenario.requests.len(), 1);

        let request = scenario.requests.first().ok_or("missing request")?;

        assert_eq!(request.attendees, 4);
        assert_eq!(request.start.offset().seconds(), 3600);

        Ok(())
    }

    #[test]
    fn missing_sections_default_to_empty() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"events: []\n")?;

        let scenario = load(file.path())?;

        assert!(scenario.events.is_empty());
        assert!(scenario.requests.is_empty());

        Ok(())
    }

    #[test]
    fn unreadable_files_error() {
        let result = load(std::path::Path::new("/nonexistent/scenario.yaml"));

        assert!(matches!(result, Err(super::ScenarioError::Io(_))));
    }
}
