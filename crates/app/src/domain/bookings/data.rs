//! Booking request payloads.

use hotdesk::office::OfficeId;
use jiff::Zoned;

/// A renter's proposal to book an office.
///
/// Timestamps keep whatever zone the client supplied; the engine normalizes
/// them for comparison and retains these values for display.
#[derive(Debug, Clone)]
pub struct NewBookingRequest {
    /// Office to book.
    pub office_id: OfficeId,

    /// Renter contact email.
    pub renter_email: String,

    /// Number of attendees.
    pub attendees: u32,

    /// Proposed start, any zone.
    pub start: Zoned,

    /// Proposed end, any zone.
    pub end: Zoned,
}
