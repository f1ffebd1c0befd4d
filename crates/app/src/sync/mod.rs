//! Backoffice replication.
//!
//! The backoffice module owns offices and their calendars; this side keeps a
//! read replica by applying the events it publishes. Delivery ordering and
//! retry are the producer's concern; applying here is deterministic and
//! idempotent, so replaying any suffix converges.

mod events;
mod projector;

pub use events::{BackofficeEvent, PrivacySpec};
pub use projector::{Projector, ReplicationError};
