//! Memberships: recurring access purchased per month and weekday.
//!
//! Adjacent to booking, not part of it: orchestration may consult a
//! membership before quoting a renter, but availability itself never does.

mod data;
mod errors;
mod records;
mod repository;
mod service;

pub use data::NewMembership;
pub use errors::MembershipsServiceError;
pub use records::{MembershipAcquisition, MembershipError, MembershipId};
pub use repository::{
    InMemoryMembershipsRepository, MembershipsRepository, MockMembershipsRepository,
};
pub use service::{DefaultMembershipsService, MembershipsService, MockMembershipsService};
