//! Memberships service errors.

use thiserror::Error;

use crate::{domain::memberships::MembershipError, storage::StorageError};

/// Failures surfaced by the memberships service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MembershipsServiceError {
    /// The membership id is unknown.
    #[error("membership not found")]
    NotFound,

    /// The purchase payload was invalid.
    #[error("invalid membership")]
    Invalid(#[from] MembershipError),

    /// A repository failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}
