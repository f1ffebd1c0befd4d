//! Memberships repository.

use std::sync::RwLock;

use async_trait::async_trait;
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::{
    domain::memberships::{MembershipAcquisition, MembershipId},
    storage::StorageError,
};

/// Membership lookup and persistence.
#[automock]
#[async_trait]
pub trait MembershipsRepository: Send + Sync {
    /// Insert or replace a membership.
    async fn store(&self, membership: MembershipAcquisition) -> Result<(), StorageError>;

    /// Find a membership by id.
    async fn find_by_id(
        &self,
        membership_id: MembershipId,
    ) -> Result<Option<MembershipAcquisition>, StorageError>;

    /// Every membership a renter holds, cancelled ones included.
    async fn find_by_renter(
        &self,
        renter_email: &str,
    ) -> Result<Vec<MembershipAcquisition>, StorageError>;
}

/// Process-local memberships store.
#[derive(Debug, Default)]
pub struct InMemoryMembershipsRepository {
    memberships: RwLock<FxHashMap<MembershipId, MembershipAcquisition>>,
}

impl InMemoryMembershipsRepository {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipsRepository for InMemoryMembershipsRepository {
    async fn store(&self, membership: MembershipAcquisition) -> Result<(), StorageError> {
        let mut memberships = self
            .memberships
            .write()
            .map_err(|_| StorageError::LockPoisoned)?;

        memberships.insert(membership.id(), membership);

        Ok(())
    }

    async fn find_by_id(
        &self,
        membership_id: MembershipId,
    ) -> Result<Option<MembershipAcquisition>, StorageError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;

        Ok(memberships.get(&membership_id).cloned())
    }

    async fn find_by_renter(
        &self,
        renter_email: &str,
    ) -> Result<Vec<MembershipAcquisition>, StorageError> {
        let memberships = self
            .memberships
            .read()
            .map_err(|_| StorageError::LockPoisoned)?;

        Ok(memberships
            .values()
            .filter(|membership| membership.renter_email() == renter_email)
            .cloned()
            .collect())
    }
}
