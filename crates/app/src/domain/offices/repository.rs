//! Offices repository.

use std::sync::RwLock;

use async_trait::async_trait;
use hotdesk::office::{Office, OfficeId};
use mockall::automock;
use rustc_hash::FxHashMap;

use crate::storage::StorageError;

/// Office lookup and persistence, as consumed by the booking side.
///
/// `store` is an upsert: replaying the same office value converges to the
/// same replica state. Deletion is soft; a deleted office is stored with
/// its flag set, never removed.
#[automock]
#[async_trait]
pub trait OfficesRepository: Send + Sync {
    /// Find an office by id, soft-deleted ones included.
    async fn find_by_id(&self, office_id: OfficeId) -> Result<Option<Office>, StorageError>;

    /// Insert or replace an office.
    async fn store(&self, office: Office) -> Result<(), StorageError>;
}

/// Process-local offices replica.
#[derive(Debug, Default)]
pub struct InMemoryOfficesRepository {
    offices: RwLock<FxHashMap<OfficeId, Office>>,
}

impl InMemoryOfficesRepository {
    /// Create an empty replica.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OfficesRepository for InMemoryOfficesRepository {
    async fn find_by_id(&self, office_id: OfficeId) -> Result<Option<Office>, StorageError> {
        let offices = self.offices.read().map_err(|_| StorageError::LockPoisoned)?;

        Ok(offices.get(&office_id).cloned())
    }

    async fn store(&self, office: Office) -> Result<(), StorageError> {
        let mut offices = self.offices.write().map_err(|_| StorageError::LockPoisoned)?;

        offices.insert(office.id(), office);

        Ok(())
    }
}
