//! Backoffice event projector.

use std::sync::Arc;

use hotdesk::{
    inactivity::{Inactivity, InactivityError},
    office::{Office, OfficeId},
    privacy::{Privacy, PrivacyError},
};
use rusty_money::{Money, iso};
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    domain::offices::OfficesRepository,
    storage::StorageError,
    sync::events::{BackofficeEvent, PrivacySpec},
};

/// Failures while applying a backoffice event to the replica.
///
/// Configuration problems (unknown privacy kind, unknown currency) are
/// surfaced rather than defaulted; the producer retries or a human fixes the
/// payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplicationError {
    /// The event's currency code is not a known ISO 4217 code.
    #[error("unknown currency code {0:?}")]
    UnknownCurrency(String),

    /// The privacy payload could not be parsed.
    #[error("invalid privacy payload")]
    Privacy(#[from] PrivacyError),

    /// The inactivity payload could not be parsed.
    #[error("invalid inactivity payload")]
    Inactivity(#[from] InactivityError),

    /// An inactivity event referenced an office the replica has never seen.
    #[error("office {0} is not in the replica")]
    UnknownOffice(OfficeId),

    /// A repository failed.
    #[error("storage error")]
    Storage(#[from] StorageError),
}

/// Applies backoffice events to the offices replica.
///
/// Application is deterministic and idempotent per event: upserts for office
/// creation and update, soft delete, converging add/remove for calendar
/// entries. Replaying a suffix of the stream reaches the same state.
pub struct Projector {
    offices: Arc<dyn OfficesRepository>,
}

impl Projector {
    /// Create a projector writing to the given replica.
    #[must_use]
    pub fn new(offices: Arc<dyn OfficesRepository>) -> Self {
        Self { offices }
    }

    /// Apply one event.
    ///
    /// # Errors
    ///
    /// Returns a [`ReplicationError`] when the payload fails to parse, when
    /// an inactivity event references an unknown office, or when the replica
    /// store fails.
    pub async fn apply(&self, event: BackofficeEvent) -> Result<(), ReplicationError> {
        match event {
            BackofficeEvent::OfficeCreated {
                office_id,
                name,
                price_per_hour_minor,
                currency,
                privacy,
            } => {
                self.upsert_office(
                    OfficeId::from_uuid(office_id),
                    name,
                    price_per_hour_minor,
                    &currency,
                    &privacy,
                    false,
                )
                .await
            }
            BackofficeEvent::OfficeUpdated {
                office_id,
                name,
                price_per_hour_minor,
                currency,
                privacy,
            } => {
                self.upsert_office(
                    OfficeId::from_uuid(office_id),
                    name,
                    price_per_hour_minor,
                    &currency,
                    &privacy,
                    true,
                )
                .await
            }
            BackofficeEvent::OfficeDeleted { office_id } => {
                self.delete_office(OfficeId::from_uuid(office_id)).await
            }
            BackofficeEvent::InactivityCreated {
                office_id,
                inactivity_id,
                kind,
                day_of_week,
                date,
            } => {
                let entry = Inactivity::from_parts(
                    inactivity_id.into(),
                    &kind,
                    day_of_week.as_deref(),
                    date,
                )?;

                let office_id = OfficeId::from_uuid(office_id);
                let office = self.require_office(office_id).await?;

                self.offices.store(office.with_inactivity(entry)).await?;

                debug!(%office_id, %inactivity_id, "inactivity added");

                Ok(())
            }
            BackofficeEvent::InactivityDeleted {
                office_id,
                inactivity_id,
            } => {
                let office_id = OfficeId::from_uuid(office_id);
                let office = self.require_office(office_id).await?;

                self.offices
                    .store(office.without_inactivity(inactivity_id.into()))
                    .await?;

                debug!(%office_id, %inactivity_id, "inactivity removed");

                Ok(())
            }
        }
    }

    /// Apply a batch of events in order, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`ReplicationError`] encountered.
    pub async fn apply_all(
        &self,
        events: impl IntoIterator<Item = BackofficeEvent> + Send,
    ) -> Result<(), ReplicationError> {
        for event in events {
            self.apply(event).await?;
        }

        Ok(())
    }

    async fn upsert_office(
        &self,
        office_id: OfficeId,
        name: String,
        price_per_hour_minor: i64,
        currency: &str,
        privacy: &PrivacySpec,
        is_update: bool,
    ) -> Result<(), ReplicationError> {
        let currency = iso::find(currency)
            .ok_or_else(|| ReplicationError::UnknownCurrency(currency.to_owned()))?;

        let price = Money::from_minor(price_per_hour_minor, currency);

        let privacy = Privacy::from_parts(
            &privacy.kind,
            privacy.capacity,
            privacy.tables_quantity,
            privacy.capacity_per_table,
        )?;

        let existing = self.offices.find_by_id(office_id).await?;

        let office = match existing {
            // Keep the calendar and deletion flag; only details and policy
            // come from office events.
            Some(current) => current.with_details(name, price).with_privacy(privacy),
            None => {
                if is_update {
                    warn!(%office_id, "update for unknown office, applying as creation");
                }

                Office::new(office_id, name, price, privacy)
            }
        };

        self.offices.store(office).await?;

        debug!(%office_id, "office upserted");

        Ok(())
    }

    async fn delete_office(&self, office_id: OfficeId) -> Result<(), ReplicationError> {
        match self.offices.find_by_id(office_id).await? {
            Some(office) => {
                self.offices.store(office.mark_deleted()).await?;

                debug!(%office_id, "office soft-deleted");
            }
            None => {
                warn!(%office_id, "delete for unknown office ignored");
            }
        }

        Ok(())
    }

    async fn require_office(&self, office_id: OfficeId) -> Result<Office, ReplicationError> {
        self.offices
            .find_by_id(office_id)
            .await?
            .ok_or(ReplicationError::UnknownOffice(office_id))
    }
}
