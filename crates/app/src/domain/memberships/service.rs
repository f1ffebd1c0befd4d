//! Memberships service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use tracing::info;

use crate::domain::memberships::{
    MembershipAcquisition, MembershipId, MembershipsRepository, MembershipsServiceError,
    NewMembership,
};

/// Membership sales and coverage checks.
#[automock]
#[async_trait]
pub trait MembershipsService: Send + Sync {
    /// Sell a membership to a renter.
    async fn purchase(
        &self,
        purchase: NewMembership,
    ) -> Result<MembershipAcquisition, MembershipsServiceError>;

    /// Cancel a membership. Idempotent: cancelling twice stays cancelled.
    async fn cancel(
        &self,
        membership_id: MembershipId,
    ) -> Result<MembershipAcquisition, MembershipsServiceError>;

    /// Whether any of the renter's memberships covers the given date.
    async fn is_active_on(
        &self,
        renter_email: &str,
        date: Date,
    ) -> Result<bool, MembershipsServiceError>;
}

/// Default memberships service over the repository seam.
pub struct DefaultMembershipsService {
    memberships: Arc<dyn MembershipsRepository>,
}

impl DefaultMembershipsService {
    /// Create a service over the given repository.
    #[must_use]
    pub fn new(memberships: Arc<dyn MembershipsRepository>) -> Self {
        Self { memberships }
    }
}

#[async_trait]
impl MembershipsService for DefaultMembershipsService {
    async fn purchase(
        &self,
        purchase: NewMembership,
    ) -> Result<MembershipAcquisition, MembershipsServiceError> {
        let membership = MembershipAcquisition::new(
            MembershipId::new(),
            purchase.renter_email,
            purchase.month,
            purchase.weekday,
        )?;

        self.memberships.store(membership.clone()).await?;

        info!(membership_id = %membership.id(), "membership purchased");

        Ok(membership)
    }

    async fn cancel(
        &self,
        membership_id: MembershipId,
    ) -> Result<MembershipAcquisition, MembershipsServiceError> {
        let membership = self
            .memberships
            .find_by_id(membership_id)
            .await?
            .ok_or(MembershipsServiceError::NotFound)?;

        let cancelled = membership.cancel();

        self.memberships.store(cancelled.clone()).await?;

        info!(membership_id = %membership_id, "membership cancelled");

        Ok(cancelled)
    }

    async fn is_active_on(
        &self,
        renter_email: &str,
        date: Date,
    ) -> Result<bool, MembershipsServiceError> {
        let memberships = self.memberships.find_by_renter(renter_email).await?;

        Ok(memberships.iter().any(|membership| membership.covers(date)))
    }
}
