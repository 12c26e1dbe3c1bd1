//! Zone business logic

use crate::domain::{CreateZoneInput, UpdateZoneInput, Zone, ZoneWithOwner};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy::{self, ZoneAction};
use crate::repository::{UserRepository, ZoneRepository};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use validator::Validate;

/// Response for a successful zone deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteZoneResponse {
    pub message: String,
    pub id: i64,
}

pub struct ZoneService<U: UserRepository, Z: ZoneRepository> {
    user_repo: Arc<U>,
    zone_repo: Arc<Z>,
}

impl<U: UserRepository, Z: ZoneRepository> ZoneService<U, Z> {
    pub fn new(user_repo: Arc<U>, zone_repo: Arc<Z>) -> Self {
        Self { user_repo, zone_repo }
    }

    /// Create a zone owned by the given user.
    ///
    /// The owner must exist and hold the farmer role at creation time.
    pub async fn create_zone(&self, input: CreateZoneInput) -> Result<Zone> {
        input.validate()?;

        let user = self
            .user_repo
            .find_by_id(input.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", input.user_id)))?;

        policy::enforce(user.role, ZoneAction::Create, false)?;

        self.zone_repo
            .create(input.latitude, input.longitude, user.id)
            .await
    }

    /// All zones with their owner projection (owner email omitted)
    pub async fn get_all_zones(&self) -> Result<Vec<ZoneWithOwner>> {
        let zones = self.zone_repo.list().await?;
        Ok(zones
            .into_iter()
            .map(ZoneWithOwner::without_owner_email)
            .collect())
    }

    /// Single zone lookup; the owner projection includes the email
    pub async fn get_zone_by_id(&self, id: i64) -> Result<ZoneWithOwner> {
        self.zone_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Zone {id} not found")))
    }

    /// Annotate a zone. Only supplied fields are overwritten.
    pub async fn update_zone(
        &self,
        id: i64,
        input: UpdateZoneInput,
        requester: &AuthUser,
    ) -> Result<ZoneWithOwner> {
        input.validate()?;

        let zone = self
            .zone_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Zone {id} not found")))?;

        policy::enforce(
            requester.role,
            ZoneAction::Annotate,
            zone.user.id == requester.user_id,
        )?;

        self.zone_repo.update(id, &input).await?;
        self.get_zone_by_id(id).await
    }

    /// Delete a zone. Agronomists may delete any zone, farmers only their own.
    pub async fn delete_zone(&self, id: i64, requester: &AuthUser) -> Result<DeleteZoneResponse> {
        let zone = self
            .zone_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Zone {id} not found")))?;

        policy::enforce(
            requester.role,
            ZoneAction::Delete,
            zone.user.id == requester.user_id,
        )?;

        self.zone_repo.delete(id).await?;

        Ok(DeleteZoneResponse {
            message: "Zone deleted successfully".to_string(),
            id,
        })
    }
}
