//! District lifecycle handlers: activate, deactivate, and logical delete.
//!
//! Each loads the district, applies the in-memory transition, and persists
//! through the plain (non-transactional) update call.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::district::District;
use crate::domain::foundation::{DistrictId, DomainError, ErrorCode};
use crate::ports::DistrictRepository;

/// Result message for a lifecycle transition.
#[derive(Debug, Clone, Serialize)]
pub struct DistrictLifecycleResult {
    pub message: String,
}

async fn load(
    districts: &dyn DistrictRepository,
    district_id: DistrictId,
) -> Result<District, DomainError> {
    districts
        .find_by_id(district_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::DistrictNotFound, "District not found"))
}

/// Handler that transitions a district to Active.
pub struct ActivateDistrictHandler {
    districts: Arc<dyn DistrictRepository>,
}

impl ActivateDistrictHandler {
    pub fn new(districts: Arc<dyn DistrictRepository>) -> Self {
        Self { districts }
    }

    pub async fn handle(
        &self,
        district_id: DistrictId,
    ) -> Result<DistrictLifecycleResult, DomainError> {
        debug!(%district_id, "activating district");
        let result = async {
            let mut district = load(self.districts.as_ref(), district_id).await?;
            district.mark_active();
            self.districts.update(&district).await
        }
        .await;

        result
            .map(|_| DistrictLifecycleResult {
                message: "District activated successfully".to_string(),
            })
            .map_err(|err| err.wrap_operation("Failed to activate district"))
    }
}

/// Handler that transitions a district to Inactive.
pub struct DeactivateDistrictHandler {
    districts: Arc<dyn DistrictRepository>,
}

impl DeactivateDistrictHandler {
    pub fn new(districts: Arc<dyn DistrictRepository>) -> Self {
        Self { districts }
    }

    pub async fn handle(
        &self,
        district_id: DistrictId,
    ) -> Result<DistrictLifecycleResult, DomainError> {
        debug!(%district_id, "deactivating district");
        let result = async {
            let mut district = load(self.districts.as_ref(), district_id).await?;
            district.mark_inactive();
            self.districts.update(&district).await
        }
        .await;

        result
            .map(|_| DistrictLifecycleResult {
                message: "District deactivated successfully".to_string(),
            })
            .map_err(|err| err.wrap_operation("Failed to deactivate district"))
    }
}

/// Handler that logically deletes a district. The row is never removed;
/// the deleted flag plus inactive status hide it from listings.
pub struct DeleteDistrictHandler {
    districts: Arc<dyn DistrictRepository>,
}

impl DeleteDistrictHandler {
    pub fn new(districts: Arc<dyn DistrictRepository>) -> Self {
        Self { districts }
    }

    pub async fn handle(
        &self,
        district_id: DistrictId,
    ) -> Result<DistrictLifecycleResult, DomainError> {
        debug!(%district_id, "deleting district");
        let result = async {
            let mut district = load(self.districts.as_ref(), district_id).await?;
            district.mark_deleted();
            self.districts.update(&district).await
        }
        .await;

        result
            .map(|_| DistrictLifecycleResult {
                message: "District deleted successfully".to_string(),
            })
            .map_err(|err| err.wrap_operation("Failed to delete district"))
    }
}
