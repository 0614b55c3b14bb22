//! Shared authorization gate for school operations.
//!
//! Every school operation runs the same chain before touching data:
//! resolve the acting user, check the required permission against the
//! user's role set, resolve the target district, and require the district
//! to sit inside the user's tenant.

use std::sync::Arc;

use tracing::warn;

use crate::domain::district::District;
use crate::domain::foundation::{DistrictId, DomainError, ErrorCode, Permission, SchoolId, UserId};
use crate::domain::school::School;
use crate::domain::user::UserAccount;
use crate::ports::{DistrictRepository, SchoolRepository, UserDirectory};

/// Authorization gate shared by every school handler.
pub struct SchoolAccessGate {
    users: Arc<dyn UserDirectory>,
    districts: Arc<dyn DistrictRepository>,
}

impl SchoolAccessGate {
    pub fn new(users: Arc<dyn UserDirectory>, districts: Arc<dyn DistrictRepository>) -> Self {
        Self { users, districts }
    }

    /// Runs the gate.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the acting user is absent
    /// - `Forbidden` if no role grants the permission
    /// - `DistrictNotFound` if the target district is absent
    /// - `Forbidden` if the district belongs to another tenant
    pub async fn authorize(
        &self,
        user_id: UserId,
        district_id: DistrictId,
        permission: Permission,
    ) -> Result<(UserAccount, District), DomainError> {
        let user = self
            .users
            .get_user_details(user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        if !user.has_permission(permission) {
            warn!(%user_id, ?permission, "permission denied");
            return Err(DomainError::forbidden(
                "User does not have permission to perform this action",
            ));
        }

        let district = self
            .districts
            .find_by_id(district_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DistrictNotFound, "District not found")
            })?;

        if user.tenant_id() != Some(district.cooperative_id().value()) {
            warn!(%user_id, %district_id, "tenant boundary violation");
            return Err(DomainError::forbidden(
                "User does not belong to this district's cooperative",
            ));
        }

        Ok((user, district))
    }
}

/// Loads a school and validates it against the target district.
///
/// # Errors
///
/// - `SchoolNotFound` if absent or already soft-deleted
/// - `Forbidden` if the school belongs to a different district
pub async fn load_school_in_district(
    schools: &dyn SchoolRepository,
    district_id: DistrictId,
    school_id: SchoolId,
) -> Result<School, DomainError> {
    let school = schools
        .find_by_id(school_id)
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::SchoolNotFound, "School not found"))?;

    if school.district_id() != district_id {
        return Err(DomainError::forbidden(
            "School does not belong to this district",
        ));
    }
    if school.is_deleted() {
        return Err(DomainError::new(ErrorCode::SchoolNotFound, "School not found"));
    }
    Ok(school)
}
