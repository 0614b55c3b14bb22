//! Resolved acting-user shape handed in by the authentication layer.
//!
//! The core never issues or verifies tokens; it receives an already
//! authenticated user id and resolves this shape through the
//! [`UserDirectory`](crate::ports::UserDirectory) port.

use crate::domain::foundation::{AdminRole, CooperativeId, DistrictId, Permission, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated user with their resolved admin roles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    id: UserId,
    cooperative_id: Option<CooperativeId>,
    district_id: Option<DistrictId>,
    roles: Vec<AdminRole>,
}

impl UserAccount {
    pub fn new(
        id: UserId,
        cooperative_id: Option<CooperativeId>,
        district_id: Option<DistrictId>,
        roles: Vec<AdminRole>,
    ) -> Self {
        Self {
            id,
            cooperative_id,
            district_id,
            roles,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn cooperative_id(&self) -> Option<CooperativeId> {
        self.cooperative_id
    }

    pub fn district_id(&self) -> Option<DistrictId> {
        self.district_id
    }

    pub fn roles(&self) -> &[AdminRole] {
        &self.roles
    }

    /// The tenant this user acts within: the cooperative id, falling back
    /// to the raw district id when no cooperative is set.
    pub fn tenant_id(&self) -> Option<i64> {
        self.cooperative_id
            .map(|c| c.value())
            .or(self.district_id.map(|d| d.value()))
    }

    /// Checks whether any of the user's roles grants the permission.
    pub fn has_permission(&self, permission: Permission) -> bool {
        crate::domain::foundation::any_role_grants(&self.roles, permission)
    }
}
