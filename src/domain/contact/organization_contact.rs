//! Ranked links between contacts and organizations.
//!
//! A link never exists without its contact: both are created inside the
//! same unit of work.

use crate::domain::foundation::{
    ContactId, DistrictId, DomainError, OrganizationContactId, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Organization type id used for district-owned organizations.
pub const ORGANIZATION_TYPE_DISTRICT: i32 = 1;

/// Organization type id used for school-owned organizations.
pub const ORGANIZATION_TYPE_SCHOOL: i32 = 2;

/// Ordering/role discriminator for an organization contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactRank(u32);

impl ContactRank {
    /// Primary contact.
    pub const PRIMARY: ContactRank = ContactRank(1);
    /// Secondary or billing contact.
    pub const SECONDARY: ContactRank = ContactRank(2);

    pub fn new(rank: u32) -> Self {
        Self(rank)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

/// Link binding a contact to an owning organization (district or school).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationContact {
    id: Option<OrganizationContactId>,
    contact_id: ContactId,
    organization_id: i64,
    district_id: Option<DistrictId>,
    rank: ContactRank,
    organization_type_id: i32,
}

impl OrganizationContact {
    /// Creates a new unpersisted link.
    ///
    /// # Errors
    ///
    /// - `NotPositive` if the organization id is not a positive integer
    pub fn create(
        contact_id: ContactId,
        organization_id: i64,
        district_id: Option<DistrictId>,
        rank: ContactRank,
        organization_type_id: i32,
    ) -> Result<Self, DomainError> {
        if organization_id <= 0 {
            return Err(ValidationError::not_positive("organization_id", organization_id).into());
        }
        Ok(Self {
            id: None,
            contact_id,
            organization_id,
            district_id,
            rank,
            organization_type_id,
        })
    }

    /// Returns a copy carrying the store-assigned id.
    pub fn with_id(mut self, id: OrganizationContactId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<OrganizationContactId> {
        self.id
    }

    pub fn contact_id(&self) -> ContactId {
        self.contact_id
    }

    pub fn organization_id(&self) -> i64 {
        self.organization_id
    }

    pub fn district_id(&self) -> Option<DistrictId> {
        self.district_id
    }

    pub fn rank(&self) -> ContactRank {
        self.rank
    }

    pub fn organization_type_id(&self) -> i32 {
        self.organization_type_id
    }
}
