//! District aggregate entity.
//!
//! A district belongs to exactly one cooperative and owns schools and a
//! product catalog. Districts are never physically deleted; deletion is a
//! status change plus a soft-delete flag.

use crate::domain::foundation::{
    CooperativeId, DistrictId, DomainError, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a district.
///
/// Numeric codes match the status table the store persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistrictStatus {
    Active,
    Inactive,
    Pending,
}

impl DistrictStatus {
    /// Returns the persisted status code.
    pub fn code(&self) -> i32 {
        match self {
            DistrictStatus::Active => 1,
            DistrictStatus::Inactive => 2,
            DistrictStatus::Pending => 3,
        }
    }

    /// Resolves a persisted status code.
    pub fn from_code(code: i32) -> Result<Self, ValidationError> {
        match code {
            1 => Ok(DistrictStatus::Active),
            2 => Ok(DistrictStatus::Inactive),
            3 => Ok(DistrictStatus::Pending),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown status code {}", other),
            )),
        }
    }

    /// Human-readable status name shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            DistrictStatus::Active => "Active",
            DistrictStatus::Inactive => "Inactive",
            DistrictStatus::Pending => "Pending",
        }
    }
}

/// Input for the district factory: the validated creation request fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDistrict {
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub payment_terms: Option<String>,
}

/// Partial update applied through [`District::update`]. `None` keeps the
/// current value.
#[derive(Debug, Clone, Default)]
pub struct DistrictChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub payment_terms: Option<String>,
}

/// District aggregate.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `status` is one of the closed [`DistrictStatus`] set
/// - `id` is present once the aggregate has been persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    id: Option<DistrictId>,
    cooperative_id: CooperativeId,
    name: String,
    code: Option<String>,
    status: DistrictStatus,
    deleted: bool,
    location: Option<String>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    website: Option<String>,
    payment_terms: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl District {
    /// Creates a new unpersisted district from a creation request.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    pub fn create(
        data: NewDistrict,
        status: DistrictStatus,
        cooperative_id: CooperativeId,
        code: String,
    ) -> Result<Self, DomainError> {
        if data.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        let now = Timestamp::now();
        Ok(Self {
            id: None,
            cooperative_id,
            name: data.name,
            code: Some(code),
            status,
            deleted: false,
            location: data.location,
            address: data.address,
            city: data.city,
            state: data.state,
            zip: data.zip,
            phone: data.phone,
            email: data.email,
            website: data.website,
            payment_terms: data.payment_terms,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy carrying the store-assigned id.
    pub fn with_id(mut self, id: DistrictId) -> Self {
        self.id = Some(id);
        self
    }

    // Accessors

    pub fn id(&self) -> Option<DistrictId> {
        self.id
    }

    pub fn cooperative_id(&self) -> CooperativeId {
        self.cooperative_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn status(&self) -> DistrictStatus {
        self.status
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    pub fn payment_terms(&self) -> Option<&str> {
        self.payment_terms.as_deref()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Listing location: "city, state" when both are present, else the
    /// stored free-text location.
    pub fn display_location(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{}, {}", city, state)),
            _ => self.location.clone(),
        }
    }

    // Mutations

    /// Applies a partial update, returning a new instance with a refreshed
    /// `updated_at`. Fields left `None` keep their current value.
    pub fn update(&self, changes: DistrictChanges) -> Result<District, DomainError> {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            if name.trim().is_empty() {
                return Err(ValidationError::empty_field("name").into());
            }
            next.name = name;
        }
        if changes.location.is_some() {
            next.location = changes.location;
        }
        if changes.address.is_some() {
            next.address = changes.address;
        }
        if changes.city.is_some() {
            next.city = changes.city;
        }
        if changes.state.is_some() {
            next.state = changes.state;
        }
        if changes.zip.is_some() {
            next.zip = changes.zip;
        }
        if changes.phone.is_some() {
            next.phone = changes.phone;
        }
        if changes.email.is_some() {
            next.email = changes.email;
        }
        if changes.website.is_some() {
            next.website = changes.website;
        }
        if changes.payment_terms.is_some() {
            next.payment_terms = changes.payment_terms;
        }
        next.updated_at = Timestamp::now_after(&self.updated_at);
        Ok(next)
    }

    /// Transitions the district to Active.
    pub fn mark_active(&mut self) {
        self.status = DistrictStatus::Active;
        self.updated_at = Timestamp::now();
    }

    /// Transitions the district to Inactive.
    pub fn mark_inactive(&mut self) {
        self.status = DistrictStatus::Inactive;
        self.updated_at = Timestamp::now();
    }

    /// Logical delete: inactive status plus the deleted flag. The row is
    /// never physically removed.
    pub fn mark_deleted(&mut self) {
        self.status = DistrictStatus::Inactive;
        self.deleted = true;
        self.updated_at = Timestamp::now();
    }
}
