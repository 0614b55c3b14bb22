//! School aggregate entity.
//!
//! A school belongs to exactly one district; the owning reference is fixed
//! at creation and never updated. Deletion is a soft-delete flag so the
//! row stays visible to the store for auditing.

use crate::domain::foundation::{DistrictId, DomainError, SchoolId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for a school name.
pub const MAX_NAME_LENGTH: usize = 255;

/// Closed enumeration of school types accepted by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolType {
    HighSchool,
    MiddleSchool,
    ElementarySchool,
    Childcare,
}

impl SchoolType {
    /// The display name used in requests and responses.
    pub fn name(&self) -> &'static str {
        match self {
            SchoolType::HighSchool => "High School",
            SchoolType::MiddleSchool => "Middle School",
            SchoolType::ElementarySchool => "Elementary School",
            SchoolType::Childcare => "Childcare",
        }
    }
}

impl fmt::Display for SchoolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchoolType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High School" => Ok(SchoolType::HighSchool),
            "Middle School" => Ok(SchoolType::MiddleSchool),
            "Elementary School" => Ok(SchoolType::ElementarySchool),
            "Childcare" => Ok(SchoolType::Childcare),
            other => Err(ValidationError::invalid_format(
                "school_type",
                format!("'{}' is not a recognized school type", other),
            )),
        }
    }
}

/// Lifecycle status of a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SchoolStatus {
    Active,
    Inactive,
}

impl SchoolStatus {
    /// Human-readable status name shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            SchoolStatus::Active => "Active",
            SchoolStatus::Inactive => "Inactive",
        }
    }
}

/// Input for the school factory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSchool {
    pub name: String,
    pub school_type: SchoolType,
    pub enrollment: Option<u32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub override_district_billing: bool,
}

/// Partial update applied through [`School::update`]. `None` keeps the
/// current value; the owning district is not updatable.
#[derive(Debug, Clone, Default)]
pub struct SchoolChanges {
    pub name: Option<String>,
    pub school_type: Option<SchoolType>,
    pub enrollment: Option<u32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub override_district_billing: Option<bool>,
}

/// School aggregate.
///
/// # Invariants
///
/// - `name` is non-empty and at most [`MAX_NAME_LENGTH`] characters
/// - `district_id` is positive and immutable
/// - `school_type` is one of the closed [`SchoolType`] set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct School {
    id: Option<SchoolId>,
    district_id: DistrictId,
    name: String,
    school_type: SchoolType,
    status: SchoolStatus,
    deleted: bool,
    enrollment: Option<u32>,
    address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    shipping_address: Option<String>,
    shipping_city: Option<String>,
    shipping_state: Option<String>,
    shipping_zip: Option<String>,
    override_district_billing: bool,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl School {
    /// Creates a new unpersisted school tied to a district.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `ValidationFailed` if the name exceeds [`MAX_NAME_LENGTH`]
    pub fn create(
        data: NewSchool,
        district_id: DistrictId,
        status: SchoolStatus,
    ) -> Result<Self, DomainError> {
        Self::validate_name(&data.name)?;

        let now = Timestamp::now();
        Ok(Self {
            id: None,
            district_id,
            name: data.name,
            school_type: data.school_type,
            status,
            deleted: false,
            enrollment: data.enrollment,
            address: data.address,
            city: data.city,
            state: data.state,
            zip: data.zip,
            shipping_address: data.shipping_address,
            shipping_city: data.shipping_city,
            shipping_state: data.shipping_state,
            shipping_zip: data.shipping_zip,
            override_district_billing: data.override_district_billing,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns a copy carrying the store-assigned id.
    pub fn with_id(mut self, id: SchoolId) -> Self {
        self.id = Some(id);
        self
    }

    // Accessors

    pub fn id(&self) -> Option<SchoolId> {
        self.id
    }

    pub fn district_id(&self) -> DistrictId {
        self.district_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn school_type(&self) -> SchoolType {
        self.school_type
    }

    pub fn status(&self) -> SchoolStatus {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == SchoolStatus::Active
    }

    pub fn is_inactive(&self) -> bool {
        self.status == SchoolStatus::Inactive
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn enrollment(&self) -> Option<u32> {
        self.enrollment
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

    pub fn shipping_address(&self) -> Option<&str> {
        self.shipping_address.as_deref()
    }

    pub fn overrides_district_billing(&self) -> bool {
        self.override_district_billing
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Concatenated mailing address, skipping absent components.
    pub fn full_address(&self) -> String {
        join_address(&[
            self.address.as_deref(),
            self.city.as_deref(),
            self.state.as_deref(),
            self.zip.as_deref(),
        ])
    }

    /// Concatenated shipping address, skipping absent components.
    pub fn full_shipping_address(&self) -> String {
        join_address(&[
            self.shipping_address.as_deref(),
            self.shipping_city.as_deref(),
            self.shipping_state.as_deref(),
            self.shipping_zip.as_deref(),
        ])
    }

    // Mutations

    /// Applies a partial update, returning a new instance with a refreshed
    /// `updated_at`.
    pub fn update(&self, changes: SchoolChanges) -> Result<School, DomainError> {
        let mut next = self.clone();
        if let Some(name) = changes.name {
            Self::validate_name(&name)?;
            next.name = name;
        }
        if let Some(school_type) = changes.school_type {
            next.school_type = school_type;
        }
        if changes.enrollment.is_some() {
            next.enrollment = changes.enrollment;
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
        if changes.shipping_address.is_some() {
            next.shipping_address = changes.shipping_address;
        }
        if changes.shipping_city.is_some() {
            next.shipping_city = changes.shipping_city;
        }
        if changes.shipping_state.is_some() {
            next.shipping_state = changes.shipping_state;
        }
        if changes.shipping_zip.is_some() {
            next.shipping_zip = changes.shipping_zip;
        }
        if let Some(flag) = changes.override_district_billing {
            next.override_district_billing = flag;
        }
        next.updated_at = Timestamp::now_after(&self.updated_at);
        Ok(next)
    }

    /// Transitions the school to Active.
    pub fn mark_active(&mut self) {
        self.status = SchoolStatus::Active;
        self.updated_at = Timestamp::now();
    }

    /// Transitions the school to Inactive (archive).
    pub fn mark_inactive(&mut self) {
        self.status = SchoolStatus::Inactive;
        self.updated_at = Timestamp::now();
    }

    /// Logical delete: flips the deleted flag, status untouched.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
        self.updated_at = Timestamp::now();
    }

    fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }
        if name.len() > MAX_NAME_LENGTH {
            return Err(ValidationError::too_long("name", MAX_NAME_LENGTH).into());
        }
        Ok(())
    }
}

fn join_address(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .filter_map(|p| p.map(str::trim))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
