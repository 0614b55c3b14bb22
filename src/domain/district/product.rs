//! District product rows.
//!
//! One row per product a district has opted into. The catalog is replaced
//! wholesale on update, never diffed, so rows carry no mutable state.

use crate::domain::foundation::{
    DistrictId, DistrictProductId, DomainError, Timestamp, ValidationError,
};
use serde::{Deserialize, Serialize};

/// A single product in a district's catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictProduct {
    id: Option<DistrictProductId>,
    district_id: DistrictId,
    product_name: String,
    created_at: Timestamp,
}

impl DistrictProduct {
    /// Creates a new unpersisted product row.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the product name is blank
    pub fn create(district_id: DistrictId, product_name: String) -> Result<Self, DomainError> {
        if product_name.trim().is_empty() {
            return Err(ValidationError::empty_field("product_name").into());
        }
        Ok(Self {
            id: None,
            district_id,
            product_name,
            created_at: Timestamp::now(),
        })
    }

    /// Returns a copy carrying the store-assigned id.
    pub fn with_id(mut self, id: DistrictProductId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<DistrictProductId> {
        self.id
    }

    pub fn district_id(&self) -> DistrictId {
        self.district_id
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
