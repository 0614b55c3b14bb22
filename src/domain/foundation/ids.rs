//! Strongly-typed identifier value objects.
//!
//! Every persistent entity in this system is keyed by a database sequence,
//! so ids are positive 64-bit integers. The newtypes below reject
//! non-positive values at construction, which is what lets the rest of the
//! domain assume "has an id" means "was persisted".

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $field:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Creates an id, rejecting non-positive values.
            pub fn new(value: i64) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::not_positive($field, value));
                }
                Ok(Self(value))
            }

            /// Returns the raw integer value.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = ValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a cooperative (top-level tenant).
    CooperativeId,
    "cooperative_id"
);

entity_id!(
    /// Unique identifier for a district.
    DistrictId,
    "district_id"
);

entity_id!(
    /// Unique identifier for a school.
    SchoolId,
    "school_id"
);

entity_id!(
    /// Unique identifier for a contact record.
    ContactId,
    "contact_id"
);

entity_id!(
    /// Unique identifier for an organization-contact link.
    OrganizationContactId,
    "organization_contact_id"
);

entity_id!(
    /// Unique identifier for a district product row.
    DistrictProductId,
    "district_product_id"
);

entity_id!(
    /// Unique identifier for an acting user.
    UserId,
    "user_id"
);
