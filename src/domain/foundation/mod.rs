//! Foundation module with shared domain primitives.
//!
//! Value objects, identifiers, errors, and role definitions used across
//! every aggregate. Nothing in here touches a port.

mod errors;
mod ids;
mod roles;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{
    ContactId, CooperativeId, DistrictId, DistrictProductId, OrganizationContactId, SchoolId,
    UserId,
};
pub use roles::{any_role_grants, AdminRole, Permission, UnknownRole};
pub use timestamp::Timestamp;
