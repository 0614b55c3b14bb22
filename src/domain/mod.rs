//! Domain layer: aggregates, value objects, and invariants.

pub mod contact;
pub mod district;
pub mod foundation;
pub mod school;
pub mod user;
