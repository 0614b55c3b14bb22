//! School aggregate module.

mod aggregate;

pub use aggregate::{
    NewSchool, School, SchoolChanges, SchoolStatus, SchoolType, MAX_NAME_LENGTH,
};
