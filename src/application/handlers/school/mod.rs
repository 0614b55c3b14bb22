//! School operations, all scoped to a district and an acting user.

mod access;
mod create_school;
mod get_school;
mod get_school_details;
mod list_schools;
mod school_lifecycle;
mod update_school;

pub use access::{load_school_in_district, SchoolAccessGate};
pub use create_school::{CreateSchoolCommand, CreateSchoolHandler, CreateSchoolInput};
pub use get_school::{GetSchoolCommand, GetSchoolHandler};
pub use get_school_details::{GetSchoolDetailsCommand, GetSchoolDetailsHandler, SchoolDetails};
pub use list_schools::{ListSchoolsCommand, ListSchoolsHandler};
pub use school_lifecycle::{
    ActivateSchoolHandler, ArchiveSchoolHandler, DeleteSchoolHandler, SchoolLifecycleCommand,
};
pub use update_school::{SchoolUpdateInput, UpdateSchoolCommand, UpdateSchoolHandler};
