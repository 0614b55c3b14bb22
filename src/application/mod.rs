//! Application layer - commands and their handlers.
//!
//! Handlers orchestrate domain operations through the ports; writes that
//! touch more than one table go through the unit of work.

pub mod handlers;

pub use handlers::district::{
    ActivateDistrictHandler, CreateDistrictCommand, CreateDistrictHandler,
    DeactivateDistrictHandler, DeleteDistrictHandler, DistrictLifecycleResult,
    GetDistrictDetailsHandler, ListDistrictsHandler, UpdateDistrictCommand, UpdateDistrictHandler,
};
pub use handlers::school::{
    ActivateSchoolHandler, ArchiveSchoolHandler, CreateSchoolCommand, CreateSchoolHandler,
    DeleteSchoolHandler, GetSchoolDetailsHandler, GetSchoolHandler, ListSchoolsHandler,
    SchoolAccessGate, SchoolLifecycleCommand, UpdateSchoolCommand, UpdateSchoolHandler,
};
