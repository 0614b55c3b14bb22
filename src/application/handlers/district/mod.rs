//! District service operations.

mod create_district;
mod district_lifecycle;
mod get_district_details;
mod list_districts;
mod update_district;

pub use create_district::{
    BillingContactInput, CreateDistrictCommand, CreateDistrictHandler, DistrictContactInput,
};
pub use district_lifecycle::{
    ActivateDistrictHandler, DeactivateDistrictHandler, DeleteDistrictHandler,
    DistrictLifecycleResult,
};
pub use get_district_details::{
    DistrictDetails, GetDistrictDetailsCommand, GetDistrictDetailsHandler, SchoolDetail,
};
pub use list_districts::{DistrictSummary, ListDistrictsCommand, ListDistrictsHandler};
pub use update_district::{
    DistrictUpdateInput, UpdateDistrictCommand, UpdateDistrictHandler, UpdateDistrictResult,
};
