//! District aggregate module.

mod aggregate;
mod code;
mod product;

pub use aggregate::{District, DistrictChanges, DistrictStatus, NewDistrict};
pub use code::{next_code, parse_code_number};
pub use product::DistrictProduct;
