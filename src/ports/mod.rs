//! Ports: contracts between the application core and infrastructure.
//!
//! Every port is an `async_trait` object-safe trait implemented by the
//! excluded storage/auth adapters. Handlers depend on `Arc<dyn Port>`.

mod contact_repository;
mod district_product_repository;
mod district_repository;
mod organization_contact_repository;
mod school_repository;
mod unit_of_work;
mod user_directory;

pub use contact_repository::ContactRepository;
pub use district_product_repository::DistrictProductRepository;
pub use district_repository::DistrictRepository;
pub use organization_contact_repository::{LinkedContact, OrganizationContactRepository};
pub use school_repository::SchoolRepository;
pub use unit_of_work::{ActiveTransaction, TxContext, UnitOfWork};
pub use user_directory::UserDirectory;
