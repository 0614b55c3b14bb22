//! Contact records and their organization links.

mod contact;
mod organization_contact;

pub use contact::{split_person_name, Contact, ContactChanges, ContactType};
pub use organization_contact::{
    ContactRank, OrganizationContact, ORGANIZATION_TYPE_DISTRICT, ORGANIZATION_TYPE_SCHOOL,
};
