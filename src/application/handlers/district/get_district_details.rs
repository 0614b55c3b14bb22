//! GetDistrictDetailsHandler - read-only assembly of a district with its
//! products, schools, and ranked contacts.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::contact::{Contact, ContactRank, ContactType};
use crate::domain::district::{District, DistrictProduct};
use crate::domain::foundation::{DistrictId, DomainError, ErrorCode};
use crate::domain::school::School;
use crate::ports::{
    DistrictProductRepository, DistrictRepository, LinkedContact, OrganizationContactRepository,
    SchoolRepository,
};

const FAILURE_MESSAGE: &str = "Failed to retrieve district details";

/// Command to fetch the full district detail projection.
#[derive(Debug, Clone, Copy)]
pub struct GetDistrictDetailsCommand {
    pub district_id: DistrictId,
}

/// A school enriched with its status name and primary contact.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolDetail {
    pub school: School,
    pub status: String,
    pub primary_contact: Option<Contact>,
}

/// Full district detail projection.
#[derive(Debug, Clone, Serialize)]
pub struct DistrictDetails {
    pub district: District,
    pub products: Vec<DistrictProduct>,
    pub schools: Vec<SchoolDetail>,
    pub primary_contact: Option<Contact>,
    pub secondary_contact: Option<Contact>,
    pub billing_contact: Option<Contact>,
}

/// Handler for district detail assembly. Pure read, no transaction.
pub struct GetDistrictDetailsHandler {
    districts: Arc<dyn DistrictRepository>,
    schools: Arc<dyn SchoolRepository>,
    products: Arc<dyn DistrictProductRepository>,
    organization_contacts: Arc<dyn OrganizationContactRepository>,
}

impl GetDistrictDetailsHandler {
    pub fn new(
        districts: Arc<dyn DistrictRepository>,
        schools: Arc<dyn SchoolRepository>,
        products: Arc<dyn DistrictProductRepository>,
        organization_contacts: Arc<dyn OrganizationContactRepository>,
    ) -> Self {
        Self {
            districts,
            schools,
            products,
            organization_contacts,
        }
    }

    pub async fn handle(
        &self,
        cmd: GetDistrictDetailsCommand,
    ) -> Result<DistrictDetails, DomainError> {
        debug!(district_id = %cmd.district_id, "assembling district details");
        self.assemble(cmd.district_id)
            .await
            .map_err(|err| err.wrap_operation(FAILURE_MESSAGE))
    }

    async fn assemble(&self, district_id: DistrictId) -> Result<DistrictDetails, DomainError> {
        let district = self
            .districts
            .find_by_id(district_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DistrictNotFound, "District not found")
            })?;

        let products = self.products.find_by_district(district_id).await?;
        let schools = self.schools.find_by_district(district_id).await?;
        let district_links = self
            .organization_contacts
            .find_with_contacts(district_id.value())
            .await?;

        let mut school_details = Vec::with_capacity(schools.len());
        for school in schools {
            let primary_contact = match school.id() {
                Some(school_id) => {
                    let links = self
                        .organization_contacts
                        .find_with_contacts(school_id.value())
                        .await?;
                    pick_contact(&links, ContactRank::PRIMARY, ContactType::School)
                }
                None => None,
            };
            let status = school.status().display_name().to_string();
            school_details.push(SchoolDetail {
                school,
                status,
                primary_contact,
            });
        }

        Ok(DistrictDetails {
            primary_contact: pick_contact(&district_links, ContactRank::PRIMARY, ContactType::Default),
            secondary_contact: pick_contact(
                &district_links,
                ContactRank::SECONDARY,
                ContactType::Default,
            ),
            billing_contact: pick_contact(&district_links, ContactRank::PRIMARY, ContactType::Billing),
            district,
            products,
            schools: school_details,
        })
    }
}

fn pick_contact(
    links: &[LinkedContact],
    rank: ContactRank,
    contact_type: ContactType,
) -> Option<Contact> {
    links
        .iter()
        .find(|lc| lc.link.rank() == rank && lc.contact.contact_type() == contact_type)
        .map(|lc| lc.contact.clone())
}
