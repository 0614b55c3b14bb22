//! GetSchoolDetailsHandler - school profile with its linked contacts and
//! the owning district.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::application::handlers::school::{load_school_in_district, SchoolAccessGate};
use crate::domain::contact::{Contact, ContactRank};
use crate::domain::district::District;
use crate::domain::foundation::{DistrictId, DomainError, Permission, SchoolId, UserId};
use crate::domain::school::School;
use crate::ports::{LinkedContact, OrganizationContactRepository, SchoolRepository};

/// Command to fetch the full school profile.
#[derive(Debug, Clone, Copy)]
pub struct GetSchoolDetailsCommand {
    pub district_id: DistrictId,
    pub school_id: SchoolId,
    pub user_id: UserId,
}

/// Full school profile.
#[derive(Debug, Clone, Serialize)]
pub struct SchoolDetails {
    pub school: School,
    pub district: District,
    pub primary_contact: Option<Contact>,
    pub billing_contact: Option<Contact>,
}

/// Handler for the detailed school read.
pub struct GetSchoolDetailsHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
    organization_contacts: Arc<dyn OrganizationContactRepository>,
}

impl GetSchoolDetailsHandler {
    pub fn new(
        gate: SchoolAccessGate,
        schools: Arc<dyn SchoolRepository>,
        organization_contacts: Arc<dyn OrganizationContactRepository>,
    ) -> Self {
        Self {
            gate,
            schools,
            organization_contacts,
        }
    }

    pub async fn handle(&self, cmd: GetSchoolDetailsCommand) -> Result<SchoolDetails, DomainError> {
        debug!(district_id = %cmd.district_id, school_id = %cmd.school_id, "fetching school details");

        let (_user, district) = self
            .gate
            .authorize(cmd.user_id, cmd.district_id, Permission::ViewSchools)
            .await?;
        let school =
            load_school_in_district(self.schools.as_ref(), cmd.district_id, cmd.school_id).await?;

        self.assemble(school, district)
            .await
            .map_err(|err| err.wrap_operation("Failed to retrieve school details"))
    }

    async fn assemble(
        &self,
        school: School,
        district: District,
    ) -> Result<SchoolDetails, DomainError> {
        let linked = match school.id() {
            Some(id) => self.organization_contacts.find_with_contacts(id.value()).await?,
            None => Vec::new(),
        };

        // Rank alone decides the slot here; a school links at most one
        // contact per rank.
        Ok(SchoolDetails {
            primary_contact: pick_by_rank(&linked, ContactRank::PRIMARY),
            billing_contact: pick_by_rank(&linked, ContactRank::SECONDARY),
            school,
            district,
        })
    }
}

fn pick_by_rank(linked: &[LinkedContact], rank: ContactRank) -> Option<Contact> {
    linked
        .iter()
        .find(|lc| lc.link.rank() == rank)
        .map(|lc| lc.contact.clone())
}
