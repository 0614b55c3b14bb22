//! UpdateSchoolHandler - partial school update with upsert-by-email
//! contact handling and idempotent linking.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::school::{load_school_in_district, SchoolAccessGate};
use crate::domain::contact::{
    split_person_name, Contact, ContactChanges, ContactRank, ContactType, OrganizationContact,
    ORGANIZATION_TYPE_SCHOOL,
};
use crate::domain::foundation::{DistrictId, DomainError, Permission, SchoolId, UserId};
use crate::domain::school::{School, SchoolChanges, SchoolType};
use crate::ports::{
    ContactRepository, OrganizationContactRepository, SchoolRepository, TxContext, UnitOfWork,
};

const FAILURE_MESSAGE: &str = "Failed to update school";

/// Raw school update payload. Blank strings mean "leave unchanged".
#[derive(Debug, Clone, Default)]
pub struct SchoolUpdateInput {
    pub name: Option<String>,
    pub school_type: Option<String>,
    pub enrollment: Option<u32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub override_district_billing: Option<bool>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub billing_contact_name: Option<String>,
    pub billing_phone: Option<String>,
    pub billing_email: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Command to update a school.
#[derive(Debug, Clone)]
pub struct UpdateSchoolCommand {
    pub district_id: DistrictId,
    pub school_id: SchoolId,
    pub user_id: UserId,
    pub data: SchoolUpdateInput,
}

/// Handler for school updates.
pub struct UpdateSchoolHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
    contacts: Arc<dyn ContactRepository>,
    organization_contacts: Arc<dyn OrganizationContactRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateSchoolHandler {
    pub fn new(
        gate: SchoolAccessGate,
        schools: Arc<dyn SchoolRepository>,
        contacts: Arc<dyn ContactRepository>,
        organization_contacts: Arc<dyn OrganizationContactRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            gate,
            schools,
            contacts,
            organization_contacts,
            unit_of_work,
        }
    }

    pub async fn handle(&self, cmd: UpdateSchoolCommand) -> Result<School, DomainError> {
        debug!(district_id = %cmd.district_id, school_id = %cmd.school_id, "updating school");

        // Fixed validation order: gate, existence, ownership, deletion,
        // school type. Nothing is written until all of them pass.
        self.gate
            .authorize(cmd.user_id, cmd.district_id, Permission::ManageSchools)
            .await?;
        let school =
            load_school_in_district(self.schools.as_ref(), cmd.district_id, cmd.school_id).await?;

        let school_type = match non_blank(cmd.data.school_type.clone()) {
            Some(raw) => Some(raw.parse::<SchoolType>().map_err(|_| {
                DomainError::bad_request(format!("Invalid school type '{}'", raw))
            })?),
            None => None,
        };

        let updated = school.update(SchoolChanges {
            name: non_blank(cmd.data.name.clone()),
            school_type,
            enrollment: cmd.data.enrollment,
            address: non_blank(cmd.data.address.clone()),
            city: non_blank(cmd.data.city.clone()),
            state: non_blank(cmd.data.state.clone()),
            zip: non_blank(cmd.data.zip.clone()),
            shipping_address: non_blank(cmd.data.shipping_address.clone()),
            shipping_city: non_blank(cmd.data.shipping_city.clone()),
            shipping_state: non_blank(cmd.data.shipping_state.clone()),
            shipping_zip: non_blank(cmd.data.shipping_zip.clone()),
            override_district_billing: cmd.data.override_district_billing,
        })?;

        let tx = self.unit_of_work.begin().await?;
        let result = self
            .persist(tx.context(), cmd.district_id, cmd.school_id, &updated, &cmd.data)
            .await;
        match result {
            Ok(school) => {
                tx.commit()
                    .await
                    .map_err(|err| err.wrap_operation(FAILURE_MESSAGE))?;
                Ok(school)
            }
            Err(err) => {
                warn!(school_id = %cmd.school_id, error = %err, "school update rolled back");
                // Surface the original cause even when rollback itself fails.
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "school update rollback failed");
                }
                Err(err.wrap_operation(FAILURE_MESSAGE))
            }
        }
    }

    async fn persist(
        &self,
        tx: &dyn TxContext,
        district_id: DistrictId,
        school_id: SchoolId,
        updated: &School,
        input: &SchoolUpdateInput,
    ) -> Result<School, DomainError> {
        let persisted = self
            .schools
            .update_in_tx(tx, updated)
            .await?
            .ok_or_else(|| DomainError::bad_request("School update was not applied"))?;

        if let (Some(first), Some(last)) = (
            non_blank(input.contact_first_name.clone()),
            non_blank(input.contact_last_name.clone()),
        ) {
            self.upsert_contact(
                tx,
                district_id,
                school_id,
                ContactType::School,
                ContactRank::PRIMARY,
                first,
                last,
                input.contact_phone.clone(),
                input.contact_email.clone(),
            )
            .await?;
        }

        let billing_applies = input.override_district_billing.unwrap_or(false);
        if billing_applies {
            if let (Some(name), Some(email)) = (
                non_blank(input.billing_contact_name.clone()),
                non_blank(input.billing_email.clone()),
            ) {
                let (first, last) = split_person_name(&name);
                self.upsert_contact(
                    tx,
                    district_id,
                    school_id,
                    ContactType::Billing,
                    ContactRank::SECONDARY,
                    first,
                    last,
                    input.billing_phone.clone(),
                    Some(email),
                )
                .await?;
            }
        }

        Ok(persisted)
    }

    /// Updates the contact matching `email` in place when one exists,
    /// creates one otherwise, then links it at the given rank unless an
    /// identical link is already present.
    #[allow(clippy::too_many_arguments)]
    async fn upsert_contact(
        &self,
        tx: &dyn TxContext,
        district_id: DistrictId,
        school_id: SchoolId,
        contact_type: ContactType,
        rank: ContactRank,
        first: String,
        last: String,
        phone: Option<String>,
        email: Option<String>,
    ) -> Result<(), DomainError> {
        let existing = match email.as_deref() {
            Some(email) => self.contacts.find_by_email(email).await?,
            None => None,
        };

        let contact = match existing {
            Some(found) => {
                let merged = found.update(ContactChanges {
                    first_name: Some(first),
                    last_name: Some(last),
                    phone,
                    email,
                    ..Default::default()
                })?;
                self.contacts.update_in_tx(tx, &merged).await?
            }
            None => {
                let fresh = Contact::create(first, last, contact_type)?
                    .with_phone(phone)
                    .with_email(email);
                self.contacts.create_in_tx(tx, &fresh).await?
            }
        };

        if let Some(contact_id) = contact.id() {
            let already_linked = self
                .organization_contacts
                .find_link(contact_id, school_id.value(), rank)
                .await?
                .is_some();
            if !already_linked {
                let link = OrganizationContact::create(
                    contact_id,
                    school_id.value(),
                    Some(district_id),
                    rank,
                    ORGANIZATION_TYPE_SCHOOL,
                )?;
                self.organization_contacts.create_in_tx(tx, &link).await?;
            }
        }
        Ok(())
    }
}
