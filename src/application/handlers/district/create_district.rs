//! CreateDistrictHandler - creates a district with its secondary/billing
//! contacts and product catalog in one transaction.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::contact::{
    split_person_name, Contact, ContactRank, ContactType, OrganizationContact,
    ORGANIZATION_TYPE_DISTRICT,
};
use crate::domain::district::{next_code, District, DistrictProduct, DistrictStatus, NewDistrict};
use crate::domain::foundation::{CooperativeId, DomainError};
use crate::ports::{
    ContactRepository, DistrictProductRepository, DistrictRepository,
    OrganizationContactRepository, TxContext, UnitOfWork,
};

const FAILURE_MESSAGE: &str = "Failed to create district";

/// A district-level contact as it arrives on the creation request: a
/// free-text name plus reachability fields.
#[derive(Debug, Clone, Default)]
pub struct DistrictContactInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Billing contact input; additionally carries the billing address.
#[derive(Debug, Clone, Default)]
pub struct BillingContactInput {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
}

impl DistrictContactInput {
    /// A contact only materializes when it can actually be reached.
    fn is_reachable(&self) -> bool {
        self.phone.is_some() || self.email.is_some()
    }
}

impl BillingContactInput {
    fn is_reachable(&self) -> bool {
        self.phone.is_some() || self.email.is_some()
    }
}

/// Command to create a new district under a cooperative.
#[derive(Debug, Clone)]
pub struct CreateDistrictCommand {
    pub district: NewDistrict,
    pub status: DistrictStatus,
    pub cooperative_id: CooperativeId,
    pub secondary_contact: Option<DistrictContactInput>,
    pub billing_contact: Option<BillingContactInput>,
    pub products: Vec<String>,
}

/// Handler for district creation.
pub struct CreateDistrictHandler {
    districts: Arc<dyn DistrictRepository>,
    contacts: Arc<dyn ContactRepository>,
    organization_contacts: Arc<dyn OrganizationContactRepository>,
    products: Arc<dyn DistrictProductRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateDistrictHandler {
    pub fn new(
        districts: Arc<dyn DistrictRepository>,
        contacts: Arc<dyn ContactRepository>,
        organization_contacts: Arc<dyn OrganizationContactRepository>,
        products: Arc<dyn DistrictProductRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            districts,
            contacts,
            organization_contacts,
            products,
            unit_of_work,
        }
    }

    pub async fn handle(&self, cmd: CreateDistrictCommand) -> Result<District, DomainError> {
        debug!(cooperative_id = %cmd.cooperative_id, name = %cmd.district.name, "creating district");

        // The code sequence is read outside the transaction; the write
        // itself is what must be atomic.
        let last_code = self.districts.find_last_code().await?;
        let code = next_code(last_code.as_deref());

        let tx = self.unit_of_work.begin().await?;
        let result = self.create_all(tx.context(), &cmd, code).await;
        match result {
            Ok(district) => {
                tx.commit()
                    .await
                    .map_err(|err| err.wrap_operation(FAILURE_MESSAGE))?;
                Ok(district)
            }
            Err(err) => {
                warn!(error = %err, "district creation rolled back");
                // Surface the original cause even when rollback itself fails.
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "district creation rollback failed");
                }
                Err(err.wrap_operation(FAILURE_MESSAGE))
            }
        }
    }

    async fn create_all(
        &self,
        tx: &dyn TxContext,
        cmd: &CreateDistrictCommand,
        code: String,
    ) -> Result<District, DomainError> {
        let district = District::create(
            cmd.district.clone(),
            cmd.status,
            cmd.cooperative_id,
            code,
        )?;
        let persisted = self.districts.create_in_tx(tx, &district).await?;
        let district_id = persisted
            .id()
            .ok_or_else(|| DomainError::bad_request(FAILURE_MESSAGE))?;

        if let Some(secondary) = cmd.secondary_contact.as_ref().filter(|c| c.is_reachable()) {
            let (first, last) = split_person_name(&secondary.name);
            let contact = Contact::create(first, last, ContactType::Default)?
                .with_phone(secondary.phone.clone())
                .with_email(secondary.email.clone());
            let created = self.contacts.create_in_tx(tx, &contact).await?;
            if let Some(contact_id) = created.id() {
                let link = OrganizationContact::create(
                    contact_id,
                    district_id.value(),
                    Some(district_id),
                    ContactRank::SECONDARY,
                    ORGANIZATION_TYPE_DISTRICT,
                )?;
                self.organization_contacts.create_in_tx(tx, &link).await?;
            }
        }

        if let Some(billing) = cmd.billing_contact.as_ref().filter(|c| c.is_reachable()) {
            let (first, last) = split_person_name(&billing.name);
            let contact = Contact::create(first, last, ContactType::Billing)?
                .with_phone(billing.phone.clone())
                .with_email(billing.email.clone())
                .with_address(
                    billing.address.clone(),
                    billing.city.clone(),
                    billing.state.clone(),
                    billing.zip.clone(),
                );
            let created = self.contacts.create_in_tx(tx, &contact).await?;
            if let Some(contact_id) = created.id() {
                let link = OrganizationContact::create(
                    contact_id,
                    district_id.value(),
                    Some(district_id),
                    ContactRank::PRIMARY,
                    ORGANIZATION_TYPE_DISTRICT,
                )?;
                self.organization_contacts.create_in_tx(tx, &link).await?;
            }
        }

        for name in &cmd.products {
            let product = DistrictProduct::create(district_id, name.clone())?;
            self.products.create_in_tx(tx, &product).await?;
        }

        Ok(persisted)
    }
}
