//! CreateSchoolHandler - creates a school with its optional primary and
//! billing contacts in one transaction.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::school::SchoolAccessGate;
use crate::domain::contact::{
    split_person_name, Contact, ContactRank, ContactType, OrganizationContact,
    ORGANIZATION_TYPE_SCHOOL,
};
use crate::domain::foundation::{DistrictId, DomainError, Permission, UserId};
use crate::domain::school::{NewSchool, School, SchoolStatus, SchoolType};
use crate::ports::{
    ContactRepository, OrganizationContactRepository, SchoolRepository, TxContext, UnitOfWork,
};

const FAILURE_MESSAGE: &str = "Failed to create school";

/// School creation payload. `school_type` arrives as the external display
/// string and is validated against the closed enumeration.
#[derive(Debug, Clone, Default)]
pub struct CreateSchoolInput {
    pub name: String,
    pub school_type: String,
    pub enrollment: Option<u32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub override_district_billing: bool,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub billing_contact_name: Option<String>,
    pub billing_phone: Option<String>,
    pub billing_email: Option<String>,
}

/// Command to create a school in a district.
#[derive(Debug, Clone)]
pub struct CreateSchoolCommand {
    pub district_id: DistrictId,
    pub user_id: UserId,
    pub school: CreateSchoolInput,
}

/// Handler for school creation.
pub struct CreateSchoolHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
    contacts: Arc<dyn ContactRepository>,
    organization_contacts: Arc<dyn OrganizationContactRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateSchoolHandler {
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

    pub async fn handle(&self, cmd: CreateSchoolCommand) -> Result<School, DomainError> {
        debug!(district_id = %cmd.district_id, name = %cmd.school.name, "creating school");

        self.gate
            .authorize(cmd.user_id, cmd.district_id, Permission::ManageSchools)
            .await?;

        let school_type: SchoolType = cmd.school.school_type.parse().map_err(|_| {
            DomainError::bad_request(format!(
                "Invalid school type '{}'",
                cmd.school.school_type
            ))
        })?;

        let tx = self.unit_of_work.begin().await?;
        let result = self
            .create_all(tx.context(), cmd.district_id, &cmd.school, school_type)
            .await;
        match result {
            Ok(school) => {
                tx.commit()
                    .await
                    .map_err(|err| err.wrap_operation(FAILURE_MESSAGE))?;
                Ok(school)
            }
            Err(err) => {
                warn!(district_id = %cmd.district_id, error = %err, "school creation rolled back");
                // Surface the original cause even when rollback itself fails.
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "school creation rollback failed");
                }
                Err(err.wrap_operation(FAILURE_MESSAGE))
            }
        }
    }

    async fn create_all(
        &self,
        tx: &dyn TxContext,
        district_id: DistrictId,
        input: &CreateSchoolInput,
        school_type: SchoolType,
    ) -> Result<School, DomainError> {
        let school = School::create(
            NewSchool {
                name: input.name.clone(),
                school_type,
                enrollment: input.enrollment,
                address: input.address.clone(),
                city: input.city.clone(),
                state: input.state.clone(),
                zip: input.zip.clone(),
                shipping_address: input.shipping_address.clone(),
                shipping_city: input.shipping_city.clone(),
                shipping_state: input.shipping_state.clone(),
                shipping_zip: input.shipping_zip.clone(),
                override_district_billing: input.override_district_billing,
            },
            district_id,
            SchoolStatus::Active,
        )?;
        let persisted = self.schools.create_in_tx(tx, &school).await?;
        let school_id = persisted
            .id()
            .ok_or_else(|| DomainError::bad_request(FAILURE_MESSAGE))?;

        if let (Some(first), Some(last)) = (
            input.contact_first_name.as_deref().filter(|s| !s.trim().is_empty()),
            input.contact_last_name.as_deref().filter(|s| !s.trim().is_empty()),
        ) {
            let contact = Contact::create(first.to_string(), last.to_string(), ContactType::School)?
                .with_phone(input.contact_phone.clone())
                .with_email(input.contact_email.clone());
            let created = self.contacts.create_in_tx(tx, &contact).await?;
            if let Some(contact_id) = created.id() {
                let link = OrganizationContact::create(
                    contact_id,
                    school_id.value(),
                    Some(district_id),
                    ContactRank::PRIMARY,
                    ORGANIZATION_TYPE_SCHOOL,
                )?;
                self.organization_contacts.create_in_tx(tx, &link).await?;
            }
        }

        if input.override_district_billing {
            if let Some(name) = input
                .billing_contact_name
                .as_deref()
                .filter(|s| !s.trim().is_empty())
            {
                let (first, last) = split_person_name(name);
                let contact = Contact::create(first, last, ContactType::Billing)?
                    .with_phone(input.billing_phone.clone())
                    .with_email(input.billing_email.clone());
                let created = self.contacts.create_in_tx(tx, &contact).await?;
                if let Some(contact_id) = created.id() {
                    let link = OrganizationContact::create(
                        contact_id,
                        school_id.value(),
                        Some(district_id),
                        ContactRank::SECONDARY,
                        ORGANIZATION_TYPE_SCHOOL,
                    )?;
                    self.organization_contacts.create_in_tx(tx, &link).await?;
                }
            }
        }

        Ok(persisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mocks::{
        MockContactRepo, MockDistrictRepo, MockOrgContactRepo, MockSchoolRepo, MockUnitOfWork,
        MockUserDirectory,
    };
    use crate::domain::district::{District, DistrictStatus, NewDistrict};
    use crate::domain::foundation::{AdminRole, CooperativeId, ErrorCode};
    use crate::domain::user::UserAccount;

    fn admin_user(id: i64, coop: i64) -> UserAccount {
        UserAccount::new(
            UserId::new(id).unwrap(),
            Some(CooperativeId::new(coop).unwrap()),
            None,
            vec![AdminRole::DistrictAdmin],
        )
    }

    fn viewer_user(id: i64, coop: i64) -> UserAccount {
        UserAccount::new(
            UserId::new(id).unwrap(),
            Some(CooperativeId::new(coop).unwrap()),
            None,
            vec![AdminRole::Viewer],
        )
    }

    fn district(id: i64, coop: i64) -> District {
        District::create(
            NewDistrict {
                name: "Northview District".to_string(),
                ..Default::default()
            },
            DistrictStatus::Active,
            CooperativeId::new(coop).unwrap(),
            "district-1".to_string(),
        )
        .unwrap()
        .with_id(DistrictId::new(id).unwrap())
    }

    struct Fixture {
        schools: Arc<MockSchoolRepo>,
        contacts: Arc<MockContactRepo>,
        links: Arc<MockOrgContactRepo>,
        uow: Arc<MockUnitOfWork>,
        handler: CreateSchoolHandler,
    }

    fn fixture(users: MockUserDirectory, schools: MockSchoolRepo) -> Fixture {
        fixture_with_uow(users, schools, MockUnitOfWork::new())
    }

    fn fixture_with_uow(
        users: MockUserDirectory,
        schools: MockSchoolRepo,
        uow: MockUnitOfWork,
    ) -> Fixture {
        let gate = SchoolAccessGate::new(
            Arc::new(users),
            Arc::new(MockDistrictRepo::new().with_district(district(1, 1))),
        );
        let schools = Arc::new(schools);
        let contacts = Arc::new(MockContactRepo::new());
        let links = Arc::new(MockOrgContactRepo::new());
        let uow = Arc::new(uow);
        let handler = CreateSchoolHandler::new(
            gate,
            schools.clone(),
            contacts.clone(),
            links.clone(),
            uow.clone(),
        );
        Fixture {
            schools,
            contacts,
            links,
            uow,
            handler,
        }
    }

    fn command(school_type: &str) -> CreateSchoolCommand {
        CreateSchoolCommand {
            district_id: DistrictId::new(1).unwrap(),
            user_id: UserId::new(1).unwrap(),
            school: CreateSchoolInput {
                name: "Northview High".to_string(),
                school_type: school_type.to_string(),
                ..Default::default()
            },
        }
    }

    #[tokio::test]
    async fn creates_school_for_authorized_admin() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let school = f.handler.handle(command("High School")).await.unwrap();
        assert_eq!(school.name(), "Northview High");
        assert!(school.id().is_some());
        assert_eq!(f.uow.commit_count(), 1);
    }

    #[tokio::test]
    async fn commit_failure_surfaces_as_operation_failure() {
        let f = fixture_with_uow(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
            MockUnitOfWork::failing_commit(),
        );
        let err = f.handler.handle(command("High School")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert_eq!(err.message, "Failed to create school: Simulated commit failure");
    }

    #[tokio::test]
    async fn viewer_is_forbidden() {
        let f = fixture(
            MockUserDirectory::new().with_user(viewer_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let err = f.handler.handle(command("High School")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert!(f.schools.created().is_empty());
    }

    #[tokio::test]
    async fn invalid_school_type_is_bad_request_before_any_write() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let err = f.handler.handle(command("Trade School")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert!(f.schools.created().is_empty());
        assert_eq!(f.uow.commit_count(), 0);
    }

    #[tokio::test]
    async fn contact_name_pair_creates_linked_primary_contact() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let mut cmd = command("Middle School");
        cmd.school.contact_first_name = Some("Dana".to_string());
        cmd.school.contact_last_name = Some("Okafor".to_string());
        cmd.school.contact_email = Some("dokafor@northview.example".to_string());

        let school = f.handler.handle(cmd).await.unwrap();

        let contacts = f.contacts.created();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].contact_type(), ContactType::School);

        let links = f.links.created();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rank(), ContactRank::PRIMARY);
        assert_eq!(links[0].organization_id(), school.id().unwrap().value());
    }

    #[tokio::test]
    async fn half_a_name_pair_creates_no_contact() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let mut cmd = command("Middle School");
        cmd.school.contact_first_name = Some("Dana".to_string());

        f.handler.handle(cmd).await.unwrap();
        assert!(f.contacts.created().is_empty());
    }

    #[tokio::test]
    async fn billing_override_creates_billing_contact_at_rank_two() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let mut cmd = command("Childcare");
        cmd.school.override_district_billing = true;
        cmd.school.billing_contact_name = Some("Ana Reyes".to_string());
        cmd.school.billing_email = Some("ar@northview.example".to_string());

        f.handler.handle(cmd).await.unwrap();

        let contacts = f.contacts.created();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].contact_type(), ContactType::Billing);
        assert_eq!(contacts[0].first_name(), "Ana");

        let links = f.links.created();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].rank(), ContactRank::SECONDARY);
    }

    #[tokio::test]
    async fn billing_name_without_override_is_ignored() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::new(),
        );
        let mut cmd = command("Childcare");
        cmd.school.billing_contact_name = Some("Ana Reyes".to_string());

        f.handler.handle(cmd).await.unwrap();
        assert!(f.contacts.created().is_empty());
    }

    #[tokio::test]
    async fn create_failure_rolls_back_and_wraps() {
        let f = fixture(
            MockUserDirectory::new().with_user(admin_user(1, 1)),
            MockSchoolRepo::failing_create(),
        );
        let err = f.handler.handle(command("High School")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BadRequest);
        assert!(err.message.starts_with(FAILURE_MESSAGE));
        assert_eq!(f.uow.rollback_count(), 1);
    }
}
