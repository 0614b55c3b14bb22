//! Shared in-memory port doubles for handler tests.
//!
//! Each mock records the writes it receives so tests can assert on exactly
//! what a handler persisted, and can be switched into a failing mode to
//! exercise rollback paths.

use std::any::Any;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::contact::{Contact, ContactRank, OrganizationContact};
use crate::domain::district::{District, DistrictProduct};
use crate::domain::foundation::{
    ContactId, CooperativeId, DistrictId, DistrictProductId, DomainError, ErrorCode,
    OrganizationContactId, SchoolId, UserId,
};
use crate::domain::school::School;
use crate::domain::user::UserAccount;
use crate::ports::{
    ActiveTransaction, ContactRepository, DistrictProductRepository, DistrictRepository,
    LinkedContact, OrganizationContactRepository, SchoolRepository, TxContext, UnitOfWork,
    UserDirectory,
};

fn simulated_failure(what: &str) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Simulated {} failure", what))
}

// ── Unit of work ─────────────────────────────────────────────────────────

pub struct MockTxContext;

impl TxContext for MockTxContext {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct MockTransaction {
    ctx: MockTxContext,
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
    fail_commit: bool,
    fail_rollback: bool,
}

#[async_trait]
impl ActiveTransaction for MockTransaction {
    fn context(&self) -> &dyn TxContext {
        &self.ctx
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        if self.fail_commit {
            return Err(simulated_failure("commit"));
        }
        self.commits.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        if self.fail_rollback {
            return Err(simulated_failure("rollback"));
        }
        self.rollbacks.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[derive(Default)]
pub struct MockUnitOfWork {
    commits: Arc<AtomicUsize>,
    rollbacks: Arc<AtomicUsize>,
    fail_commit: bool,
    fail_rollback: bool,
}

impl MockUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_commit() -> Self {
        Self {
            fail_commit: true,
            ..Self::default()
        }
    }

    pub fn failing_rollback() -> Self {
        Self {
            fail_rollback: true,
            ..Self::default()
        }
    }

    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    pub fn rollback_count(&self) -> usize {
        self.rollbacks.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UnitOfWork for MockUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn ActiveTransaction>, DomainError> {
        Ok(Box::new(MockTransaction {
            ctx: MockTxContext,
            commits: self.commits.clone(),
            rollbacks: self.rollbacks.clone(),
            fail_commit: self.fail_commit,
            fail_rollback: self.fail_rollback,
        }))
    }
}

// ── District repository ──────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDistrictRepo {
    districts: Mutex<Vec<District>>,
    last_code: Mutex<Option<String>>,
    created: Mutex<Vec<District>>,
    updated: Mutex<Vec<District>>,
    next_id: AtomicI64,
    fail_create: bool,
}

impl MockDistrictRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    pub fn with_last_code(self, code: &str) -> Self {
        *self.last_code.lock().unwrap() = Some(code.to_string());
        self
    }

    pub fn with_district(self, district: District) -> Self {
        self.districts.lock().unwrap().push(district);
        self
    }

    pub fn created(&self) -> Vec<District> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<District> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl DistrictRepository for MockDistrictRepo {
    async fn find_by_id(&self, id: DistrictId) -> Result<Option<District>, DomainError> {
        Ok(self
            .districts
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id() == Some(id))
            .cloned())
    }

    async fn find_by_cooperative(
        &self,
        cooperative_id: CooperativeId,
    ) -> Result<Vec<District>, DomainError> {
        Ok(self
            .districts
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.cooperative_id() == cooperative_id && !d.is_deleted())
            .cloned()
            .collect())
    }

    async fn find_last_code(&self) -> Result<Option<String>, DomainError> {
        Ok(self.last_code.lock().unwrap().clone())
    }

    async fn update(&self, district: &District) -> Result<District, DomainError> {
        self.updated.lock().unwrap().push(district.clone());
        Ok(district.clone())
    }

    async fn create_in_tx(
        &self,
        _tx: &dyn TxContext,
        district: &District,
    ) -> Result<District, DomainError> {
        if self.fail_create {
            return Err(simulated_failure("district create"));
        }
        let id = DistrictId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        let persisted = district.clone().with_id(id);
        self.created.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn update_in_tx(
        &self,
        _tx: &dyn TxContext,
        district: &District,
    ) -> Result<District, DomainError> {
        self.updated.lock().unwrap().push(district.clone());
        Ok(district.clone())
    }
}

// ── School repository ────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockSchoolRepo {
    schools: Mutex<Vec<School>>,
    created: Mutex<Vec<School>>,
    updated: Mutex<Vec<School>>,
    next_id: AtomicI64,
    fail_create: bool,
    update_returns_none: bool,
}

impl MockSchoolRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Default::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    pub fn with_silent_update() -> Self {
        Self {
            update_returns_none: true,
            ..Self::new()
        }
    }

    pub fn with_school(self, school: School) -> Self {
        self.schools.lock().unwrap().push(school);
        self
    }

    pub fn created(&self) -> Vec<School> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<School> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl SchoolRepository for MockSchoolRepo {
    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, DomainError> {
        Ok(self
            .schools
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id() == Some(id))
            .cloned())
    }

    async fn find_by_district(&self, district_id: DistrictId) -> Result<Vec<School>, DomainError> {
        Ok(self
            .schools
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.district_id() == district_id && !s.is_deleted())
            .cloned()
            .collect())
    }

    async fn update(&self, school: &School) -> Result<Option<School>, DomainError> {
        if self.update_returns_none {
            return Ok(None);
        }
        self.updated.lock().unwrap().push(school.clone());
        Ok(Some(school.clone()))
    }

    async fn create_in_tx(
        &self,
        _tx: &dyn TxContext,
        school: &School,
    ) -> Result<School, DomainError> {
        if self.fail_create {
            return Err(simulated_failure("school create"));
        }
        let id = SchoolId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        let persisted = school.clone().with_id(id);
        self.created.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn update_in_tx(
        &self,
        _tx: &dyn TxContext,
        school: &School,
    ) -> Result<Option<School>, DomainError> {
        if self.update_returns_none {
            return Ok(None);
        }
        self.updated.lock().unwrap().push(school.clone());
        Ok(Some(school.clone()))
    }
}

// ── Contact repository ───────────────────────────────────────────────────

#[derive(Default)]
pub struct MockContactRepo {
    by_email: Mutex<HashMap<String, Contact>>,
    created: Mutex<Vec<Contact>>,
    updated: Mutex<Vec<Contact>>,
    next_id: AtomicI64,
    fail_create: bool,
}

impl MockContactRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(100),
            ..Default::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    pub fn with_contact(self, email: &str, contact: Contact) -> Self {
        self.by_email
            .lock()
            .unwrap()
            .insert(email.to_string(), contact);
        self
    }

    pub fn created(&self) -> Vec<Contact> {
        self.created.lock().unwrap().clone()
    }

    pub fn updated(&self) -> Vec<Contact> {
        self.updated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, DomainError> {
        Ok(self.by_email.lock().unwrap().get(email).cloned())
    }

    async fn create_in_tx(
        &self,
        _tx: &dyn TxContext,
        contact: &Contact,
    ) -> Result<Contact, DomainError> {
        if self.fail_create {
            return Err(simulated_failure("contact create"));
        }
        let id = ContactId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        let persisted = contact.clone().with_id(id);
        self.created.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn update_in_tx(
        &self,
        _tx: &dyn TxContext,
        contact: &Contact,
    ) -> Result<Contact, DomainError> {
        self.updated.lock().unwrap().push(contact.clone());
        Ok(contact.clone())
    }
}

// ── Organization contact repository ──────────────────────────────────────

#[derive(Default)]
pub struct MockOrgContactRepo {
    linked: Mutex<Vec<LinkedContact>>,
    created: Mutex<Vec<OrganizationContact>>,
    next_id: AtomicI64,
}

impl MockOrgContactRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(500),
            ..Default::default()
        }
    }

    pub fn with_linked(self, linked: LinkedContact) -> Self {
        self.linked.lock().unwrap().push(linked);
        self
    }

    pub fn created(&self) -> Vec<OrganizationContact> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrganizationContactRepository for MockOrgContactRepo {
    async fn find_with_contacts(
        &self,
        organization_id: i64,
    ) -> Result<Vec<LinkedContact>, DomainError> {
        Ok(self
            .linked
            .lock()
            .unwrap()
            .iter()
            .filter(|lc| lc.link.organization_id() == organization_id)
            .cloned()
            .collect())
    }

    async fn find_link(
        &self,
        contact_id: ContactId,
        organization_id: i64,
        rank: ContactRank,
    ) -> Result<Option<OrganizationContact>, DomainError> {
        let seeded = self.linked.lock().unwrap();
        if let Some(found) = seeded.iter().find(|lc| {
            lc.link.contact_id() == contact_id
                && lc.link.organization_id() == organization_id
                && lc.link.rank() == rank
        }) {
            return Ok(Some(found.link.clone()));
        }
        Ok(self
            .created
            .lock()
            .unwrap()
            .iter()
            .find(|l| {
                l.contact_id() == contact_id
                    && l.organization_id() == organization_id
                    && l.rank() == rank
            })
            .cloned())
    }

    async fn create_in_tx(
        &self,
        _tx: &dyn TxContext,
        link: &OrganizationContact,
    ) -> Result<OrganizationContact, DomainError> {
        let id = OrganizationContactId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        let persisted = link.clone().with_id(id);
        self.created.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }
}

// ── District product repository ──────────────────────────────────────────

#[derive(Default)]
pub struct MockProductRepo {
    rows: Mutex<Vec<DistrictProduct>>,
    created: Mutex<Vec<DistrictProduct>>,
    deleted_for: Mutex<Vec<DistrictId>>,
    next_id: AtomicI64,
    fail_create: bool,
}

impl MockProductRepo {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1000),
            ..Default::default()
        }
    }

    pub fn failing_create() -> Self {
        Self {
            fail_create: true,
            ..Self::new()
        }
    }

    pub fn with_row(self, row: DistrictProduct) -> Self {
        self.rows.lock().unwrap().push(row);
        self
    }

    pub fn created(&self) -> Vec<DistrictProduct> {
        self.created.lock().unwrap().clone()
    }

    pub fn deleted_for(&self) -> Vec<DistrictId> {
        self.deleted_for.lock().unwrap().clone()
    }
}

#[async_trait]
impl DistrictProductRepository for MockProductRepo {
    async fn find_by_district(
        &self,
        district_id: DistrictId,
    ) -> Result<Vec<DistrictProduct>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.district_id() == district_id)
            .cloned()
            .collect())
    }

    async fn create_in_tx(
        &self,
        _tx: &dyn TxContext,
        product: &DistrictProduct,
    ) -> Result<DistrictProduct, DomainError> {
        if self.fail_create {
            return Err(simulated_failure("product create"));
        }
        let id = DistrictProductId::new(self.next_id.fetch_add(1, Ordering::SeqCst)).unwrap();
        let persisted = product.clone().with_id(id);
        self.created.lock().unwrap().push(persisted.clone());
        Ok(persisted)
    }

    async fn delete_by_district_in_tx(
        &self,
        _tx: &dyn TxContext,
        district_id: DistrictId,
    ) -> Result<u64, DomainError> {
        self.deleted_for.lock().unwrap().push(district_id);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.district_id() != district_id);
        Ok((before - rows.len()) as u64)
    }
}

// ── User directory ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockUserDirectory {
    users: Mutex<HashMap<UserId, UserAccount>>,
}

impl MockUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, user: UserAccount) -> Self {
        self.users.lock().unwrap().insert(user.id(), user);
        self
    }
}

#[async_trait]
impl UserDirectory for MockUserDirectory {
    async fn get_user_details(&self, user_id: UserId) -> Result<Option<UserAccount>, DomainError> {
        Ok(self.users.lock().unwrap().get(&user_id).cloned())
    }
}
