//! Contact repository port.

use crate::domain::contact::Contact;
use crate::domain::foundation::DomainError;
use crate::ports::TxContext;
use async_trait::async_trait;

/// Repository port for Contact persistence.
///
/// Contacts are only ever written alongside their organization link, so
/// all writes are transactional.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Find a contact by email address. Returns `None` if absent; this is
    /// what makes the school contact upsert idempotent.
    async fn find_by_email(&self, email: &str) -> Result<Option<Contact>, DomainError>;

    /// Persist a new contact inside a transaction. The returned contact
    /// carries the store-assigned id.
    async fn create_in_tx(
        &self,
        tx: &dyn TxContext,
        contact: &Contact,
    ) -> Result<Contact, DomainError>;

    /// Persist an updated contact inside a transaction.
    async fn update_in_tx(
        &self,
        tx: &dyn TxContext,
        contact: &Contact,
    ) -> Result<Contact, DomainError>;
}
