//! Organization-contact link repository port.

use crate::domain::contact::{Contact, ContactRank, OrganizationContact};
use crate::domain::foundation::{ContactId, DomainError};
use crate::ports::TxContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A link joined with the contact it points at. Detail projections select
/// from these by rank and contact type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkedContact {
    pub link: OrganizationContact,
    pub contact: Contact,
}

/// Repository port for ranked contact-organization links.
#[async_trait]
pub trait OrganizationContactRepository: Send + Sync {
    /// All links owned by an organization (district or school id), joined
    /// with their contacts.
    async fn find_with_contacts(
        &self,
        organization_id: i64,
    ) -> Result<Vec<LinkedContact>, DomainError>;

    /// An existing link for the given contact, organization, and rank, if
    /// any. Used to keep linking idempotent on update paths.
    async fn find_link(
        &self,
        contact_id: ContactId,
        organization_id: i64,
        rank: ContactRank,
    ) -> Result<Option<OrganizationContact>, DomainError>;

    /// Persist a new link inside a transaction.
    async fn create_in_tx(
        &self,
        tx: &dyn TxContext,
        link: &OrganizationContact,
    ) -> Result<OrganizationContact, DomainError>;
}
