//! User directory port.
//!
//! Collaborator that resolves an authenticated user id into the acting
//! user shape used by the authorization gate. Token issuance and
//! verification live outside the core.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserAccount;
use async_trait::async_trait;

/// Lookup port for acting users and their resolved roles.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolve a user by id. Returns `None` if absent.
    async fn get_user_details(&self, user_id: UserId) -> Result<Option<UserAccount>, DomainError>;
}
