//! District repository port.

use crate::domain::district::District;
use crate::domain::foundation::{CooperativeId, DistrictId, DomainError};
use crate::ports::TxContext;
use async_trait::async_trait;

/// Repository port for District aggregate persistence.
///
/// Reads never take a transaction context; every multi-row mutation goes
/// through the `*_in_tx` variants.
#[async_trait]
pub trait DistrictRepository: Send + Sync {
    /// Find a district by id. Returns `None` if absent.
    async fn find_by_id(&self, id: DistrictId) -> Result<Option<District>, DomainError>;

    /// All non-deleted districts owned by a cooperative.
    async fn find_by_cooperative(
        &self,
        cooperative_id: CooperativeId,
    ) -> Result<Vec<District>, DomainError>;

    /// The most recently assigned non-null district code, if any.
    async fn find_last_code(&self) -> Result<Option<String>, DomainError>;

    /// Persist an updated district outside a transaction.
    async fn update(&self, district: &District) -> Result<District, DomainError>;

    /// Persist a new district inside a transaction. The returned aggregate
    /// carries the store-assigned id.
    async fn create_in_tx(
        &self,
        tx: &dyn TxContext,
        district: &District,
    ) -> Result<District, DomainError>;

    /// Persist an updated district inside a transaction.
    async fn update_in_tx(
        &self,
        tx: &dyn TxContext,
        district: &District,
    ) -> Result<District, DomainError>;
}
