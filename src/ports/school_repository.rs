//! School repository port.

use crate::domain::foundation::{DistrictId, DomainError, SchoolId};
use crate::domain::school::School;
use crate::ports::TxContext;
use async_trait::async_trait;

/// Repository port for School aggregate persistence.
#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Find a school by id. Returns `None` if absent.
    async fn find_by_id(&self, id: SchoolId) -> Result<Option<School>, DomainError>;

    /// All non-deleted schools in a district, status-enriched.
    async fn find_by_district(&self, district_id: DistrictId) -> Result<Vec<School>, DomainError>;

    /// Persist an updated school outside a transaction.
    ///
    /// Returns `None` when the store reports nothing was written; callers
    /// treat that as a failed post-condition.
    async fn update(&self, school: &School) -> Result<Option<School>, DomainError>;

    /// Persist a new school inside a transaction. The returned aggregate
    /// carries the store-assigned id.
    async fn create_in_tx(
        &self,
        tx: &dyn TxContext,
        school: &School,
    ) -> Result<School, DomainError>;

    /// Persist an updated school inside a transaction. Returns `None` when
    /// the store reports nothing was written.
    async fn update_in_tx(
        &self,
        tx: &dyn TxContext,
        school: &School,
    ) -> Result<Option<School>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn school_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn SchoolRepository) {}
    }
}
