//! District product repository port.

use crate::domain::district::DistrictProduct;
use crate::domain::foundation::{DistrictId, DomainError};
use crate::ports::TxContext;
use async_trait::async_trait;

/// Repository port for district product rows.
///
/// The catalog is replaced wholesale: delete-all then recreate, inside one
/// transaction. There is no per-row update.
#[async_trait]
pub trait DistrictProductRepository: Send + Sync {
    /// All product rows for a district.
    async fn find_by_district(
        &self,
        district_id: DistrictId,
    ) -> Result<Vec<DistrictProduct>, DomainError>;

    /// Persist one product row inside a transaction.
    async fn create_in_tx(
        &self,
        tx: &dyn TxContext,
        product: &DistrictProduct,
    ) -> Result<DistrictProduct, DomainError>;

    /// Remove every product row for a district inside a transaction.
    /// Returns the number of rows removed.
    async fn delete_by_district_in_tx(
        &self,
        tx: &dyn TxContext,
        district_id: DistrictId,
    ) -> Result<u64, DomainError>;
}
