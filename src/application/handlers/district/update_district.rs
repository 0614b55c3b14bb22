//! UpdateDistrictHandler - partial district update with optional
//! full-replace of the product catalog.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::district::{District, DistrictChanges, DistrictProduct};
use crate::domain::foundation::{DistrictId, DomainError, ErrorCode};
use crate::ports::{DistrictProductRepository, DistrictRepository, TxContext, UnitOfWork};

const FAILURE_MESSAGE: &str = "Failed to update district";

/// Raw update payload as the controller hands it over. Empty or blank
/// strings mean "leave unchanged", matching the platform's established
/// update semantics.
#[derive(Debug, Clone, Default)]
pub struct DistrictUpdateInput {
    pub name: Option<String>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub payment_terms: Option<String>,
}

impl DistrictUpdateInput {
    fn into_changes(self) -> DistrictChanges {
        DistrictChanges {
            name: non_blank(self.name),
            location: non_blank(self.location),
            address: non_blank(self.address),
            city: non_blank(self.city),
            state: non_blank(self.state),
            zip: non_blank(self.zip),
            phone: non_blank(self.phone),
            email: non_blank(self.email),
            website: non_blank(self.website),
            payment_terms: non_blank(self.payment_terms),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Command to update a district.
#[derive(Debug, Clone)]
pub struct UpdateDistrictCommand {
    pub district_id: DistrictId,
    pub data: DistrictUpdateInput,
    /// `Some` with at least one name replaces the whole catalog:
    /// delete-all then recreate, never a diff.
    pub products: Option<Vec<String>>,
}

/// Result of a successful update.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateDistrictResult {
    pub message: String,
}

/// Handler for district updates.
pub struct UpdateDistrictHandler {
    districts: Arc<dyn DistrictRepository>,
    products: Arc<dyn DistrictProductRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateDistrictHandler {
    pub fn new(
        districts: Arc<dyn DistrictRepository>,
        products: Arc<dyn DistrictProductRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            districts,
            products,
            unit_of_work,
        }
    }

    pub async fn handle(
        &self,
        cmd: UpdateDistrictCommand,
    ) -> Result<UpdateDistrictResult, DomainError> {
        debug!(district_id = %cmd.district_id, "updating district");

        let district = self
            .districts
            .find_by_id(cmd.district_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::DistrictNotFound, "District not found")
            })?;

        let updated = district.update(cmd.data.clone().into_changes())?;

        let tx = self.unit_of_work.begin().await?;
        let result = self
            .persist(tx.context(), cmd.district_id, &updated, cmd.products.as_deref())
            .await;
        match result {
            Ok(()) => {
                tx.commit()
                    .await
                    .map_err(|err| err.wrap_operation(FAILURE_MESSAGE))?;
                Ok(UpdateDistrictResult {
                    message: "District updated successfully".to_string(),
                })
            }
            Err(err) => {
                warn!(district_id = %cmd.district_id, error = %err, "district update rolled back");
                // Surface the original cause even when rollback itself fails.
                if let Err(rollback_err) = tx.rollback().await {
                    warn!(error = %rollback_err, "district update rollback failed");
                }
                Err(err.wrap_operation(FAILURE_MESSAGE))
            }
        }
    }

    async fn persist(
        &self,
        tx: &dyn TxContext,
        district_id: DistrictId,
        updated: &District,
        products: Option<&[String]>,
    ) -> Result<(), DomainError> {
        self.districts.update_in_tx(tx, updated).await?;

        if let Some(names) = products.filter(|p| !p.is_empty()) {
            self.products.delete_by_district_in_tx(tx, district_id).await?;
            for name in names {
                let row = DistrictProduct::create(district_id, name.clone())?;
                self.products.create_in_tx(tx, &row).await?;
            }
        }
        Ok(())
    }
}
