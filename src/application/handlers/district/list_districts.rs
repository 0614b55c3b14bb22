//! ListDistrictsHandler - cooperative-wide district listing with
//! aggregated school and student counts.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::domain::foundation::{CooperativeId, DistrictId, DomainError};
use crate::ports::{DistrictRepository, SchoolRepository};

/// Command to list all districts under a cooperative.
#[derive(Debug, Clone, Copy)]
pub struct ListDistrictsCommand {
    pub cooperative_id: CooperativeId,
}

/// One row in the district listing.
#[derive(Debug, Clone, Serialize)]
pub struct DistrictSummary {
    pub id: DistrictId,
    pub name: String,
    pub code: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub school_count: usize,
    pub student_count: u64,
}

/// Handler for the district listing. Pure read, no transaction.
pub struct ListDistrictsHandler {
    districts: Arc<dyn DistrictRepository>,
    schools: Arc<dyn SchoolRepository>,
}

impl ListDistrictsHandler {
    pub fn new(districts: Arc<dyn DistrictRepository>, schools: Arc<dyn SchoolRepository>) -> Self {
        Self { districts, schools }
    }

    pub async fn handle(
        &self,
        cmd: ListDistrictsCommand,
    ) -> Result<Vec<DistrictSummary>, DomainError> {
        debug!(cooperative_id = %cmd.cooperative_id, "listing districts");

        let districts = self.districts.find_by_cooperative(cmd.cooperative_id).await?;

        let mut summaries = Vec::with_capacity(districts.len());
        for district in &districts {
            // Unpersisted rows cannot come back from the store; skip
            // rather than fail the whole listing if one does.
            let Some(id) = district.id() else { continue };

            let schools = self.schools.find_by_district(id).await?;
            let student_count = schools
                .iter()
                .filter_map(|s| s.enrollment())
                .map(u64::from)
                .sum();

            summaries.push(DistrictSummary {
                id,
                name: district.name().to_string(),
                code: district.code().map(String::from),
                location: district.display_location(),
                status: district.status().display_name().to_string(),
                school_count: schools.len(),
                student_count,
            });
        }

        Ok(summaries)
    }
}
