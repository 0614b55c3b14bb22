//! ListSchoolsHandler - district-scoped school listing behind the read
//! gate.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::school::SchoolAccessGate;
use crate::domain::foundation::{DistrictId, DomainError, Permission, UserId};
use crate::domain::school::School;
use crate::ports::SchoolRepository;

/// Command to list the schools in a district.
#[derive(Debug, Clone, Copy)]
pub struct ListSchoolsCommand {
    pub district_id: DistrictId,
    pub user_id: UserId,
}

/// Handler for school listings.
///
/// The plain and detailed listings share one status-enriched fetch; the
/// controller decides which projection of the returned aggregates to
/// serialize.
pub struct ListSchoolsHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
}

impl ListSchoolsHandler {
    pub fn new(gate: SchoolAccessGate, schools: Arc<dyn SchoolRepository>) -> Self {
        Self { gate, schools }
    }

    pub async fn handle(&self, cmd: ListSchoolsCommand) -> Result<Vec<School>, DomainError> {
        debug!(district_id = %cmd.district_id, "listing schools");
        self.gate
            .authorize(cmd.user_id, cmd.district_id, Permission::ViewSchools)
            .await?;
        self.schools.find_by_district(cmd.district_id).await
    }

    /// Detailed listing variant; currently identical to [`Self::handle`].
    pub async fn handle_detailed(
        &self,
        cmd: ListSchoolsCommand,
    ) -> Result<Vec<School>, DomainError> {
        self.handle(cmd).await
    }
}
