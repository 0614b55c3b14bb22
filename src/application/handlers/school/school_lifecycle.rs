//! School lifecycle handlers: archive, activate, and logical delete.
//!
//! All three sit behind the manage gate and the district-scoped school
//! lookup, then persist through the plain update call.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::school::{load_school_in_district, SchoolAccessGate};
use crate::domain::foundation::{DistrictId, DomainError, Permission, SchoolId, UserId};
use crate::domain::school::School;
use crate::ports::SchoolRepository;

/// Command shared by all school lifecycle transitions.
#[derive(Debug, Clone, Copy)]
pub struct SchoolLifecycleCommand {
    pub district_id: DistrictId,
    pub school_id: SchoolId,
    pub user_id: UserId,
}

async fn run(
    gate: &SchoolAccessGate,
    schools: &dyn SchoolRepository,
    cmd: SchoolLifecycleCommand,
    transition: fn(&mut School),
    failure: &'static str,
) -> Result<(), DomainError> {
    let result = async {
        gate.authorize(cmd.user_id, cmd.district_id, Permission::ManageSchools)
            .await?;
        let mut school = load_school_in_district(schools, cmd.district_id, cmd.school_id).await?;
        transition(&mut school);
        schools
            .update(&school)
            .await?
            .ok_or_else(|| DomainError::bad_request("School update was not applied"))?;
        Ok(())
    }
    .await;

    result.map_err(|err: DomainError| err.wrap_operation(failure))
}

/// Handler that transitions a school to Inactive.
pub struct ArchiveSchoolHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
}

impl ArchiveSchoolHandler {
    pub fn new(gate: SchoolAccessGate, schools: Arc<dyn SchoolRepository>) -> Self {
        Self { gate, schools }
    }

    pub async fn handle(&self, cmd: SchoolLifecycleCommand) -> Result<(), DomainError> {
        debug!(school_id = %cmd.school_id, "archiving school");
        run(
            &self.gate,
            self.schools.as_ref(),
            cmd,
            School::mark_inactive,
            "Failed to archive school",
        )
        .await
    }
}

/// Handler that transitions a school back to Active.
pub struct ActivateSchoolHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
}

impl ActivateSchoolHandler {
    pub fn new(gate: SchoolAccessGate, schools: Arc<dyn SchoolRepository>) -> Self {
        Self { gate, schools }
    }

    pub async fn handle(&self, cmd: SchoolLifecycleCommand) -> Result<(), DomainError> {
        debug!(school_id = %cmd.school_id, "activating school");
        run(
            &self.gate,
            self.schools.as_ref(),
            cmd,
            School::mark_active,
            "Failed to activate school",
        )
        .await
    }
}

/// Handler that logically deletes a school. Only the deleted flag is set;
/// the status field is left untouched.
pub struct DeleteSchoolHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
}

impl DeleteSchoolHandler {
    pub fn new(gate: SchoolAccessGate, schools: Arc<dyn SchoolRepository>) -> Self {
        Self { gate, schools }
    }

    pub async fn handle(&self, cmd: SchoolLifecycleCommand) -> Result<(), DomainError> {
        debug!(school_id = %cmd.school_id, "deleting school");
        run(
            &self.gate,
            self.schools.as_ref(),
            cmd,
            School::mark_deleted,
            "Failed to delete school",
        )
        .await
    }
}
