//! GetSchoolHandler - fetches a single school scoped to its district.

use std::sync::Arc;

use tracing::debug;

use crate::application::handlers::school::{load_school_in_district, SchoolAccessGate};
use crate::domain::foundation::{DistrictId, DomainError, Permission, SchoolId, UserId};
use crate::domain::school::School;
use crate::ports::SchoolRepository;

/// Command to fetch one school.
#[derive(Debug, Clone, Copy)]
pub struct GetSchoolCommand {
    pub district_id: DistrictId,
    pub school_id: SchoolId,
    pub user_id: UserId,
}

/// Handler for single-school reads.
pub struct GetSchoolHandler {
    gate: SchoolAccessGate,
    schools: Arc<dyn SchoolRepository>,
}

impl GetSchoolHandler {
    pub fn new(gate: SchoolAccessGate, schools: Arc<dyn SchoolRepository>) -> Self {
        Self { gate, schools }
    }

    pub async fn handle(&self, cmd: GetSchoolCommand) -> Result<School, DomainError> {
        debug!(district_id = %cmd.district_id, school_id = %cmd.school_id, "fetching school");
        self.gate
            .authorize(cmd.user_id, cmd.district_id, Permission::ViewSchools)
            .await?;
        load_school_in_district(self.schools.as_ref(), cmd.district_id, cmd.school_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::mocks::{
        MockDistrictRepo, MockSchoolRepo, MockUserDirectory,
    };
    use crate::domain::district::{District, DistrictStatus, NewDistrict};
    use crate::domain::foundation::{AdminRole, CooperativeId, ErrorCode};
    use crate::domain::school::{NewSchool, SchoolStatus, SchoolType};
    use crate::domain::user::UserAccount;

    fn handler(schools: MockSchoolRepo, roles: Vec<AdminRole>) -> GetSchoolHandler {
        let user = UserAccount::new(
            UserId::new(1).unwrap(),
            Some(CooperativeId::new(1).unwrap()),
            None,
            roles,
        );
        let district = District::create(
            NewDistrict {
                name: "Northview District".to_string(),
                ..Default::default()
            },
            DistrictStatus::Active,
            CooperativeId::new(1).unwrap(),
            "district-1".to_string(),
        )
        .unwrap()
        .with_id(DistrictId::new(1).unwrap());

        GetSchoolHandler::new(
            SchoolAccessGate::new(
                Arc::new(MockUserDirectory::new().with_user(user)),
                Arc::new(MockDistrictRepo::new().with_district(district)),
            ),
            Arc::new(schools),
        )
    }

    fn school(district_id: i64) -> School {
        School::create(
            NewSchool {
                name: "Northview High".to_string(),
                school_type: SchoolType::HighSchool,
                enrollment: Some(350),
                address: None,
                city: None,
                state: None,
                zip: None,
                shipping_address: None,
                shipping_city: None,
                shipping_state: None,
                shipping_zip: None,
                override_district_billing: false,
            },
            DistrictId::new(district_id).unwrap(),
            SchoolStatus::Active,
        )
        .unwrap()
        .with_id(SchoolId::new(10).unwrap())
    }

    fn command() -> GetSchoolCommand {
        GetSchoolCommand {
            district_id: DistrictId::new(1).unwrap(),
            school_id: SchoolId::new(10).unwrap(),
            user_id: UserId::new(1).unwrap(),
        }
    }

    #[tokio::test]
    async fn returns_school_for_viewer_role() {
        let handler = handler(
            MockSchoolRepo::new().with_school(school(1)),
            vec![AdminRole::Viewer],
        );
        let school = handler.handle(command()).await.unwrap();
        assert_eq!(school.name(), "Northview High");
        assert_eq!(school.enrollment(), Some(350));
    }

    #[tokio::test]
    async fn other_districts_school_is_forbidden() {
        let handler = handler(
            MockSchoolRepo::new().with_school(school(2)),
            vec![AdminRole::GroupAdmin],
        );
        let err = handler.handle(command()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(err.message, "School does not belong to this district");
    }

    #[tokio::test]
    async fn missing_school_is_not_found() {
        let handler = handler(MockSchoolRepo::new(), vec![AdminRole::SchoolAdmin]);
        let err = handler.handle(command()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SchoolNotFound);
    }
}
