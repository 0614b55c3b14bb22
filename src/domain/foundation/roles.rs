//! Administrative roles and the capabilities they grant.
//!
//! Role names arrive from the external user directory as strings; they are
//! parsed into a closed enum at the boundary and every authorization check
//! afterwards is a permission-set intersection, never a string comparison.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Capabilities an administrative role can grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Permission {
    /// Create, update, archive, activate, and delete schools.
    ManageSchools,
    /// List schools and read school details.
    ViewSchools,
}

/// Closed set of administrative roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdminRole {
    GroupAdmin,
    DistrictAdmin,
    SchoolAdmin,
    Viewer,
}

static ROLE_PERMISSIONS: Lazy<HashMap<AdminRole, HashSet<Permission>>> = Lazy::new(|| {
    use AdminRole::*;
    use Permission::*;
    let mut table = HashMap::new();
    table.insert(GroupAdmin, HashSet::from([ManageSchools, ViewSchools]));
    table.insert(DistrictAdmin, HashSet::from([ManageSchools, ViewSchools]));
    table.insert(SchoolAdmin, HashSet::from([ManageSchools, ViewSchools]));
    table.insert(Viewer, HashSet::from([ViewSchools]));
    table
});

impl AdminRole {
    /// Returns the permissions granted by this role.
    pub fn permissions(&self) -> &'static HashSet<Permission> {
        &ROLE_PERMISSIONS[self]
    }

    /// Checks whether this role grants the given permission.
    pub fn grants(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }

    /// The display name used by the external role directory.
    pub fn name(&self) -> &'static str {
        match self {
            AdminRole::GroupAdmin => "Group Admin",
            AdminRole::DistrictAdmin => "District Admin",
            AdminRole::SchoolAdmin => "School Admin",
            AdminRole::Viewer => "Viewer",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown role-name error from the external directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown admin role '{}'", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for AdminRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Group Admin" => Ok(AdminRole::GroupAdmin),
            "District Admin" => Ok(AdminRole::DistrictAdmin),
            "School Admin" => Ok(AdminRole::SchoolAdmin),
            "Viewer" => Ok(AdminRole::Viewer),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// Checks whether any of the given roles grants the permission.
pub fn any_role_grants(roles: &[AdminRole], permission: Permission) -> bool {
    roles.iter().any(|role| role.grants(permission))
}
