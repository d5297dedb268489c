use std::collections::BTreeSet;

use gantry_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

use crate::{PrincipalId, ProjectId, RoleId};

/// Role assignment linking a principal to a project, or to the global scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    principal_id: PrincipalId,
    project_id: Option<ProjectId>,
    role_ids: BTreeSet<RoleId>,
}

impl Membership {
    /// Creates a validated membership. At least one role is required.
    pub fn new(
        principal_id: PrincipalId,
        project_id: Option<ProjectId>,
        role_ids: BTreeSet<RoleId>,
    ) -> AppResult<Self> {
        if role_ids.is_empty() {
            return Err(AppError::Validation(
                "membership must carry at least one role".to_owned(),
            ));
        }

        Ok(Self {
            principal_id,
            project_id,
            role_ids,
        })
    }

    /// Returns the member principal.
    #[must_use]
    pub fn principal_id(&self) -> PrincipalId {
        self.principal_id
    }

    /// Returns the project scope, or `None` for a global membership.
    #[must_use]
    pub fn project_id(&self) -> Option<ProjectId> {
        self.project_id
    }

    /// Returns whether the membership applies outside any project.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.project_id.is_none()
    }

    /// Returns the assigned role ids.
    #[must_use]
    pub fn role_ids(&self) -> &BTreeSet<RoleId> {
        &self.role_ids
    }

    /// Returns whether the membership applies to the given scope.
    #[must_use]
    pub fn applies_to(&self, project_id: Option<ProjectId>) -> bool {
        self.project_id == project_id
    }
}
