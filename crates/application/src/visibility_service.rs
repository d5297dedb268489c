use gantry_core::AppResult;
use gantry_domain::{CustomField, Principal, ProjectId, RoleSet};

use crate::AccessService;

/// Application service deciding whether custom field values may be exposed.
///
/// Visibility is evaluated per (principal, project) pair: the same principal
/// may hold different roles on different projects, so a restricted field can
/// be visible on one project's records and hidden on another's.
#[derive(Clone)]
pub struct FieldVisibilityService {
    access: AccessService,
}

impl FieldVisibilityService {
    /// Creates a new visibility service on top of role resolution.
    #[must_use]
    pub fn new(access: AccessService) -> Self {
        Self { access }
    }

    /// Decides visibility against an already-resolved role set.
    ///
    /// Lets callers that evaluate many fields for one (principal, project)
    /// pair resolve roles once instead of per field.
    #[must_use]
    pub fn is_visible_with_roles(
        field: &CustomField,
        principal: &Principal,
        roles: &RoleSet,
    ) -> bool {
        field.is_visible_to_all() || principal.is_admin() || roles.intersects(field.role_ids())
    }

    /// Returns whether the field's value may be exposed to the principal in
    /// the given project scope.
    pub async fn is_visible(
        &self,
        field: &CustomField,
        principal: &Principal,
        project_id: Option<ProjectId>,
    ) -> AppResult<bool> {
        if field.is_visible_to_all() || principal.is_admin() {
            return Ok(true);
        }

        let roles = self.access.effective_roles(principal, project_id).await?;
        Ok(roles.intersects(field.role_ids()))
    }

    /// Filters a field list down to the subset visible to the principal.
    pub async fn visible_fields(
        &self,
        fields: &[CustomField],
        principal: &Principal,
        project_id: Option<ProjectId>,
    ) -> AppResult<Vec<CustomField>> {
        let roles = self.access.effective_roles(principal, project_id).await?;

        Ok(fields
            .iter()
            .filter(|field| Self::is_visible_with_roles(field, principal, &roles))
            .cloned()
            .collect())
    }
}
