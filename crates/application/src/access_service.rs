use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use gantry_core::AppResult;
use gantry_domain::{
    BuiltinRole, Membership, Permission, Principal, PrincipalId, Project, ProjectId, Role, RoleId,
    RoleSet,
};

/// Repository port for projects, roles and membership assignments.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Finds a project by id.
    async fn find_project(&self, project_id: ProjectId) -> AppResult<Option<Project>>;

    /// Lists every known role.
    async fn list_roles(&self) -> AppResult<Vec<Role>>;

    /// Finds one of the built-in roles, if provisioned.
    async fn builtin_role(&self, kind: BuiltinRole) -> AppResult<Option<Role>>;

    /// Lists every membership held by a principal, project-scoped and global.
    async fn memberships_for_principal(
        &self,
        principal_id: PrincipalId,
    ) -> AppResult<Vec<Membership>>;
}

/// Application service resolving effective roles and project access.
///
/// Resolution is read-only and total: missing memberships, unknown projects
/// and unprovisioned built-in roles all degrade to an empty role set rather
/// than an error.
#[derive(Clone)]
pub struct AccessService {
    directory: Arc<dyn DirectoryRepository>,
}

impl AccessService {
    /// Creates a new access service from a directory implementation.
    #[must_use]
    pub fn new(directory: Arc<dyn DirectoryRepository>) -> Self {
        Self { directory }
    }

    /// Resolves the effective roles of a principal within a project scope.
    ///
    /// Administrators resolve to the universal role set. An unknown project id
    /// is treated as the global scope; an archived project grants no roles.
    /// Principals without a membership on a public project fall back to their
    /// built-in role.
    pub async fn effective_roles(
        &self,
        principal: &Principal,
        project_id: Option<ProjectId>,
    ) -> AppResult<RoleSet> {
        if principal.is_admin() {
            let roles = self.directory.list_roles().await?;
            return Ok(roles.into_iter().collect());
        }

        let project = match project_id {
            Some(id) => self.directory.find_project(id).await?,
            None => None,
        };

        match project {
            Some(project) if project.is_archived() => Ok(RoleSet::new()),
            Some(project) => self.project_roles(principal, &project).await,
            None => self.global_roles(principal).await,
        }
    }

    /// Returns whether the principal may access the project at all.
    ///
    /// Unknown and archived projects are inaccessible to everyone; private
    /// projects require a membership.
    pub async fn can_access_project(
        &self,
        principal: &Principal,
        project_id: ProjectId,
    ) -> AppResult<bool> {
        let Some(project) = self.directory.find_project(project_id).await? else {
            return Ok(false);
        };

        if project.is_archived() {
            return Ok(false);
        }

        if principal.is_admin() || project.is_public() {
            return Ok(true);
        }

        let role_ids = self
            .membership_role_ids(principal, Some(project_id))
            .await?;
        Ok(!role_ids.is_empty())
    }

    /// Returns whether any effective role carries the permission flag.
    pub async fn has_permission(
        &self,
        principal: &Principal,
        project_id: Option<ProjectId>,
        permission: Permission,
    ) -> AppResult<bool> {
        if principal.is_admin() {
            return Ok(true);
        }

        let roles = self.effective_roles(principal, project_id).await?;
        Ok(roles.has_permission(permission))
    }

    async fn project_roles(&self, principal: &Principal, project: &Project) -> AppResult<RoleSet> {
        let role_ids = self
            .membership_role_ids(principal, Some(project.id()))
            .await?;

        if !role_ids.is_empty() {
            return self.resolve_roles(&role_ids).await;
        }

        if project.is_public() {
            return self.builtin_role_set(principal).await;
        }

        Ok(RoleSet::new())
    }

    async fn global_roles(&self, principal: &Principal) -> AppResult<RoleSet> {
        if principal.is_anonymous() {
            return self.builtin_role_set(principal).await;
        }

        let role_ids = self.membership_role_ids(principal, None).await?;
        if role_ids.is_empty() {
            return Ok(RoleSet::new());
        }

        self.resolve_roles(&role_ids).await
    }

    async fn membership_role_ids(
        &self,
        principal: &Principal,
        scope: Option<ProjectId>,
    ) -> AppResult<BTreeSet<RoleId>> {
        let Some(principal_id) = principal.id() else {
            return Ok(BTreeSet::new());
        };

        let memberships = self
            .directory
            .memberships_for_principal(principal_id)
            .await?;

        Ok(memberships
            .iter()
            .filter(|membership| membership.applies_to(scope))
            .flat_map(|membership| membership.role_ids().iter().copied())
            .collect())
    }

    async fn resolve_roles(&self, role_ids: &BTreeSet<RoleId>) -> AppResult<RoleSet> {
        let roles = self.directory.list_roles().await?;

        // Assignments referencing deleted roles are silently dropped.
        Ok(roles
            .into_iter()
            .filter(|role| role_ids.contains(&role.id()))
            .collect())
    }

    async fn builtin_role_set(&self, principal: &Principal) -> AppResult<RoleSet> {
        let role = self.directory.builtin_role(principal.builtin_role()).await?;
        Ok(role.into_iter().collect())
    }
}
