use std::collections::BTreeMap;

use async_trait::async_trait;
use gantry_application::DirectoryRepository;
use gantry_core::{AppError, AppResult};
use gantry_domain::{
    BuiltinRole, Membership, PrincipalId, Project, ProjectId, Role, RoleId,
};
use tokio::sync::RwLock;

/// In-memory directory repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryRepository {
    projects: RwLock<BTreeMap<ProjectId, Project>>,
    roles: RwLock<BTreeMap<RoleId, Role>>,
    memberships: RwLock<Vec<Membership>>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(BTreeMap::new()),
            roles: RwLock::new(BTreeMap::new()),
            memberships: RwLock::new(Vec::new()),
        }
    }

    /// Stores a project.
    pub async fn insert_project(&self, project: Project) -> AppResult<()> {
        let mut projects = self.projects.write().await;

        if projects.contains_key(&project.id()) {
            return Err(AppError::Conflict(format!(
                "project '{}' already exists",
                project.identifier().as_str()
            )));
        }

        projects.insert(project.id(), project);
        Ok(())
    }

    /// Stores a role.
    pub async fn insert_role(&self, role: Role) -> AppResult<()> {
        let mut roles = self.roles.write().await;

        if roles.contains_key(&role.id()) {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                role.name().as_str()
            )));
        }

        roles.insert(role.id(), role);
        Ok(())
    }

    /// Stores a membership assignment. Referenced roles must already exist.
    pub async fn insert_membership(&self, membership: Membership) -> AppResult<()> {
        let roles = self.roles.read().await;
        for role_id in membership.role_ids() {
            if !roles.contains_key(role_id) {
                return Err(AppError::Validation(format!(
                    "membership references unknown role '{role_id}'"
                )));
            }
        }
        drop(roles);

        self.memberships.write().await.push(membership);
        Ok(())
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn find_project(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
        Ok(self.projects.read().await.get(&project_id).cloned())
    }

    async fn list_roles(&self) -> AppResult<Vec<Role>> {
        Ok(self.roles.read().await.values().cloned().collect())
    }

    async fn builtin_role(&self, kind: BuiltinRole) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .read()
            .await
            .values()
            .find(|role| role.builtin_kind() == Some(kind))
            .cloned())
    }

    async fn memberships_for_principal(
        &self,
        principal_id: PrincipalId,
    ) -> AppResult<Vec<Membership>> {
        Ok(self
            .memberships
            .read()
            .await
            .iter()
            .filter(|membership| membership.principal_id() == principal_id)
            .cloned()
            .collect())
    }
}
