use std::str::FromStr;

use gantry_core::AppError;
use serde::{Deserialize, Serialize};

/// Permissions enforced by role-based policy checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Allows viewing a project overview.
    ViewProject,
    /// Allows viewing issues and their details.
    ViewIssues,
    /// Allows creating and editing issues.
    EditIssues,
    /// Allows viewing wiki pages.
    ViewWiki,
    /// Allows viewing attached files and documents.
    ViewFiles,
    /// Allows viewing logged time entries.
    ViewTimeEntries,
    /// Allows registering and triggering webhooks.
    UseWebhooks,
    /// Allows managing project memberships.
    ManageMembers,
}

impl Permission {
    /// Returns a stable storage value for this permission.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ViewProject => "view_project",
            Self::ViewIssues => "view_issues",
            Self::EditIssues => "edit_issues",
            Self::ViewWiki => "view_wiki",
            Self::ViewFiles => "view_files",
            Self::ViewTimeEntries => "view_time_entries",
            Self::UseWebhooks => "use_webhooks",
            Self::ManageMembers => "manage_members",
        }
    }

    /// Returns all known permissions.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Permission] = &[
            Permission::ViewProject,
            Permission::ViewIssues,
            Permission::EditIssues,
            Permission::ViewWiki,
            Permission::ViewFiles,
            Permission::ViewTimeEntries,
            Permission::UseWebhooks,
            Permission::ManageMembers,
        ];

        ALL
    }
}

impl FromStr for Permission {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "view_project" => Ok(Self::ViewProject),
            "view_issues" => Ok(Self::ViewIssues),
            "edit_issues" => Ok(Self::EditIssues),
            "view_wiki" => Ok(Self::ViewWiki),
            "view_files" => Ok(Self::ViewFiles),
            "view_time_entries" => Ok(Self::ViewTimeEntries),
            "use_webhooks" => Ok(Self::UseWebhooks),
            "manage_members" => Ok(Self::ManageMembers),
            _ => Err(AppError::Validation(format!(
                "unknown permission value '{value}'"
            ))),
        }
    }
}
