use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gantry_core::AppResult;
use gantry_domain::{
    CustomField, FieldId, FieldOwner, Principal, ProjectId, RecordId, RoleSet, SearchTokens,
    SearchableRecord,
};
use serde::{Deserialize, Serialize};

use crate::{AccessService, FieldVisibilityService};

/// Port for the indexing collaborator.
#[async_trait]
pub trait SearchIndex: Send + Sync {
    /// Returns candidate records containing any token in any indexed text,
    /// custom field values included. Visibility is not the index's concern.
    async fn matching_records(&self, tokens: &SearchTokens) -> AppResult<Vec<SearchableRecord>>;
}

/// Port for custom field definitions.
#[async_trait]
pub trait FieldCatalog: Send + Sync {
    /// Lists every field definition.
    async fn list_fields(&self) -> AppResult<Vec<CustomField>>;

    /// Finds a field definition by id.
    async fn find_field(&self, field_id: FieldId) -> AppResult<Option<CustomField>>;
}

/// Options refining a search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Require every token to match the visible content (the default) instead
    /// of any single token.
    pub all_words: bool,
    /// Match against record titles only.
    pub titles_only: bool,
    /// Restrict results to one project.
    pub project: Option<ProjectId>,
    /// Number of ordered results to skip.
    pub offset: usize,
    /// Maximum number of results to return.
    pub limit: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            all_words: true,
            titles_only: false,
            project: None,
            offset: 0,
            limit: None,
        }
    }
}

/// Custom field match exposed in a result payload. Only visible fields appear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedField {
    /// Matched field id.
    pub field_id: FieldId,
    /// Matched field name.
    pub name: String,
    /// Stored value the match occurred in.
    pub value: String,
}

/// One search hit, carrying only content visible to the requesting principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matched record id.
    pub record_id: RecordId,
    /// Owning entity kind.
    pub kind: FieldOwner,
    /// Owning project.
    pub project_id: ProjectId,
    /// Record title.
    pub title: String,
    /// Visible custom field matches.
    pub matched_fields: Vec<MatchedField>,
    /// Ranking timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Application service executing visibility-scoped text search.
///
/// Stateless per call: candidates come from the index port, then every match
/// is re-evaluated against the content actually visible to the principal, so
/// a record whose only match sits in a restricted field is dropped.
#[derive(Clone)]
pub struct SearchService {
    index: Arc<dyn SearchIndex>,
    fields: Arc<dyn FieldCatalog>,
    access: AccessService,
}

impl SearchService {
    /// Creates a new search service from its collaborator ports.
    #[must_use]
    pub fn new(
        index: Arc<dyn SearchIndex>,
        fields: Arc<dyn FieldCatalog>,
        access: AccessService,
    ) -> Self {
        Self {
            index,
            fields,
            access,
        }
    }

    /// Runs a text query as the given principal.
    ///
    /// Results are ordered by update timestamp then record id, both
    /// descending, before pagination is applied.
    pub async fn search(
        &self,
        question: &str,
        principal: &Principal,
        options: &SearchOptions,
    ) -> AppResult<Vec<SearchResult>> {
        let tokens = SearchTokens::parse(question);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let candidates = self.index.matching_records(&tokens).await?;
        let fields: HashMap<FieldId, CustomField> = self
            .fields
            .list_fields()
            .await?
            .into_iter()
            .map(|field| (field.id(), field))
            .collect();

        // Role resolution is cached per project for the duration of the call.
        let mut role_cache: HashMap<ProjectId, RoleSet> = HashMap::new();
        let mut access_cache: HashMap<ProjectId, bool> = HashMap::new();

        let candidate_count = candidates.len();
        let mut results = Vec::new();

        for record in candidates {
            let project_id = record.project_id();

            if options.project.is_some_and(|scope| scope != project_id) {
                continue;
            }

            let accessible = match access_cache.get(&project_id) {
                Some(accessible) => *accessible,
                None => {
                    let accessible = self
                        .access
                        .can_access_project(principal, project_id)
                        .await?;
                    access_cache.insert(project_id, accessible);
                    accessible
                }
            };
            if !accessible {
                continue;
            }

            let roles = match role_cache.get(&project_id) {
                Some(roles) => roles.clone(),
                None => {
                    let roles = self
                        .access
                        .effective_roles(principal, Some(project_id))
                        .await?;
                    role_cache.insert(project_id, roles.clone());
                    roles
                }
            };

            if let Some(result) = Self::evaluate(&record, &tokens, &fields, principal, &roles, options)
            {
                results.push(result);
            }
        }

        results.sort_by(|left, right| {
            right
                .updated_at
                .cmp(&left.updated_at)
                .then_with(|| right.record_id.cmp(&left.record_id))
        });

        let page: Vec<SearchResult> = results
            .into_iter()
            .skip(options.offset)
            .take(options.limit.unwrap_or(usize::MAX))
            .collect();

        tracing::debug!(
            tokens = tokens.len(),
            candidates = candidate_count,
            results = page.len(),
            "search completed"
        );

        Ok(page)
    }

    /// Re-evaluates a candidate against the principal's visible content.
    fn evaluate(
        record: &SearchableRecord,
        tokens: &SearchTokens,
        fields: &HashMap<FieldId, CustomField>,
        principal: &Principal,
        roles: &RoleSet,
        options: &SearchOptions,
    ) -> Option<SearchResult> {
        let mut matched_tokens = tokens.matching_indices(record.title().as_str());
        let mut matched_fields = Vec::new();

        if !options.titles_only {
            matched_tokens.extend(tokens.matching_indices(record.body()));

            for (field_id, value) in record.custom_values() {
                // Values without a known definition stay hidden.
                let Some(field) = fields.get(field_id) else {
                    continue;
                };
                if !field.is_searchable() {
                    continue;
                }
                if !FieldVisibilityService::is_visible_with_roles(field, principal, roles) {
                    continue;
                }

                let matched = tokens.matching_indices(value);
                if matched.is_empty() {
                    continue;
                }

                matched_tokens.extend(matched);
                matched_fields.push(MatchedField {
                    field_id: *field_id,
                    name: field.name().as_str().to_owned(),
                    value: value.clone(),
                });
            }
        }

        let keeps = if options.all_words {
            matched_tokens.len() == tokens.len()
        } else {
            !matched_tokens.is_empty()
        };

        keeps.then(|| SearchResult {
            record_id: record.id(),
            kind: record.kind(),
            project_id: record.project_id(),
            title: record.title().as_str().to_owned(),
            matched_fields,
            updated_at: record.updated_at(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};
    use std::sync::Arc;

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use gantry_core::AppResult;
    use gantry_domain::{
        BuiltinRole, CustomField, FieldFormat, FieldId, FieldOwner, Membership, Principal,
        PrincipalId, Project, ProjectId, RecordId, Role, RoleId, SearchTokens, SearchableRecord,
    };
    use serde_json::json;

    use crate::{AccessService, DirectoryRepository};

    use super::{FieldCatalog, SearchIndex, SearchOptions, SearchService};

    #[derive(Default)]
    struct FakeDirectoryRepository {
        projects: Vec<Project>,
        roles: Vec<Role>,
        memberships: Vec<Membership>,
    }

    #[async_trait]
    impl DirectoryRepository for FakeDirectoryRepository {
        async fn find_project(&self, project_id: ProjectId) -> AppResult<Option<Project>> {
            Ok(self
                .projects
                .iter()
                .find(|project| project.id() == project_id)
                .cloned())
        }

        async fn list_roles(&self) -> AppResult<Vec<Role>> {
            Ok(self.roles.clone())
        }

        async fn builtin_role(&self, kind: BuiltinRole) -> AppResult<Option<Role>> {
            Ok(self
                .roles
                .iter()
                .find(|role| role.builtin_kind() == Some(kind))
                .cloned())
        }

        async fn memberships_for_principal(
            &self,
            principal_id: PrincipalId,
        ) -> AppResult<Vec<Membership>> {
            Ok(self
                .memberships
                .iter()
                .filter(|membership| membership.principal_id() == principal_id)
                .cloned()
                .collect())
        }
    }

    struct FakeSearchIndex {
        records: Vec<SearchableRecord>,
    }

    #[async_trait]
    impl SearchIndex for FakeSearchIndex {
        async fn matching_records(
            &self,
            tokens: &SearchTokens,
        ) -> AppResult<Vec<SearchableRecord>> {
            Ok(self
                .records
                .iter()
                .filter(|record| {
                    tokens.any_match(record.title().as_str())
                        || tokens.any_match(record.body())
                        || record
                            .custom_values()
                            .values()
                            .any(|value| tokens.any_match(value))
                })
                .cloned()
                .collect())
        }
    }

    struct FakeFieldCatalog {
        fields: Vec<CustomField>,
    }

    #[async_trait]
    impl FieldCatalog for FakeFieldCatalog {
        async fn list_fields(&self) -> AppResult<Vec<CustomField>> {
            Ok(self.fields.clone())
        }

        async fn find_field(&self, field_id: FieldId) -> AppResult<Option<CustomField>> {
            Ok(self
                .fields
                .iter()
                .find(|field| field.id() == field_id)
                .cloned())
        }
    }

    fn timestamp(value: &str) -> DateTime<Utc> {
        value.parse().unwrap_or_else(|_| unreachable!())
    }

    fn public_project(identifier: &str) -> Project {
        Project::new(ProjectId::new(), identifier, identifier, true, false)
            .unwrap_or_else(|_| unreachable!())
    }

    fn restricted_field(name: &str, role_ids: BTreeSet<RoleId>) -> CustomField {
        CustomField::new(
            FieldId::new(),
            name,
            FieldOwner::Issue,
            FieldFormat::String,
            true,
            false,
            role_ids,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    fn visible_field(name: &str) -> CustomField {
        CustomField::new(
            FieldId::new(),
            name,
            FieldOwner::Issue,
            FieldFormat::String,
            true,
            true,
            BTreeSet::new(),
        )
        .unwrap_or_else(|_| unreachable!())
    }

    fn record(
        project_id: ProjectId,
        title: &str,
        body: &str,
        custom_values: BTreeMap<FieldId, String>,
        updated_at: DateTime<Utc>,
    ) -> SearchableRecord {
        SearchableRecord::new(
            RecordId::new(),
            FieldOwner::Issue,
            project_id,
            title,
            body,
            custom_values,
            updated_at,
        )
        .unwrap_or_else(|_| unreachable!())
    }

    fn service(
        directory: FakeDirectoryRepository,
        fields: Vec<CustomField>,
        records: Vec<SearchableRecord>,
    ) -> SearchService {
        SearchService::new(
            Arc::new(FakeSearchIndex { records }),
            Arc::new(FakeFieldCatalog { fields }),
            AccessService::new(Arc::new(directory)),
        )
    }

    fn any_word_options() -> SearchOptions {
        SearchOptions {
            all_words: false,
            ..SearchOptions::default()
        }
    }

    #[tokio::test]
    async fn empty_question_returns_nothing() {
        let service = service(FakeDirectoryRepository::default(), Vec::new(), Vec::new());

        let results = service
            .search("  a ", &Principal::anonymous(), &SearchOptions::default())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn restricted_field_match_is_dropped_without_the_role() {
        let project = public_project("tracker");
        let reporter = Role::new(RoleId::new(), "Reporter", BTreeSet::new())
            .unwrap_or_else(|_| unreachable!());
        let field = restricted_field("Billing code", BTreeSet::from([reporter.id()]));
        let member_id = PrincipalId::new();
        let records = vec![record(
            project.id(),
            "Quarterly invoice",
            "",
            BTreeMap::from([(field.id(), "ACME-42".to_owned())]),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                roles: vec![reporter.clone()],
                memberships: vec![Membership::new(
                    member_id,
                    Some(project.id()),
                    BTreeSet::from([reporter.id()]),
                )
                .unwrap_or_else(|_| unreachable!())],
            },
            vec![field],
            records,
        );

        let outsider = service
            .search("acme", &Principal::user(PrincipalId::new()), &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(outsider.is_empty());

        let member = service
            .search("acme", &Principal::user(member_id), &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(member.len(), 1);
        assert_eq!(member[0].matched_fields.len(), 1);
        assert_eq!(member[0].matched_fields[0].value, "ACME-42");
    }

    #[tokio::test]
    async fn result_payload_never_carries_restricted_values() {
        let project = public_project("tracker");
        let hidden = restricted_field("Billing code", BTreeSet::from([RoleId::new()]));
        let shown = visible_field("Severity");
        let records = vec![record(
            project.id(),
            "Crash when saving invoice",
            "",
            BTreeMap::from([
                (hidden.id(), "crash-related secret".to_owned()),
                (shown.id(), "crash severity high".to_owned()),
            ]),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            vec![hidden.clone(), shown.clone()],
            records,
        );

        let results = service
            .search("crash", &Principal::anonymous(), &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);

        let matched_ids: Vec<FieldId> = results[0]
            .matched_fields
            .iter()
            .map(|matched| matched.field_id)
            .collect();
        assert_eq!(matched_ids, [shown.id()]);
    }

    #[tokio::test]
    async fn result_payload_serializes_with_stable_keys() {
        let project = public_project("tracker");
        let severity = visible_field("Severity");
        let records = vec![record(
            project.id(),
            "Crash on startup",
            "",
            BTreeMap::from([(severity.id(), "critical crash".to_owned())]),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            vec![severity],
            records,
        );

        let results = service
            .search("crash", &Principal::anonymous(), &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);

        let payload = serde_json::to_value(&results[0]).unwrap_or_else(|_| unreachable!());
        assert_eq!(payload["kind"], json!("issue"));
        assert_eq!(payload["title"], json!("Crash on startup"));
        assert_eq!(payload["matched_fields"][0]["name"], json!("Severity"));
        assert_eq!(payload["matched_fields"][0]["value"], json!("critical crash"));
    }

    #[tokio::test]
    async fn admin_sees_restricted_matches() {
        let project = public_project("tracker");
        let field = restricted_field("Billing code", BTreeSet::from([RoleId::new()]));
        let records = vec![record(
            project.id(),
            "Quarterly invoice",
            "",
            BTreeMap::from([(field.id(), "ACME-42".to_owned())]),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            vec![field],
            records,
        );

        let results = service
            .search(
                "acme",
                &Principal::admin(PrincipalId::new()),
                &any_word_options(),
            )
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn role_scope_is_per_project_across_results() {
        let granted = public_project("alpha");
        let other = public_project("beta");
        let reporter = Role::new(RoleId::new(), "Reporter", BTreeSet::new())
            .unwrap_or_else(|_| unreachable!());
        let field = restricted_field("Billing code", BTreeSet::from([reporter.id()]));
        let member_id = PrincipalId::new();
        let records = vec![
            record(
                granted.id(),
                "Alpha invoice",
                "",
                BTreeMap::from([(field.id(), "ACME-42".to_owned())]),
                timestamp("2026-03-01T10:00:00Z"),
            ),
            record(
                other.id(),
                "Beta invoice",
                "",
                BTreeMap::from([(field.id(), "ACME-42".to_owned())]),
                timestamp("2026-03-02T10:00:00Z"),
            ),
        ];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![granted.clone(), other.clone()],
                roles: vec![reporter.clone()],
                memberships: vec![Membership::new(
                    member_id,
                    Some(granted.id()),
                    BTreeSet::from([reporter.id()]),
                )
                .unwrap_or_else(|_| unreachable!())],
            },
            vec![field],
            records,
        );

        let results = service
            .search("acme", &Principal::user(member_id), &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].project_id, granted.id());
    }

    #[tokio::test]
    async fn inaccessible_projects_are_excluded() {
        let private = Project::new(ProjectId::new(), "private", "Private", false, false)
            .unwrap_or_else(|_| unreachable!());
        let archived = Project::new(ProjectId::new(), "archived", "Archived", true, true)
            .unwrap_or_else(|_| unreachable!());
        let records = vec![
            record(
                private.id(),
                "Crash in private project",
                "",
                BTreeMap::new(),
                timestamp("2026-03-01T10:00:00Z"),
            ),
            record(
                archived.id(),
                "Crash in archived project",
                "",
                BTreeMap::new(),
                timestamp("2026-03-02T10:00:00Z"),
            ),
        ];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![private.clone(), archived.clone()],
                ..FakeDirectoryRepository::default()
            },
            Vec::new(),
            records,
        );

        let results = service
            .search(
                "crash",
                &Principal::user(PrincipalId::new()),
                &any_word_options(),
            )
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn all_words_requires_every_token() {
        let project = public_project("tracker");
        let records = vec![record(
            project.id(),
            "Crash on startup",
            "",
            BTreeMap::new(),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            Vec::new(),
            records,
        );
        let principal = Principal::anonymous();

        let all_words = service
            .search("crash login", &principal, &SearchOptions::default())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(all_words.is_empty());

        let any_word = service
            .search("crash login", &principal, &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(any_word.len(), 1);
    }

    #[tokio::test]
    async fn all_words_may_span_title_and_visible_fields() {
        let project = public_project("tracker");
        let severity = visible_field("Severity");
        let records = vec![record(
            project.id(),
            "Crash on startup",
            "",
            BTreeMap::from([(severity.id(), "critical".to_owned())]),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            vec![severity],
            records,
        );

        let results = service
            .search(
                "crash critical",
                &Principal::anonymous(),
                &SearchOptions::default(),
            )
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn titles_only_ignores_bodies_and_field_values() {
        let project = public_project("tracker");
        let severity = visible_field("Severity");
        let records = vec![
            record(
                project.id(),
                "Crash on startup",
                "",
                BTreeMap::new(),
                timestamp("2026-03-01T10:00:00Z"),
            ),
            record(
                project.id(),
                "Slow dashboard",
                "crashes frequently",
                BTreeMap::from([(severity.id(), "crash".to_owned())]),
                timestamp("2026-03-02T10:00:00Z"),
            ),
        ];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            vec![severity],
            records,
        );

        let options = SearchOptions {
            titles_only: true,
            all_words: false,
            ..SearchOptions::default()
        };
        let results = service
            .search("crash", &Principal::anonymous(), &options)
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Crash on startup");
        assert!(results[0].matched_fields.is_empty());
    }

    #[tokio::test]
    async fn results_are_ordered_and_paginated() {
        let project = public_project("tracker");
        let records = vec![
            record(
                project.id(),
                "Crash one",
                "",
                BTreeMap::new(),
                timestamp("2026-03-01T10:00:00Z"),
            ),
            record(
                project.id(),
                "Crash two",
                "",
                BTreeMap::new(),
                timestamp("2026-03-03T10:00:00Z"),
            ),
            record(
                project.id(),
                "Crash three",
                "",
                BTreeMap::new(),
                timestamp("2026-03-02T10:00:00Z"),
            ),
        ];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            Vec::new(),
            records,
        );
        let principal = Principal::anonymous();

        let ordered = service
            .search("crash", &principal, &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        let titles: Vec<&str> = ordered.iter().map(|result| result.title.as_str()).collect();
        assert_eq!(titles, ["Crash two", "Crash three", "Crash one"]);

        let options = SearchOptions {
            all_words: false,
            offset: 1,
            limit: Some(1),
            ..SearchOptions::default()
        };
        let page = service
            .search("crash", &principal, &options)
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].title, "Crash three");
    }

    #[tokio::test]
    async fn project_scope_restricts_results() {
        let alpha = public_project("alpha");
        let beta = public_project("beta");
        let records = vec![
            record(
                alpha.id(),
                "Crash in alpha",
                "",
                BTreeMap::new(),
                timestamp("2026-03-01T10:00:00Z"),
            ),
            record(
                beta.id(),
                "Crash in beta",
                "",
                BTreeMap::new(),
                timestamp("2026-03-02T10:00:00Z"),
            ),
        ];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![alpha.clone(), beta.clone()],
                ..FakeDirectoryRepository::default()
            },
            Vec::new(),
            records,
        );

        let options = SearchOptions {
            all_words: false,
            project: Some(alpha.id()),
            ..SearchOptions::default()
        };
        let results = service
            .search("crash", &Principal::anonymous(), &options)
            .await
            .unwrap_or_else(|_| unreachable!());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].project_id, alpha.id());
    }

    #[tokio::test]
    async fn values_without_a_definition_stay_hidden() {
        let project = public_project("tracker");
        let records = vec![record(
            project.id(),
            "Quarterly invoice",
            "",
            BTreeMap::from([(FieldId::new(), "ACME-42".to_owned())]),
            timestamp("2026-03-01T10:00:00Z"),
        )];
        let service = service(
            FakeDirectoryRepository {
                projects: vec![project.clone()],
                ..FakeDirectoryRepository::default()
            },
            Vec::new(),
            records,
        );

        let results = service
            .search("acme", &Principal::anonymous(), &any_word_options())
            .await
            .unwrap_or_else(|_| unreachable!());
        assert!(results.is_empty());
    }
}
