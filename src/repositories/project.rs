use futures::future::join_all;

use crate::error::{AppError, AppResult};
use crate::models::{CreateProject, Project, ProjectDetail, Stack, Student, UpdateProject};
use crate::store::{self, quote_formula_str, ListQuery, StoreClient};

/// Project operations against the external store
pub struct ProjectRepository;

impl ProjectRepository {
    /// List published projects, optionally narrowed by a case-insensitive
    /// substring over name or description. The search is pushed down to the
    /// store as a single filter formula.
    pub async fn list_published(
        store: &StoreClient,
        search: Option<&str>,
    ) -> AppResult<Vec<Project>> {
        let formula = match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => {
                let needle = quote_formula_str(term);
                format!(
                    r#"AND(Published = TRUE(), OR(FIND(LOWER({needle}), LOWER({{Name}} & "")), FIND(LOWER({needle}), LOWER({{Description}} & ""))))"#
                )
            }
            None => "Published = TRUE()".to_string(),
        };

        let records = store
            .list(store::PROJECTS, &ListQuery::filtered(formula))
            .await?;

        Ok(records.into_iter().map(Project::from).collect())
    }

    /// List every project regardless of publish state
    pub async fn list_all(store: &StoreClient) -> AppResult<Vec<Project>> {
        let records = store.list(store::PROJECTS, &ListQuery::default()).await?;
        Ok(records.into_iter().map(Project::from).collect())
    }

    /// Find exactly one project by slug
    pub async fn find_by_slug(store: &StoreClient, slug: &str) -> AppResult<Project> {
        let formula = format!("Slug = {}", quote_formula_str(slug));
        let records = store
            .list(store::PROJECTS, &ListQuery::filtered(formula).with_max(1))
            .await?;

        records
            .into_iter()
            .next()
            .map(Project::from)
            .ok_or_else(|| AppError::NotFound("Project".to_string()))
    }

    /// Find a project by slug and resolve its stack and author references
    /// with per-id lookups. A reference whose record was deleted resolves
    /// to an unknown placeholder instead of failing the whole read.
    pub async fn find_detail_by_slug(store: &StoreClient, slug: &str) -> AppResult<ProjectDetail> {
        let project = Self::find_by_slug(store, slug).await?;

        let stack_lookups = join_all(
            project
                .stacks
                .iter()
                .map(|id| async move { (id.clone(), store.get(store::STACKS, id).await) }),
        )
        .await;

        let mut stacks = Vec::with_capacity(stack_lookups.len());
        for (id, result) in stack_lookups {
            match result {
                Ok(record) => stacks.push(Stack::from(record)),
                Err(AppError::NotFound(_)) => stacks.push(Stack::unknown(&id)),
                Err(err) => return Err(err),
            }
        }

        let author_lookups = join_all(
            project
                .authors
                .iter()
                .map(|id| async move { (id.clone(), store.get(store::STUDENTS, id).await) }),
        )
        .await;

        let mut authors = Vec::with_capacity(author_lookups.len());
        for (id, result) in author_lookups {
            match result {
                Ok(record) => authors.push(Student::from(record)),
                Err(AppError::NotFound(_)) => authors.push(Student::unknown(&id)),
                Err(err) => return Err(err),
            }
        }

        Ok(ProjectDetail {
            project,
            stacks,
            authors,
        })
    }

    pub async fn create(store: &StoreClient, input: &CreateProject) -> AppResult<Project> {
        let record = store.create(store::PROJECTS, input.to_fields()).await?;
        Ok(record.into())
    }

    pub async fn update(
        store: &StoreClient,
        id: &str,
        input: &UpdateProject,
    ) -> AppResult<Project> {
        let record = store.update(store::PROJECTS, id, input.to_fields()).await?;
        Ok(record.into())
    }

    pub async fn delete(store: &StoreClient, id: &str) -> AppResult<()> {
        store.delete(store::PROJECTS, id).await
    }

    /// Write the like counter. Callers serialize the surrounding
    /// read-modify-write through `AppState::like_mutex`.
    pub async fn set_likes(store: &StoreClient, id: &str, likes: u64) -> AppResult<Project> {
        let mut fields = serde_json::Map::new();
        fields.insert("Likes".to_string(), serde_json::json!(likes));

        let record = store.update(store::PROJECTS, id, fields).await?;
        Ok(record.into())
    }
}
