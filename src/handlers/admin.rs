use std::collections::HashMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::common::require_field;
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repositories::{ProjectRepository, StackRepository, StudentRepository};
use crate::state::AppState;

// ============ Request/Response DTOs ============
//
// The admin surface keeps the store's capitalized field names, as the
// backoffice forms were written against them.

/// Admin project row, enriched with resolved stack and author names
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminProjectResponse {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Published")]
    pub published: bool,
    #[serde(rename = "Likes")]
    pub likes: u64,
    #[serde(rename = "Slug")]
    pub slug: String,
    #[serde(rename = "Stacks")]
    pub stacks: Vec<String>,
    #[serde(rename = "Authors")]
    pub authors: Vec<String>,
    #[serde(rename = "Assets")]
    pub assets: Vec<String>,
    #[serde(rename = "StacksNames")]
    pub stacks_names: Vec<String>,
    #[serde(rename = "AuthorsNames")]
    pub authors_names: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Published", default)]
    pub published: bool,
    #[serde(rename = "Stacks", default)]
    pub stacks: Vec<String>,
    #[serde(rename = "Authors", default)]
    pub authors: Vec<String>,
    #[serde(rename = "Assets", default)]
    pub assets: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Published", default)]
    pub published: bool,
    #[serde(rename = "Stacks")]
    pub stacks: Option<Vec<String>>,
    #[serde(rename = "Authors")]
    pub authors: Option<Vec<String>>,
    #[serde(rename = "Assets")]
    pub assets: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteProjectRequest {
    pub id: Option<String>,
}

/// Shape returned by create and update. Slug and Likes are store-owned and
/// deliberately absent.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectWriteResponse {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Published")]
    pub published: bool,
    #[serde(rename = "Stacks")]
    pub stacks: Vec<String>,
    #[serde(rename = "Authors")]
    pub authors: Vec<String>,
    #[serde(rename = "Assets")]
    pub assets: Vec<String>,
}

impl From<Project> for ProjectWriteResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            published: p.published,
            stacks: p.stacks,
            authors: p.authors,
            assets: p.assets,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
}

// ============ Handlers ============

/// List every project regardless of publish state, with stack and author
/// names joined in memory from parallel full-table fetches
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    responses(
        (status = 200, description = "All projects with resolved names", body = [AdminProjectResponse]),
        (status = 500, description = "External store unreachable")
    ),
    tag = "Admin"
)]
pub async fn list_all_projects(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AdminProjectResponse>>> {
    let (projects, stacks, students) = tokio::try_join!(
        ProjectRepository::list_all(&state.store),
        StackRepository::list(&state.store),
        StudentRepository::list(&state.store),
    )?;

    let stack_names: HashMap<String, String> =
        stacks.into_iter().map(|s| (s.id, s.name)).collect();
    let student_names: HashMap<String, String> = students
        .into_iter()
        .map(|s| (s.id.clone(), s.full_name()))
        .collect();

    let rows = projects
        .into_iter()
        .map(|p| {
            let stacks_names = p
                .stacks
                .iter()
                .map(|id| {
                    stack_names
                        .get(id)
                        .cloned()
                        .unwrap_or_else(|| "Unknown stack".to_string())
                })
                .collect();
            let authors_names = p
                .authors
                .iter()
                .map(|id| {
                    student_names
                        .get(id)
                        .cloned()
                        .unwrap_or_else(|| "Unknown author".to_string())
                })
                .collect();

            AdminProjectResponse {
                id: p.id,
                name: p.name,
                description: p.description,
                published: p.published,
                likes: p.likes,
                slug: p.slug,
                stacks: p.stacks,
                authors: p.authors,
                assets: p.assets,
                stacks_names,
                authors_names,
            }
        })
        .collect();

    Ok(Json(rows))
}

/// Create a project. Published defaults to false; Slug and Likes are
/// assigned by the external store.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Created project", body = ProjectWriteResponse),
        (status = 400, description = "Name is required")
    ),
    tag = "Admin"
)]
pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> AppResult<Json<ProjectWriteResponse>> {
    let name = require_field(payload.name, "Name")?;

    let input = CreateProject {
        name,
        description: payload.description,
        published: payload.published,
        stacks: payload.stacks,
        authors: payload.authors,
        assets: payload.assets,
    };

    let project = ProjectRepository::create(&state.store, &input).await?;
    Ok(Json(project.into()))
}

/// Update a project. Reference lists absent from the request are left
/// untouched in the store; the like counter is never part of the payload.
#[utoipa::path(
    put,
    path = "/api/admin/projects",
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = ProjectWriteResponse),
        (status = 400, description = "id and Name are required"),
        (status = 404, description = "No such project")
    ),
    tag = "Admin"
)]
pub async fn update_project(
    State(state): State<AppState>,
    Json(payload): Json<UpdateProjectRequest>,
) -> AppResult<Json<ProjectWriteResponse>> {
    let id = require_field(payload.id, "id")?;
    let name = require_field(payload.name, "Name")?;

    let input = UpdateProject {
        name,
        description: payload.description,
        published: payload.published,
        stacks: payload.stacks,
        authors: payload.authors,
        assets: payload.assets,
    };

    let project = ProjectRepository::update(&state.store, &id, &input).await?;
    Ok(Json(project.into()))
}

/// Delete a project (hard delete in the external store)
#[utoipa::path(
    delete,
    path = "/api/admin/projects",
    request_body = DeleteProjectRequest,
    responses(
        (status = 200, description = "Project deleted", body = DeleteResponse),
        (status = 400, description = "id is required"),
        (status = 404, description = "No such project")
    ),
    tag = "Admin"
)]
pub async fn delete_project(
    State(state): State<AppState>,
    Json(payload): Json<DeleteProjectRequest>,
) -> AppResult<Json<DeleteResponse>> {
    let id = require_field(payload.id, "id")?;

    ProjectRepository::delete(&state.store, &id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
