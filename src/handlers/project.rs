use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::AppResult;
use crate::models::{Project, ProjectDetail};
use crate::repositories::ProjectRepository;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectListParams {
    /// Case-insensitive substring matched against name or description
    pub filter: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssetResponse {
    pub url: String,
}

/// Public project shape (lowercase field names, reference ids unresolved)
#[derive(Debug, Serialize, ToSchema)]
pub struct PublicProjectResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub likes: u64,
    pub slug: String,
    pub authors: Vec<String>,
    pub stacks: Vec<String>,
    pub assets: Vec<AssetResponse>,
}

impl From<Project> for PublicProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            likes: p.likes,
            slug: p.slug,
            authors: p.authors,
            stacks: p.stacks,
            assets: p.assets.into_iter().map(|url| AssetResponse { url }).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResolvedStackResponse {
    pub id: String,
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResolvedAuthorResponse {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub class: String,
}

/// Public project detail with stack and author references resolved
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectDetailResponse {
    pub id: String,
    pub name: String,
    pub description: String,
    pub likes: u64,
    pub slug: String,
    pub authors: Vec<ResolvedAuthorResponse>,
    pub stacks: Vec<ResolvedStackResponse>,
    pub assets: Vec<AssetResponse>,
}

impl From<ProjectDetail> for ProjectDetailResponse {
    fn from(detail: ProjectDetail) -> Self {
        Self {
            id: detail.project.id,
            name: detail.project.name,
            description: detail.project.description,
            likes: detail.project.likes,
            slug: detail.project.slug,
            authors: detail
                .authors
                .into_iter()
                .map(|a| ResolvedAuthorResponse {
                    id: a.id,
                    firstname: a.firstname,
                    lastname: a.lastname,
                    class: a.class,
                })
                .collect(),
            stacks: detail
                .stacks
                .into_iter()
                .map(|s| ResolvedStackResponse {
                    id: s.id,
                    name: s.name,
                    logo: s.logo,
                })
                .collect(),
            assets: detail
                .project
                .assets
                .into_iter()
                .map(|url| AssetResponse { url })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LikeRequest {
    pub increment: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LikeResponse {
    pub success: bool,
    pub likes: u64,
}

// ============ Handlers ============

/// List published projects, optionally filtered by a search term
#[utoipa::path(
    get,
    path = "/api/projects",
    params(ProjectListParams),
    responses(
        (status = 200, description = "Published projects", body = [PublicProjectResponse]),
        (status = 500, description = "External store unreachable")
    ),
    tag = "Projects"
)]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<Vec<PublicProjectResponse>>> {
    let projects =
        ProjectRepository::list_published(&state.store, params.filter.as_deref()).await?;

    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Get a single project by slug with resolved stacks and authors
#[utoipa::path(
    get,
    path = "/api/projects/{slug}",
    params(
        ("slug" = String, Path, description = "Project slug")
    ),
    responses(
        (status = 200, description = "Project details", body = ProjectDetailResponse),
        (status = 404, description = "No project with that slug")
    ),
    tag = "Projects"
)]
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<ProjectDetailResponse>> {
    let detail = ProjectRepository::find_detail_by_slug(&state.store, &slug).await?;
    Ok(Json(detail.into()))
}

/// Like or unlike a project. The counter is a read-modify-write against the
/// external store, serialized through an in-process mutex and floored at 0.
#[utoipa::path(
    patch,
    path = "/api/projects/{slug}/like",
    params(
        ("slug" = String, Path, description = "Project slug")
    ),
    request_body = LikeRequest,
    responses(
        (status = 200, description = "New like count", body = LikeResponse),
        (status = 404, description = "No project with that slug")
    ),
    tag = "Projects"
)]
pub async fn like_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<LikeRequest>,
) -> AppResult<Json<LikeResponse>> {
    let _guard = state.like_mutex.lock().await;

    let project = ProjectRepository::find_by_slug(&state.store, &slug).await?;
    let likes = if payload.increment {
        project.likes + 1
    } else {
        project.likes.saturating_sub(1)
    };

    ProjectRepository::set_likes(&state.store, &project.id, likes).await?;

    Ok(Json(LikeResponse {
        success: true,
        likes,
    }))
}
