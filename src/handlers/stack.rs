use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::admin::DeleteResponse;
use crate::handlers::common::require_field;
use crate::models::{Stack, StackInput};
use crate::repositories::StackRepository;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct StackResponse {
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
    /// First attachment URL, "" when no logo is set
    #[serde(rename = "Logo")]
    pub logo: String,
}

impl From<Stack> for StackResponse {
    fn from(s: Stack) -> Self {
        Self {
            id: s.id,
            name: s.name,
            logo: s.logo,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStackRequest {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Logo")]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStackRequest {
    pub id: Option<String>,
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Logo")]
    pub logo: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteStackRequest {
    pub id: Option<String>,
}

// ============ Handlers ============

/// List all stacks
#[utoipa::path(
    get,
    path = "/api/stacks",
    responses(
        (status = 200, description = "All stacks", body = [StackResponse])
    ),
    tag = "Stacks"
)]
pub async fn list_stacks(State(state): State<AppState>) -> AppResult<Json<Vec<StackResponse>>> {
    let stacks = StackRepository::list(&state.store).await?;
    Ok(Json(stacks.into_iter().map(Into::into).collect()))
}

/// Create a stack
#[utoipa::path(
    post,
    path = "/api/stacks",
    request_body = CreateStackRequest,
    responses(
        (status = 200, description = "Created stack", body = StackResponse),
        (status = 400, description = "Name is required")
    ),
    tag = "Stacks"
)]
pub async fn create_stack(
    State(state): State<AppState>,
    Json(payload): Json<CreateStackRequest>,
) -> AppResult<Json<StackResponse>> {
    let name = require_field(payload.name, "Name")?;

    let input = StackInput {
        name,
        logo: payload.logo,
    };

    let stack = StackRepository::create(&state.store, &input).await?;
    Ok(Json(stack.into()))
}

/// Update a stack
#[utoipa::path(
    put,
    path = "/api/stacks",
    request_body = UpdateStackRequest,
    responses(
        (status = 200, description = "Updated stack", body = StackResponse),
        (status = 400, description = "id and Name are required"),
        (status = 404, description = "No such stack")
    ),
    tag = "Stacks"
)]
pub async fn update_stack(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStackRequest>,
) -> AppResult<Json<StackResponse>> {
    let id = require_field(payload.id, "id")?;
    let name = require_field(payload.name, "Name")?;

    let input = StackInput {
        name,
        logo: payload.logo,
    };

    let stack = StackRepository::update(&state.store, &id, &input).await?;
    Ok(Json(stack.into()))
}

/// Delete a stack. Projects still referencing it keep the dangling id;
/// readers resolve it as an unknown placeholder.
#[utoipa::path(
    delete,
    path = "/api/stacks",
    request_body = DeleteStackRequest,
    responses(
        (status = 200, description = "Stack deleted", body = DeleteResponse),
        (status = 400, description = "id is required"),
        (status = 404, description = "No such stack")
    ),
    tag = "Stacks"
)]
pub async fn delete_stack(
    State(state): State<AppState>,
    Json(payload): Json<DeleteStackRequest>,
) -> AppResult<Json<DeleteResponse>> {
    let id = require_field(payload.id, "id")?;

    StackRepository::delete(&state.store, &id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
