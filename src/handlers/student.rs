use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::admin::DeleteResponse;
use crate::handlers::common::require_field;
use crate::models::{Student, StudentInput};
use crate::repositories::StudentRepository;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: String,
    #[serde(rename = "Firstname")]
    pub firstname: String,
    #[serde(rename = "Lastname")]
    pub lastname: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Class")]
    pub class: String,
}

impl From<Student> for StudentResponse {
    fn from(s: Student) -> Self {
        Self {
            id: s.id,
            firstname: s.firstname,
            lastname: s.lastname,
            email: s.email,
            class: s.class,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateStudentRequest {
    #[serde(rename = "Firstname")]
    pub firstname: Option<String>,
    #[serde(rename = "Lastname")]
    pub lastname: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Class")]
    pub class: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStudentRequest {
    pub id: Option<String>,
    #[serde(rename = "Firstname")]
    pub firstname: Option<String>,
    #[serde(rename = "Lastname")]
    pub lastname: Option<String>,
    #[serde(rename = "Email")]
    pub email: Option<String>,
    #[serde(rename = "Class")]
    pub class: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteStudentRequest {
    pub id: Option<String>,
}

// ============ Handlers ============

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    responses(
        (status = 200, description = "All students", body = [StudentResponse])
    ),
    tag = "Students"
)]
pub async fn list_students(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<StudentResponse>>> {
    let students = StudentRepository::list(&state.store).await?;
    Ok(Json(students.into_iter().map(Into::into).collect()))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Created student", body = StudentResponse),
        (status = 400, description = "Firstname and Lastname are required")
    ),
    tag = "Students"
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let firstname = require_field(payload.firstname, "Firstname")?;
    let lastname = require_field(payload.lastname, "Lastname")?;

    let input = StudentInput {
        firstname,
        lastname,
        email: payload.email,
        class: payload.class,
    };

    let student = StudentRepository::create(&state.store, &input).await?;
    Ok(Json(student.into()))
}

/// Update a student
#[utoipa::path(
    put,
    path = "/api/students",
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Updated student", body = StudentResponse),
        (status = 400, description = "id, Firstname and Lastname are required"),
        (status = 404, description = "No such student")
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStudentRequest>,
) -> AppResult<Json<StudentResponse>> {
    let id = require_field(payload.id, "id")?;
    let firstname = require_field(payload.firstname, "Firstname")?;
    let lastname = require_field(payload.lastname, "Lastname")?;

    let input = StudentInput {
        firstname,
        lastname,
        email: payload.email,
        class: payload.class,
    };

    let student = StudentRepository::update(&state.store, &id, &input).await?;
    Ok(Json(student.into()))
}

/// Delete a student. Projects listing them as an author keep the dangling
/// id and resolve it as an unknown placeholder.
#[utoipa::path(
    delete,
    path = "/api/students",
    request_body = DeleteStudentRequest,
    responses(
        (status = 200, description = "Student deleted", body = DeleteResponse),
        (status = 400, description = "id is required"),
        (status = 404, description = "No such student")
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Json(payload): Json<DeleteStudentRequest>,
) -> AppResult<Json<DeleteResponse>> {
    let id = require_field(payload.id, "id")?;

    StudentRepository::delete(&state.store, &id).await?;
    Ok(Json(DeleteResponse { success: true }))
}
