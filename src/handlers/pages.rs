use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use axum_extra::extract::CookieJar;

use crate::error::AppResult;
use crate::handlers::project::ProjectListParams;
use crate::middlewares::{session_claims, AdminSession};
use crate::models::{Project, ProjectDetail, Stack, Student};
use crate::repositories::{ProjectRepository, StackRepository, StudentRepository};
use crate::state::AppState;

// ============ Templates ============

#[derive(Template, WebTemplate)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub is_admin: bool,
    pub filter: String,
    pub projects: Vec<Project>,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/project.html")]
pub struct ProjectPageTemplate {
    pub is_admin: bool,
    pub detail: ProjectDetail,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/login.html")]
pub struct LoginTemplate {
    pub is_admin: bool,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/admin/dashboard.html")]
pub struct AdminDashboardTemplate {
    pub is_admin: bool,
    pub email: String,
}

/// One row of the admin project table, names pre-joined for display
pub struct AdminProjectRow {
    pub project: Project,
    pub stacks_names: String,
    pub authors_names: String,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/admin/projects.html")]
pub struct AdminProjectsTemplate {
    pub is_admin: bool,
    pub rows: Vec<AdminProjectRow>,
    pub stacks: Vec<Stack>,
    pub students: Vec<Student>,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/admin/stacks.html")]
pub struct AdminStacksTemplate {
    pub is_admin: bool,
    pub stacks: Vec<Stack>,
}

#[derive(Template, WebTemplate)]
#[template(path = "pages/admin/students.html")]
pub struct AdminStudentsTemplate {
    pub is_admin: bool,
    pub students: Vec<Student>,
}

// ============ Public pages ============

/// Home page: published project grid with a search box
pub async fn home(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<ProjectListParams>,
) -> AppResult<HomeTemplate> {
    let projects =
        ProjectRepository::list_published(&state.store, params.filter.as_deref()).await?;

    Ok(HomeTemplate {
        is_admin: session_claims(&jar, &state.config).is_some(),
        filter: params.filter.unwrap_or_default(),
        projects,
    })
}

/// Project detail page with resolved stacks/authors and the like button
pub async fn project_page(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(slug): Path<String>,
) -> AppResult<ProjectPageTemplate> {
    let detail = ProjectRepository::find_detail_by_slug(&state.store, &slug).await?;

    Ok(ProjectPageTemplate {
        is_admin: session_claims(&jar, &state.config).is_some(),
        detail,
    })
}

pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> LoginTemplate {
    LoginTemplate {
        is_admin: session_claims(&jar, &state.config).is_some(),
    }
}

// ============ Admin pages (behind the route guard) ============

pub async fn admin_dashboard(session: AdminSession) -> AppResult<AdminDashboardTemplate> {
    Ok(AdminDashboardTemplate {
        is_admin: true,
        email: session.email,
    })
}

pub async fn admin_projects_page(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<AdminProjectsTemplate> {
    let (projects, stacks, students) = tokio::try_join!(
        ProjectRepository::list_all(&state.store),
        StackRepository::list(&state.store),
        StudentRepository::list(&state.store),
    )?;

    let stack_names: HashMap<String, String> = stacks
        .iter()
        .map(|s| (s.id.clone(), s.name.clone()))
        .collect();
    let student_names: HashMap<String, String> = students
        .iter()
        .map(|s| (s.id.clone(), s.full_name()))
        .collect();

    let rows = projects
        .into_iter()
        .map(|project| {
            let stacks_names = project
                .stacks
                .iter()
                .map(|id| {
                    stack_names
                        .get(id)
                        .cloned()
                        .unwrap_or_else(|| "Unknown stack".to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            let authors_names = project
                .authors
                .iter()
                .map(|id| {
                    student_names
                        .get(id)
                        .cloned()
                        .unwrap_or_else(|| "Unknown author".to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");

            AdminProjectRow {
                project,
                stacks_names,
                authors_names,
            }
        })
        .collect();

    Ok(AdminProjectsTemplate {
        is_admin: true,
        rows,
        stacks,
        students,
    })
}

pub async fn admin_stacks_page(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<AdminStacksTemplate> {
    let stacks = StackRepository::list(&state.store).await?;

    Ok(AdminStacksTemplate {
        is_admin: true,
        stacks,
    })
}

pub async fn admin_students_page(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<AdminStudentsTemplate> {
    let students = StudentRepository::list(&state.store).await?;

    Ok(AdminStudentsTemplate {
        is_admin: true,
        students,
    })
}
