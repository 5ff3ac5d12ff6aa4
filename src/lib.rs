// Library crate for classfolio
// Exports modules for use by the server binary and the integration tests

pub mod config;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;
pub mod store;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    admin_dashboard, admin_projects_page, admin_stacks_page, admin_students_page, create_project,
    create_stack, create_student, delete_project, delete_stack, delete_student, get_project, home,
    like_project, list_all_projects, list_projects, list_stacks, list_students, login, login_page,
    logout, me, project_page, update_project, update_stack, update_student,
};
use crate::middlewares::admin_guard;
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Admin backoffice pages (the guard covers presentation routes only)
    let admin_pages = Router::new()
        .route("/admin", get(admin_dashboard))
        .route("/admin/projects", get(admin_projects_page))
        .route("/admin/stacks", get(admin_stacks_page))
        .route("/admin/students", get(admin_students_page))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin_guard));

    Router::new()
        // Public pages
        .route("/", get(home))
        .route("/projects/{slug}", get(project_page))
        .route("/login", get(login_page))
        // Public project API
        .route("/api/projects", get(list_projects))
        .route("/api/projects/{slug}", get(get_project))
        .route("/api/projects/{slug}/like", patch(like_project))
        // Admin project API
        .route("/api/admin/projects", get(list_all_projects))
        .route("/api/admin/projects", post(create_project))
        .route("/api/admin/projects", put(update_project))
        .route("/api/admin/projects", delete(delete_project))
        // Stack API
        .route("/api/stacks", get(list_stacks))
        .route("/api/stacks", post(create_stack))
        .route("/api/stacks", put(update_stack))
        .route("/api/stacks", delete(delete_stack))
        // Student API
        .route("/api/students", get(list_students))
        .route("/api/students", post(create_student))
        .route("/api/students", put(update_student))
        .route("/api/students", delete(delete_student))
        // Auth
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/me", get(me))
        // Guarded pages
        .merge(admin_pages)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
