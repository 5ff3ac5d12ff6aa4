use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use classfolio::config::Config;
use classfolio::handlers::{
    self, AdminProjectResponse, AssetResponse, CreateProjectRequest, CreateStackRequest,
    CreateStudentRequest, DeleteProjectRequest, DeleteResponse, DeleteStackRequest,
    DeleteStudentRequest, LikeRequest, LikeResponse, LoginRequest, LoginResponse, MeResponse,
    ProjectDetailResponse,
    ProjectWriteResponse, PublicProjectResponse, ResolvedAuthorResponse, ResolvedStackResponse,
    StackResponse, StudentResponse, UpdateProjectRequest, UpdateStackRequest,
    UpdateStudentRequest,
};
use classfolio::state::AppState;
use classfolio::{build_router, middlewares};

/// Security scheme for the session cookie
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    middlewares::SESSION_COOKIE,
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::project::like_project,
        handlers::admin::list_all_projects,
        handlers::admin::create_project,
        handlers::admin::update_project,
        handlers::admin::delete_project,
        handlers::stack::list_stacks,
        handlers::stack::create_stack,
        handlers::stack::update_stack,
        handlers::stack::delete_stack,
        handlers::student::list_students,
        handlers::student::create_student,
        handlers::student::update_student,
        handlers::student::delete_student,
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::me,
    ),
    components(schemas(
        PublicProjectResponse,
        ProjectDetailResponse,
        AssetResponse,
        ResolvedStackResponse,
        ResolvedAuthorResponse,
        LikeRequest,
        LikeResponse,
        AdminProjectResponse,
        CreateProjectRequest,
        UpdateProjectRequest,
        DeleteProjectRequest,
        ProjectWriteResponse,
        DeleteResponse,
        StackResponse,
        CreateStackRequest,
        UpdateStackRequest,
        DeleteStackRequest,
        StudentResponse,
        CreateStudentRequest,
        UpdateStudentRequest,
        DeleteStudentRequest,
        LoginRequest,
        LoginResponse,
        MeResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Projects", description = "Public portfolio endpoints"),
        (name = "Admin", description = "Backoffice project management"),
        (name = "Stacks", description = "Technology stack management"),
        (name = "Students", description = "Student management"),
        (name = "Auth", description = "Login, logout and session check")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    let addr = config.server_addr();

    // Build application state (external store client + signing config)
    let state = AppState::new(config);

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await.unwrap();
}
