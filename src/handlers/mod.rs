pub mod admin;
pub mod auth;
pub mod common;
pub mod pages;
pub mod project;
pub mod stack;
pub mod student;

pub use admin::{
    create_project, delete_project, list_all_projects, update_project, AdminProjectResponse,
    CreateProjectRequest, DeleteProjectRequest, DeleteResponse, ProjectWriteResponse,
    UpdateProjectRequest,
};
pub use auth::{login, logout, me, LoginRequest, LoginResponse, MeResponse};
pub use common::require_field;
pub use pages::{
    admin_dashboard, admin_projects_page, admin_stacks_page, admin_students_page, home, login_page,
    project_page,
};
pub use project::{
    get_project, like_project, list_projects, AssetResponse, LikeRequest, LikeResponse,
    ProjectDetailResponse, ProjectListParams, PublicProjectResponse, ResolvedAuthorResponse,
    ResolvedStackResponse,
};
pub use stack::{
    create_stack, delete_stack, list_stacks, update_stack, CreateStackRequest, DeleteStackRequest,
    StackResponse, UpdateStackRequest,
};
pub use student::{
    create_student, delete_student, list_students, update_student, CreateStudentRequest,
    DeleteStudentRequest, StudentResponse, UpdateStudentRequest,
};
