pub mod admin;
pub mod project;
pub mod stack;
pub mod student;

pub use admin::Admin;
pub use project::{attachment_list, CreateProject, Project, ProjectDetail, UpdateProject};
pub use stack::{Stack, StackInput};
pub use student::{Student, StudentInput};
