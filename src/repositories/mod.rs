pub mod admin;
pub mod project;
pub mod stack;
pub mod student;

pub use admin::AdminRepository;
pub use project::ProjectRepository;
pub use stack::StackRepository;
pub use student::StudentRepository;
