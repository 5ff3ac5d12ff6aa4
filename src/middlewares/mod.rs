pub mod auth;

pub use auth::{admin_guard, session_claims, AdminSession, SESSION_COOKIE};
