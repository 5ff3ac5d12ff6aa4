use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::config::Config;
use crate::error::AppError;
use crate::services::{AuthService, Claims};
use crate::state::AppState;

/// Name of the http-only session cookie
pub const SESSION_COOKIE: &str = "admin_token";

/// Admin identity extracted from a verified session cookie
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin_id: String,
    pub email: String,
}

impl From<Claims> for AdminSession {
    fn from(claims: Claims) -> Self {
        Self {
            admin_id: claims.sub,
            email: claims.email,
        }
    }
}

/// Extractor for AdminSession - usable directly in guarded page handlers
impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AdminSession>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Best-effort session lookup. A missing, malformed, or expired cookie all
/// read as anonymous; this never surfaces an error.
pub fn session_claims(jar: &CookieJar, config: &Config) -> Option<Claims> {
    let cookie = jar.get(SESSION_COOKIE)?;
    AuthService::verify_token(cookie.value(), config).ok()
}

/// Guard for the admin page routes. Missing and invalid tokens are not
/// distinguished; both redirect to the login page.
pub async fn admin_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    match session_claims(&jar, &state.config) {
        Some(claims) => {
            request.extensions_mut().insert(AdminSession::from(claims));
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}
