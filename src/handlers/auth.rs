use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::middlewares::{session_claims, SESSION_COOKIE};
use crate::repositories::AdminRepository;
use crate::services::AuthService;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ============ Handlers ============

/// Login with email and password. Unknown email and wrong password fold
/// into the same 401 outcome. Success sets the http-only session cookie.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let admin = AdminRepository::find_by_email(&state.store, &payload.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let is_valid = AuthService::verify_password(&payload.password, &admin.password_hash)?;
    if !is_valid {
        return Err(AppError::InvalidCredentials);
    }

    let token = AuthService::generate_token(&admin.id, &admin.email, &state.config)?;

    let cookie = Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .path("/")
        .same_site(SameSite::Lax)
        .secure(state.config.is_production())
        .max_age(Duration::hours(state.config.jwt_expiration_hours));

    Ok((jar.add(cookie), Json(LoginResponse { success: true })))
}

/// Logout: instruct the client to discard the session cookie. Tokens are
/// stateless, so an unexpired token captured earlier stays verifiable.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared", body = LoginResponse)
    ),
    tag = "Auth"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<LoginResponse>) {
    let cookie = Cookie::build((SESSION_COOKIE, "")).path("/");
    (jar.remove(cookie), Json(LoginResponse { success: true }))
}

/// Report whether the caller holds a valid admin session. Missing, invalid
/// and expired cookies all read as anonymous; this never fails outwardly.
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Session status", body = MeResponse)
    ),
    tag = "Auth"
)]
pub async fn me(State(state): State<AppState>, jar: CookieJar) -> Json<MeResponse> {
    match session_claims(&jar, &state.config) {
        Some(claims) => Json(MeResponse {
            is_admin: true,
            email: Some(claims.email),
        }),
        None => Json(MeResponse {
            is_admin: false,
            email: None,
        }),
    }
}
