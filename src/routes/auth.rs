//! Auth routes — email access-code flow and session management.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use time::Duration;

use crate::services::{email_auth, profile::ProfileRow, session};
use crate::state::AppState;

const COOKIE_NAME: &str = "session_token";

pub(crate) fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .and_then(|raw| match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => None,
        })
}

pub(crate) fn cookie_secure() -> bool {
    env_bool("COOKIE_SECURE").unwrap_or(false)
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(secure)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated member extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub user: ProfileRow,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(COOKIE_NAME).map(Cookie::value).unwrap_or_default();
        if token.is_empty() {
            return Err(StatusCode::UNAUTHORIZED);
        }

        let app_state = AppState::from_ref(state);
        let user = session::validate_session(&app_state.pool, token)
            .await
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { user, token: token.to_owned() })
    }
}

pub(crate) fn email_auth_error_to_status(err: &email_auth::EmailAuthError) -> StatusCode {
    match err {
        email_auth::EmailAuthError::InvalidEmail | email_auth::EmailAuthError::InvalidCode => StatusCode::BAD_REQUEST,
        email_auth::EmailAuthError::VerificationFailed => StatusCode::UNAUTHORIZED,
        email_auth::EmailAuthError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        email_auth::EmailAuthError::EmailDelivery(_) => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct RequestCodeBody {
    pub email: String,
}

/// `POST /api/auth/request-code` — provision the profile and send a code.
pub async fn request_code(
    State(state): State<AppState>,
    Json(body): Json<RequestCodeBody>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let code = email_auth::request_access_code(&state.pool, &body.email)
        .await
        .map_err(|e| email_auth_error_to_status(&e))?;

    match &state.email {
        Some(config) => {
            if let Err(e) = email_auth::send_access_code_email(&config.api_key, &config.from, &body.email, &code).await
            {
                tracing::error!(error = %e, "access code email failed");
                return Err(StatusCode::BAD_GATEWAY);
            }
        }
        None => {
            tracing::info!(email = %body.email, %code, "email delivery not configured; access code logged");
        }
    }

    Ok(Json(serde_json::json!({ "ok": true })))
}

#[derive(Deserialize)]
pub struct VerifyCodeBody {
    pub email: String,
    pub code: String,
}

/// `POST /api/auth/verify-code` — consume the code, set the session cookie.
pub async fn verify_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<VerifyCodeBody>,
) -> Result<impl IntoResponse, StatusCode> {
    let user_id = email_auth::verify_access_code(&state.pool, &body.email, &body.code)
        .await
        .map_err(|e| email_auth_error_to_status(&e))?;

    let token = match session::create_session(&state.pool, user_id).await {
        Ok(t) => t,
        Err(e) => {
            tracing::error!(error = %e, "session creation failed");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let user = session::validate_session(&state.pool, &token)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?
        .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

    let jar = jar.add(session_cookie(token, cookie_secure()));
    Ok((jar, Json(user)))
}

/// `GET /api/auth/me` — return the current member.
pub async fn me(auth: AuthUser) -> Json<ProfileRow> {
    Json(auth.user)
}

/// `POST /api/auth/logout` — delete session, clear cookie.
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let _ = session::delete_session(&state.pool, &auth.token).await;

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(axum_extra::extract::cookie::SameSite::Lax)
        .secure(cookie_secure())
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
