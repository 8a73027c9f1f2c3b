//! HTTP routes and handlers.

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::header::SET_COOKIE,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use tenantry_auth::flows::{LoginInput, LoginOutput};
use tenantry_auth::guard;
use tenantry_auth::resolver::Credential;
use tenantry_core::directory::{CompanyDirectory, SessionStore, UserDirectory};
use tenantry_core::error::AuthError;
use tenantry_core::models::principal::Principal;
use tenantry_core::models::role::Role;
use uuid::Uuid;

use crate::app::AppState;
use crate::extract::{self, SESSION_COOKIE, TOKEN_COOKIE};
use crate::respond::auth_error_to_response;

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
    /// Role the caller claims to hold.
    pub role: String,
    #[serde(default)]
    pub company_id: Option<Uuid>,
}

pub async fn login<U, C, S>(
    State(state): State<AppState<U, C, S>>,
    Json(body): Json<LoginBody>,
) -> Response
where
    U: UserDirectory + Clone + 'static,
    C: CompanyDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    // An unknown claimed role fails like any other bad credential.
    let role = match body.role.parse::<Role>() {
        Ok(role) => role,
        Err(err) => {
            tracing::debug!(error = %err, "login rejected: unrecognized claimed role");
            return auth_error_to_response(AuthError::Unauthenticated);
        }
    };

    let input = LoginInput {
        email: body.email,
        password: body.password,
        role,
        company_hint: body.company_id,
    };
    match state.flows.login(input).await {
        Ok(out) => token_response(out, state.cookie_max_age_secs),
        Err(err) => auth_error_to_response(err),
    }
}

pub async fn refresh<U, C, S>(
    State(state): State<AppState<U, C, S>>,
    headers: HeaderMap,
) -> Response
where
    U: UserDirectory + Clone + 'static,
    C: CompanyDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let token = match extract::extract_credential(&headers) {
        Ok(Some(Credential::Bearer(token))) => token,
        // Sessions are server-side state; there is nothing to refresh.
        Ok(Some(Credential::Session(_))) => {
            return auth_error_to_response(AuthError::Malformed);
        }
        Ok(None) => return auth_error_to_response(AuthError::Unauthenticated),
        Err(err) => return auth_error_to_response(err),
    };

    match state.flows.refresh(&token).await {
        Ok(out) => token_response(out, state.cookie_max_age_secs),
        Err(err) => auth_error_to_response(err),
    }
}

pub async fn logout<U, C, S>(
    State(state): State<AppState<U, C, S>>,
    headers: HeaderMap,
) -> Response
where
    U: UserDirectory + Clone + 'static,
    C: CompanyDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    let credential = match extract::extract_credential(&headers) {
        Ok(Some(credential)) => credential,
        Ok(None) => return auth_error_to_response(AuthError::Unauthenticated),
        Err(err) => return auth_error_to_response(err),
    };

    match state.flows.logout(&credential).await {
        Ok(()) => {
            let mut response =
                (StatusCode::OK, Json(json!({ "status": "logged out" }))).into_response();
            append_cookie(&mut response, &clear_cookie(TOKEN_COOKIE));
            append_cookie(&mut response, &clear_cookie(SESSION_COOKIE));
            response
        }
        Err(err) => auth_error_to_response(err),
    }
}

/// The resolved principal view; placed in the request extensions by the
/// authenticate layer. Carries no secrets.
pub async fn me(Extension(principal): Extension<Principal>) -> impl IntoResponse {
    Json(principal)
}

/// Reporting data for one company, as a tenant-scoped resource.
///
/// Guards compose per operation: the permission check first, then the
/// tenant-scope check against the company named in the path.
pub async fn company_reports(
    Extension(principal): Extension<Principal>,
    Path(company_id): Path<Uuid>,
) -> Response {
    if let Err(err) = guard::require_permission(&principal, "reports.read") {
        return auth_error_to_response(err);
    }
    let tenant = match guard::require_tenant_scope(&principal, Some(company_id)) {
        Ok(tenant) => tenant,
        Err(err) => return auth_error_to_response(err),
    };
    Json(json!({
        "company_id": tenant,
        "reports": [],
    }))
    .into_response()
}

fn token_response(out: LoginOutput, max_age_secs: u64) -> Response {
    let cookie = format!(
        "{TOKEN_COOKIE}={}; HttpOnly; Secure; SameSite=Strict; Max-Age={max_age_secs}; Path=/",
        out.token
    );
    let mut response = (
        StatusCode::OK,
        Json(json!({
            "token": out.token,
            "principal": out.principal,
        })),
    )
        .into_response();
    append_cookie(&mut response, &cookie);
    response
}

fn clear_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Secure; SameSite=Strict; Max-Age=0; Path=/")
}

fn append_cookie(response: &mut Response, cookie: &str) {
    // A token is URL-safe base64; building the header value cannot fail
    // for the cookies we mint.
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().append(SET_COOKIE, value);
    }
}
