//! The authenticate layer for protected routes.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use tenantry_core::directory::{CompanyDirectory, SessionStore, UserDirectory};
use tenantry_core::error::{AuthError, AuthResult};
use tenantry_core::models::principal::Principal;

use crate::app::AppState;
use crate::{extract, respond};

/// Extract, resolve, and gate-check the request credential, then hand
/// the [`Principal`] to the handler as a request extension.
///
/// Failures short-circuit with the standard error mapping; handlers
/// behind this layer can rely on the extension being present.
pub async fn authenticate<U, C, S>(
    State(state): State<AppState<U, C, S>>,
    mut req: Request,
    next: Next,
) -> Response
where
    U: UserDirectory + Clone + 'static,
    C: CompanyDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    match resolve_request(&state, req.headers()).await {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(err) => respond::auth_error_to_response(err),
    }
}

async fn resolve_request<U, C, S>(
    state: &AppState<U, C, S>,
    headers: &HeaderMap,
) -> AuthResult<Principal>
where
    U: UserDirectory,
    C: CompanyDirectory,
    S: SessionStore,
{
    let credential = extract::extract_credential(headers)?.ok_or(AuthError::Unauthenticated)?;
    let principal = state.resolver.resolve(&credential).await?;
    state.gate.check(&principal).await?;
    Ok(principal)
}
