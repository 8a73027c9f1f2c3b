//! Application state and router assembly.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tenantry_auth::{AuthConfig, AuthFlows, Resolver, TenantGate, TokenService};
use tenantry_core::directory::{CompanyDirectory, SessionStore, UserDirectory};
use tower::ServiceBuilder;

use crate::{middleware, routes};

/// Shared per-request state: the auth services wired over one set of
/// directory handles.
#[derive(Clone)]
pub struct AppState<U, C, S> {
    pub flows: Arc<AuthFlows<U, C, S>>,
    pub resolver: Arc<Resolver<U, C, S>>,
    pub gate: Arc<TenantGate<C>>,
    /// Max-Age for the token cookie; matches the token lifetime.
    pub cookie_max_age_secs: u64,
}

impl<U, C, S> AppState<U, C, S>
where
    U: UserDirectory + Clone,
    C: CompanyDirectory + Clone,
    S: SessionStore + Clone,
{
    pub fn new(users: U, companies: C, sessions: S, config: &AuthConfig) -> Self {
        Self {
            flows: Arc::new(AuthFlows::new(
                users.clone(),
                companies.clone(),
                sessions.clone(),
                config,
            )),
            resolver: Arc::new(Resolver::new(
                users,
                companies.clone(),
                sessions,
                TokenService::new(config),
            )),
            gate: Arc::new(TenantGate::new(companies)),
            cookie_max_age_secs: config.token_lifetime_secs,
        }
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs` and
/// the black-box tests).
pub fn build_app<U, C, S>(state: AppState<U, C, S>) -> Router
where
    U: UserDirectory + Clone + 'static,
    C: CompanyDirectory + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    // Protected routes: full authenticate pipeline (extract, resolve,
    // tenant gate) before the handler runs.
    let protected = Router::new()
        .route("/auth/me", get(routes::me))
        .route("/companies/:company_id/reports", get(routes::company_reports))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::authenticate,
        ))
        .with_state(state.clone());

    // Login/refresh/logout manage credentials themselves and cannot sit
    // behind the middleware: a grace-refreshable token would never get
    // past its zero-leeway verification.
    Router::new()
        .route("/health", get(routes::health))
        .route("/auth/login", post(routes::login))
        .route("/auth/refresh", post(routes::refresh))
        .route("/auth/logout", post(routes::logout))
        .with_state(state)
        .merge(protected)
        .layer(ServiceBuilder::new())
}
