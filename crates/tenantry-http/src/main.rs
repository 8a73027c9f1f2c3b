//! Tenantry server: reference wiring of the auth core over the
//! in-memory directories.

use chrono::{Duration, Utc};
use tenantry_auth::{AuthConfig, password};
use tenantry_core::models::company::{Company, CompanyStatus};
use tenantry_core::models::permission::PermissionSet;
use tenantry_core::models::role::Role;
use tenantry_core::models::user::{User, UserStatus};
use tenantry_http::{AppState, build_app};
use tenantry_memory::{MemoryCompanyDirectory, MemorySessionStore, MemoryUserDirectory};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DEMO_PASSWORD: &str = "demo-password";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = config_from_env();
    let addr = std::env::var("TENANTRY_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let users = MemoryUserDirectory::new();
    let companies = MemoryCompanyDirectory::new();
    let sessions = MemorySessionStore::new();
    seed_demo_directory(&users, &companies).await;

    let state = AppState::new(users, companies, sessions, &config);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!(%addr, "tenantry server listening");
    axum::serve(listener, app).await.expect("server error");
}

fn config_from_env() -> AuthConfig {
    let defaults = AuthConfig::default();

    let token_secret = std::env::var("TENANTRY_SECRET").unwrap_or_else(|_| {
        tracing::warn!("TENANTRY_SECRET not set; using insecure dev default");
        "dev-secret".to_string()
    });

    AuthConfig {
        token_secret,
        token_lifetime_secs: env_u64("TENANTRY_TOKEN_LIFETIME_SECS")
            .unwrap_or(defaults.token_lifetime_secs),
        issuer: std::env::var("TENANTRY_ISSUER").unwrap_or(defaults.issuer),
        refresh_grace_secs: env_u64("TENANTRY_REFRESH_GRACE_SECS"),
    }
}

fn env_u64(name: &str) -> Option<u64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(%name, error = %err, "ignoring unparseable env var");
            None
        }
    }
}

/// Seed one demo tenant so the flows are usable out of the box.
///
/// The memory directories stand in for an external user/company store;
/// a production deployment replaces them and this seed entirely.
async fn seed_demo_directory(users: &MemoryUserDirectory, companies: &MemoryCompanyDirectory) {
    let company_id = Uuid::new_v4();
    companies
        .insert(Company {
            id: company_id,
            name: "Acme Rentals".into(),
            status: CompanyStatus::Active,
            trial_expires_at: Some(Utc::now() + Duration::days(30)),
        })
        .await;

    let hash = match password::hash_password(DEMO_PASSWORD) {
        Ok(hash) => hash,
        Err(err) => {
            tracing::error!(error = %err, "failed to hash demo password; demo accounts disabled");
            return;
        }
    };

    let accounts = [
        (
            "root@tenantry.local",
            Role::PlatformAdmin,
            PermissionSet::default(),
        ),
        (
            "admin@acme.local",
            Role::TenantAdmin,
            PermissionSet::default(),
        ),
        (
            "manager@acme.local",
            Role::Manager,
            PermissionSet::from([("reports.read", true)]),
        ),
        (
            "employee@acme.local",
            Role::Employee,
            PermissionSet::from([("reports.read", true), ("reports.export", false)]),
        ),
    ];

    for (email, role, permissions) in accounts {
        let company_id = (role != Role::PlatformAdmin).then_some(company_id);
        users
            .insert(User {
                id: Uuid::new_v4(),
                company_id,
                email: email.into(),
                password_hash: hash.clone(),
                role,
                status: UserStatus::Active,
                permissions,
                last_login_at: None,
            })
            .await;
    }

    tracing::warn!(
        password = DEMO_PASSWORD,
        "seeded demo directory; all demo accounts share this password"
    );
}
