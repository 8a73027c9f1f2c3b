//! Authentication configuration.

/// Configuration for token issuance and the login flows.
///
/// The signing secret and lifetimes are passed explicitly into service
/// construction; there is no process-wide implicit secret.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC secret used to sign and verify bearer tokens (HS256).
    pub token_secret: String,
    /// Bearer token lifetime in seconds.
    pub token_lifetime_secs: u64,
    /// Issuer embedded in every token and required on verification.
    pub issuer: String,
    /// Optional grace window, in seconds, during which an expired token
    /// may still be refreshed. `None` means an expired token can never
    /// be refreshed.
    pub refresh_grace_secs: Option<u64>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: String::new(),
            // 7 days
            token_lifetime_secs: 604_800,
            issuer: "tenantry".to_string(),
            refresh_grace_secs: None,
        }
    }
}
