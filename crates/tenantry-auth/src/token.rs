//! Signed bearer token issuance, verification, and refresh.
//!
//! Tokens are HS256 JWTs carrying the principal's identity claims.
//! Verification applies zero clock leeway: an expired token is rejected
//! even when its signature is valid. Refresh is the only place a grace
//! window may apply, and only when one is configured.
//!
//! Neither raw tokens nor the signing secret are ever logged.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tenantry_core::models::permission::PermissionSet;
use tenantry_core::models::principal::Principal;
use tenantry_core::models::role::Role;
use thiserror::Error;
use uuid::Uuid;

use crate::config::AuthConfig;

/// Why a token failed verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not a structurally valid token.
    #[error("token is malformed")]
    Malformed,
    /// Structure is fine but the signature (or issuer) does not match
    /// this deployment.
    #[error("token signature is invalid")]
    SignatureInvalid,
    /// Signature is valid but the token is past its expiry.
    #[error("token has expired")]
    Expired,
    /// Claims could not be serialized at issuance time.
    #[error("token encoding failed: {0}")]
    Encoding(String),
}

/// Claims embedded in every bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: user ID (UUID string).
    pub sub: String,
    /// Company ID (UUID string); absent for platform admins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    /// Account email.
    pub email: String,
    /// Role held at issuance time.
    pub role: Role,
    /// Per-user permission grants at issuance time.
    #[serde(default)]
    pub perms: PermissionSet,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
}

impl Claims {
    /// Subject parsed back to a UUID, if well formed.
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Company binding parsed back to a UUID, if present and well
    /// formed.
    pub fn company_uuid(&self) -> Option<Uuid> {
        self.company_id
            .as_deref()
            .and_then(|id| Uuid::parse_str(id).ok())
    }
}

/// Issues and verifies bearer tokens for one deployment.
///
/// Holds the derived signing keys; construct once and share.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
    issuer: String,
    refresh_grace_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.token_secret.as_bytes()),
            lifetime: Duration::seconds(config.token_lifetime_secs as i64),
            issuer: config.issuer.clone(),
            refresh_grace_secs: config.refresh_grace_secs.unwrap_or(0),
        }
    }

    /// Issue a signed token for a resolved principal.
    pub fn issue(&self, principal: &Principal) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: principal.user_id.to_string(),
            company_id: principal.company_id.map(|id| id.to_string()),
            email: principal.email.clone(),
            role: principal.role,
            perms: principal.permissions.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        };
        self.sign(&claims)
    }

    /// Decode and verify a token with no expiry leeway.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode(token, 0)
    }

    /// Decode a token for refresh purposes, honoring the configured
    /// grace window (if any) as expiry leeway.
    pub fn verify_for_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        self.decode(token, self.refresh_grace_secs)
    }

    /// Exchange a still-refreshable token for a fresh one.
    ///
    /// Identity claims carry over unchanged; issued-at and expiry are
    /// reset, so the new token always outlives the old one.
    pub fn refresh(&self, token: &str) -> Result<String, TokenError> {
        let old = self.verify_for_refresh(token)?;
        let now = Utc::now();
        let claims = Claims {
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
            ..old
        };
        self.sign(&claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| TokenError::Encoding(err.to_string()))
    }

    fn decode(&self, token: &str, leeway_secs: u64) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

        jsonwebtoken::decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|err| match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm
                | jsonwebtoken::errors::ErrorKind::InvalidIssuer => TokenError::SignatureInvalid,
                _ => TokenError::Malformed,
            })
    }
}
