//! Consistent JSON error responses.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;
use tenantry_core::error::AuthError;

/// Map an [`AuthError`] to its HTTP response.
///
/// `Unauthenticated` and `Malformed` are 401; `TenantSuspended` is 403
/// with the human-readable reason; `Forbidden` is 403 with a generic
/// body, the denied requirement stays in the server log.
pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::Unauthenticated => {
            json_error(StatusCode::UNAUTHORIZED, "unauthenticated", err.to_string())
        }
        AuthError::Malformed => {
            json_error(StatusCode::UNAUTHORIZED, "malformed_credentials", err.to_string())
        }
        AuthError::TenantSuspended { ref reason } => {
            json_error(StatusCode::FORBIDDEN, "tenant_suspended", reason.clone())
        }
        AuthError::Forbidden { .. } => {
            // Display intentionally omits the detail.
            json_error(StatusCode::FORBIDDEN, "forbidden", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        let unauthenticated = auth_error_to_response(AuthError::Unauthenticated);
        assert_eq!(unauthenticated.status(), StatusCode::UNAUTHORIZED);

        let malformed = auth_error_to_response(AuthError::Malformed);
        assert_eq!(malformed.status(), StatusCode::UNAUTHORIZED);

        let suspended =
            auth_error_to_response(AuthError::suspended("company account is deactivated"));
        assert_eq!(suspended.status(), StatusCode::FORBIDDEN);

        let forbidden = auth_error_to_response(AuthError::forbidden("missing permission 'x'"));
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);
    }
}
