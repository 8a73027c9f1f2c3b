//! Credential extraction from inbound requests.
//!
//! Both identity carriers feed the same resolution pipeline: a bearer
//! token (Authorization header, falling back to the token cookie) or an
//! opaque session identifier cookie. A carrier that is present but
//! structurally broken is [`AuthError::Malformed`], never a silent
//! fallback to the next carrier.

use axum::http::HeaderMap;
use axum::http::header::{AUTHORIZATION, COOKIE};
use tenantry_auth::Credential;
use tenantry_core::error::AuthError;

/// Cookie carrying a signed bearer token.
pub const TOKEN_COOKIE: &str = "tenantry_token";
/// Cookie carrying an opaque session identifier.
pub const SESSION_COOKIE: &str = "tenantry_session";

/// Pull a credential out of the request headers.
///
/// Returns `Ok(None)` when no carrier is present at all; the caller
/// decides whether that is acceptable for the route.
pub fn extract_credential(headers: &HeaderMap) -> Result<Option<Credential>, AuthError> {
    if let Some(header) = headers.get(AUTHORIZATION) {
        let token = bearer_from_header(header)?;
        return Ok(Some(Credential::Bearer(token)));
    }

    if let Some(token) = cookie_value(headers, TOKEN_COOKIE)? {
        if token.is_empty() {
            return Err(AuthError::Malformed);
        }
        return Ok(Some(Credential::Bearer(token)));
    }

    if let Some(session_id) = cookie_value(headers, SESSION_COOKIE)? {
        if session_id.is_empty() {
            return Err(AuthError::Malformed);
        }
        return Ok(Some(Credential::Session(session_id)));
    }

    Ok(None)
}

fn bearer_from_header(header: &axum::http::HeaderValue) -> Result<String, AuthError> {
    let header = header.to_str().map_err(|_| AuthError::Malformed)?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::Malformed)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::Malformed);
    }
    Ok(token.to_string())
}

/// Find a cookie by name in the Cookie header, if any.
fn cookie_value(headers: &HeaderMap, name: &str) -> Result<Option<String>, AuthError> {
    let Some(header) = headers.get(COOKIE) else {
        return Ok(None);
    };
    let cookies = header.to_str().map_err(|_| AuthError::Malformed)?;

    Ok(cookies.split(';').find_map(|cookie| {
        let (key, value) = cookie.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                axum::http::HeaderName::try_from(*name).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn bearer_header_wins() {
        let map = headers(&[
            ("authorization", "Bearer abc.def.ghi"),
            ("cookie", "tenantry_session=sess-1"),
        ]);
        let cred = extract_credential(&map).unwrap();
        assert!(matches!(cred, Some(Credential::Bearer(t)) if t == "abc.def.ghi"));
    }

    #[test]
    fn token_cookie_before_session_cookie() {
        let map = headers(&[(
            "cookie",
            "other=1; tenantry_token=tok-1; tenantry_session=sess-1",
        )]);
        let cred = extract_credential(&map).unwrap();
        assert!(matches!(cred, Some(Credential::Bearer(t)) if t == "tok-1"));
    }

    #[test]
    fn session_cookie_as_fallback() {
        let map = headers(&[("cookie", "tenantry_session=sess-1")]);
        let cred = extract_credential(&map).unwrap();
        assert!(matches!(cred, Some(Credential::Session(s)) if s == "sess-1"));
    }

    #[test]
    fn no_carrier_is_none() {
        let map = headers(&[("cookie", "theme=dark")]);
        assert!(extract_credential(&map).unwrap().is_none());
        assert!(extract_credential(&HeaderMap::new()).unwrap().is_none());
    }

    #[test]
    fn broken_carriers_are_malformed_not_skipped() {
        // Wrong scheme.
        let map = headers(&[("authorization", "Basic dXNlcjpwYXNz")]);
        assert_eq!(extract_credential(&map).unwrap_err(), AuthError::Malformed);

        // Empty bearer.
        let map = headers(&[("authorization", "Bearer   ")]);
        assert_eq!(extract_credential(&map).unwrap_err(), AuthError::Malformed);

        // Present header must not fall back to a perfectly good cookie.
        let map = headers(&[
            ("authorization", "Token abc"),
            ("cookie", "tenantry_token=tok-1"),
        ]);
        assert_eq!(extract_credential(&map).unwrap_err(), AuthError::Malformed);

        // Empty cookie values.
        let map = headers(&[("cookie", "tenantry_token=")]);
        assert_eq!(extract_credential(&map).unwrap_err(), AuthError::Malformed);
        let map = headers(&[("cookie", "tenantry_session=")]);
        assert_eq!(extract_credential(&map).unwrap_err(), AuthError::Malformed);
    }
}
