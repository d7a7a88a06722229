//! HTTP basic authentication for the mutating team routes.
//!
//! Passwords are stored and compared as plaintext, matching the existing
//! `user` table contents.

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::db::{StoreError, TeamStore};
use crate::error::ApiError;

pub trait Authenticator {
    /// True when `username` exists and `password` matches it exactly.
    fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;
}

impl Authenticator for TeamStore {
    async fn authenticate(&self, username: &str, password: &str) -> Result<bool, StoreError> {
        let Some(user) = self.find_user_by_name(username).await? else {
            return Ok(false);
        };

        Ok(user.password == password)
    }
}

/// Username/password pair carried by an `Authorization: Basic` header
#[derive(Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Returns `None` for a missing header, another scheme, or undecodable
/// credentials; callers reject all of these the same way.
pub fn extract_basic_credentials(headers: &HeaderMap) -> Option<BasicCredentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

/// Guard for routes that need a known user. Put it ahead of any body
/// extractor so bad credentials win over a bad payload.
#[derive(Debug, Clone)]
pub struct RequireUser(pub String);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Authenticator + Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Some(credentials) = extract_basic_credentials(&parts.headers) else {
            tracing::debug!("missing or malformed basic credentials");
            return Err(ApiError::Unauthorized);
        };

        if !state
            .authenticate(&credentials.username, &credentials.password)
            .await?
        {
            tracing::warn!(username = %credentials.username, "authentication failed");
            return Err(ApiError::Unauthorized);
        }

        Ok(RequireUser(credentials.username))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extract_basic_credentials() {
        // admin:s3cret
        let headers = headers_with("Basic YWRtaW46czNjcmV0");

        assert_eq!(
            extract_basic_credentials(&headers),
            Some(BasicCredentials {
                username: "admin".to_string(),
                password: "s3cret".to_string(),
            })
        );
    }

    #[test]
    fn test_password_may_contain_colons() {
        let encoded = STANDARD.encode("admin:a:b");
        let headers = headers_with(&format!("Basic {}", encoded));

        let credentials = extract_basic_credentials(&headers).unwrap();
        assert_eq!(credentials.username, "admin");
        assert_eq!(credentials.password, "a:b");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_basic_credentials(&HeaderMap::new()), None);
    }

    #[test]
    fn test_bearer_scheme_rejected() {
        let headers = headers_with("Bearer YWRtaW46czNjcmV0");
        assert_eq!(extract_basic_credentials(&headers), None);
    }

    #[test]
    fn test_invalid_base64_rejected() {
        let headers = headers_with("Basic not-base64!!");
        assert_eq!(extract_basic_credentials(&headers), None);
    }

    #[test]
    fn test_missing_separator_rejected() {
        let encoded = STANDARD.encode("adminsecret");
        let headers = headers_with(&format!("Basic {}", encoded));
        assert_eq!(extract_basic_credentials(&headers), None);
    }
}
