//! Axum extractor for the acting user.
//!
//! Authentication happens upstream; this layer only reads the resulting
//! user identifier from the `x-user-id` header.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::handlers::ApiError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Identifier of the user the request acts on behalf of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

fn extract_user_id(headers: &HeaderMap) -> Option<UserId> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| UserId(s.to_string()))
}

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_user_id(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized(format!("Missing {USER_ID_HEADER} header")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_user_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("user1"));

        assert_eq!(extract_user_id(&headers), Some(UserId("user1".to_string())));
    }

    #[test]
    fn test_extract_user_id_trims_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert(USER_ID_HEADER, HeaderValue::from_static("  user1 "));

        assert_eq!(extract_user_id(&headers), Some(UserId("user1".to_string())));
    }

    #[test]
    fn test_missing_or_blank_header_is_none() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_user_id(&headers), None);

        headers.insert(USER_ID_HEADER, HeaderValue::from_static("   "));
        assert_eq!(extract_user_id(&headers), None);
    }
}
