use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
};

use crate::data::session;

/// Authenticated requester, resolved from the `Authorization: Token <key>`
/// header against the session registry
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

impl AuthUser {
    pub fn into_inner(self) -> String {
        self.0
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    "Authentication credentials were not provided.".to_string(),
                )
            })?;

        let token = token_from_header(header_value).ok_or_else(|| {
            (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.".to_string(),
            )
        })?;

        match session::resolve(token) {
            Some(username) => Ok(AuthUser(username)),
            None => Err((StatusCode::UNAUTHORIZED, "Invalid token.".to_string())),
        }
    }
}

/// Pull the token out of an `Authorization: Token <key>` header value
fn token_from_header(value: &str) -> Option<&str> {
    let token = value.strip_prefix("Token ")?.trim();
    if token.is_empty() { None } else { Some(token) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_header() {
        assert_eq!(token_from_header("Token abc123"), Some("abc123"));
        assert_eq!(token_from_header("Token "), None);
        assert_eq!(token_from_header("Bearer abc123"), None);
        assert_eq!(token_from_header("abc123"), None);
    }
}
