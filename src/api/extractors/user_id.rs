//! Path extractor for user identifiers.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::UserId;
use crate::errors::AppError;

/// The `{id}` path segment parsed as a `UserId`.
///
/// A segment that is not an unsigned integer is rejected as a bad request
/// with the parser's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdPath(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_user_id(&raw).map(UserIdPath)
    }
}

/// Parse a raw path segment into a `UserId`
pub fn parse_user_id(raw: &str) -> Result<UserId, AppError> {
    raw.parse::<UserId>()
        .map_err(|e| AppError::bad_request(format!("invalid user id '{}': {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_unsigned_integers() {
        assert_eq!(parse_user_id("1").unwrap(), 1);
        assert_eq!(parse_user_id("42").unwrap(), 42);
    }

    #[test]
    fn rejects_non_integers() {
        let err = parse_user_id("abc").unwrap_err();
        assert_eq!(err.user_message(), "invalid user id 'abc': invalid digit found in string");
    }

    #[test]
    fn rejects_negative_ids() {
        assert!(matches!(parse_user_id("-1"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_empty_segment() {
        let err = parse_user_id("").unwrap_err();
        assert!(err.user_message().contains("empty string"));
    }
}
