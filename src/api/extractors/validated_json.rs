//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    body::Bytes,
    extract::{rejection::BytesRejection, FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Decodes the raw body with `serde_json` regardless of `Content-Type`, so
/// every malformed body is reported as a bad request carrying the decoder's
/// own description. A body over the request body limit is rejected with
/// 413; any other failure to read the body is a 400.
///
/// # Example
///
/// ```rust,ignore
/// use user_store_api::api::extractors::ValidatedJson;
/// use user_store_api::domain::User;
///
/// async fn create_user(ValidatedJson(user): ValidatedJson<User>) {
///     // user.name is already known to be non-empty
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        let value: T =
            serde_json::from_slice(&body).map_err(|e| AppError::bad_request(e.to_string()))?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Map a body read failure, keeping the size-limit status
fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(rejection.body_text())
    } else {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http;

    use super::*;
    use crate::domain::User;

    async fn extract(body: impl Into<Body>) -> Result<User, AppError> {
        let req = http::Request::builder()
            .method("POST")
            .uri("/users")
            .body(body.into())
            .unwrap();

        ValidatedJson::<User>::from_request(req, &())
            .await
            .map(|ValidatedJson(user)| user)
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let user = extract(r#"{"name":"Ada"}"#).await.unwrap();
        assert_eq!(user, User::new("Ada"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let err = extract(r#"{"name":"#).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m.contains("EOF")));
    }

    #[tokio::test]
    async fn wrong_type_is_bad_request() {
        let err = extract(r#"{"name":42}"#).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(ref m) if m.contains("invalid type")));
    }

    #[tokio::test]
    async fn empty_object_fails_validation() {
        let err = extract("{}").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Name is required"));
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let name = "a".repeat(3 * 1024 * 1024);
        let body = format!(r#"{{"name":"{}"}}"#, name);

        let err = extract(body).await.unwrap_err();
        assert!(matches!(err, AppError::PayloadTooLarge(_)));
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
