//! Request body extractor for add and update endpoints

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::Method,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ApiOperation};

/// JSON body that may be absent
///
/// An empty body or a literal `null` yields `OptionalJson(None)`, which the
/// handlers turn into a validation failure. Anything else must parse as `T`
/// or the request is rejected with 400.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionalJson<T>(pub Option<T>);

impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let operation = if req.method() == Method::PUT {
            ApiOperation::Update
        } else {
            ApiOperation::Add
        };

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        serde_json::from_slice::<Option<T>>(&bytes)
            .map(Self)
            .map_err(|err| {
                tracing::debug!(error = %err, "Malformed request body");
                ApiError::bad_request(format!("Malformed request body: {err}"))
                    .with_operation(operation)
                    .into_response()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RegionRequest;
    use axum::body::Body;
    use axum::http::StatusCode;

    async fn extract(
        method: Method,
        body: &'static str,
    ) -> Result<OptionalJson<RegionRequest>, Response> {
        let req = Request::builder()
            .method(method)
            .uri("/regions")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();
        OptionalJson::from_request(req, &()).await
    }

    #[tokio::test]
    async fn test_empty_and_null_bodies_are_absent() {
        for body in ["", "  \n", "null"] {
            let OptionalJson(value) = extract(Method::POST, body).await.unwrap();
            assert!(value.is_none(), "body {body:?}");
        }
    }

    #[tokio::test]
    async fn test_partial_body_uses_defaults() {
        let OptionalJson(value) = extract(Method::POST, r#"{"code":"WGN"}"#).await.unwrap();
        let request = value.unwrap();
        assert_eq!(request.code.as_deref(), Some("WGN"));
        assert_eq!(request.name, None);
        assert_eq!(request.area, 0.0);
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let response = extract(Method::PUT, "{not json").await.unwrap_err();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert_eq!(json["operation"], "update");
    }
}
