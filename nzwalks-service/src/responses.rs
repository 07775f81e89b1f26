//! Success responses with non-200 status codes

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// HTTP 201 Created response
///
/// Carries the created resource as the body and, optionally, a `Location`
/// header pointing at it.
///
/// ```rust
/// use axum::response::IntoResponse;
/// use nzwalks_service::responses::Created;
///
/// let response = Created::new(serde_json::json!({"code": "WGN"}))
///     .with_location("/regions/1")
///     .into_response();
/// assert_eq!(response.status(), axum::http::StatusCode::CREATED);
/// ```
#[derive(Debug)]
pub struct Created<T> {
    data: T,
    location: Option<String>,
}

impl<T> Created<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    /// Add a Location header pointing to the created resource
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(&self.data)).into_response();

        if let Some(location) = self.location {
            if let Ok(value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, value);
            }
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_sets_status_and_location() {
        let response = Created::new(serde_json::json!({"id": 7}))
            .with_location("/walks/7")
            .into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/walks/7"
        );
    }

    #[test]
    fn test_created_without_location() {
        let response = Created::new("ok").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().get(header::LOCATION).is_none());
    }
}
