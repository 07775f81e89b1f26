//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{repository::ReadRepository, state::AppState};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DependencyStatus {
    fn probe<T>(result: crate::repository::RepositoryResult<Vec<T>>) -> Self {
        match result {
            Ok(entries) => Self {
                healthy: true,
                message: Some(format!("{} entries", entries.len())),
            },
            Err(e) => {
                tracing::error!("Store health check failed: {}", e);
                Self {
                    healthy: false,
                    message: Some(e.to_string()),
                }
            }
        }
    }
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// Every store must answer a listing. The difficulty store must also be
/// non-empty, since no walk can be added without a difficulty to reference.
/// Returns 503 Service Unavailable otherwise.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let mut dependencies = HashMap::new();

    dependencies.insert(
        "regions".to_string(),
        DependencyStatus::probe(state.regions().list().await),
    );
    dependencies.insert(
        "walks".to_string(),
        DependencyStatus::probe(state.walks().list().await),
    );

    let difficulties = match state.difficulties().list().await {
        Ok(entries) if entries.is_empty() => DependencyStatus {
            healthy: false,
            message: Some("No walk difficulties seeded".to_string()),
        },
        other => DependencyStatus::probe(other),
    };
    dependencies.insert("difficulties".to_string(), difficulties);

    let ready = dependencies.values().all(|d| d.healthy);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ReadinessResponse {
        ready,
        service: state.config().service.name.clone(),
        dependencies,
    };

    (status, Json(response))
}
