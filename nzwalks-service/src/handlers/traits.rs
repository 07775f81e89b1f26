//! Handler trait definitions for REST collection resources
//!
//! Like the repository traits, these use RPITIT so implementations are plain
//! `async fn`s.

use std::future::Future;

use uuid::Uuid;

use super::error::ApiError;

/// Standard REST CRUD handler
///
/// # Type Parameters
///
/// - `Dto`: wire shape returned to clients
/// - `AddDto`: body of an add request
/// - `UpdateDto`: body of an update request
///
/// Request bodies arrive as `Option` because an absent body is a
/// validation failure, not a transport error.
pub trait CollectionHandler<Dto, AddDto, UpdateDto>: Send + Sync {
    /// Every entity in the collection, in repository order
    fn list(&self) -> impl Future<Output = Result<Vec<Dto>, ApiError>> + Send;

    /// A single entity, or `NotFound`
    fn get(&self, id: Uuid) -> impl Future<Output = Result<Dto, ApiError>> + Send;

    /// Validate and store a new entity, returning it with its assigned id
    ///
    /// # Errors
    ///
    /// `ValidationFailed` without touching the repository when the request
    /// breaks any rule.
    fn add(&self, dto: Option<AddDto>) -> impl Future<Output = Result<Dto, ApiError>> + Send;

    /// Validate and fully replace the entity stored under `id`
    ///
    /// # Errors
    ///
    /// `ValidationFailed` without touching the repository, or `NotFound` when
    /// the repository has nothing under `id`.
    fn update(
        &self,
        id: Uuid,
        dto: Option<UpdateDto>,
    ) -> impl Future<Output = Result<Dto, ApiError>> + Send;

    /// Remove an entity, returning its last known state
    fn delete(&self, id: Uuid) -> impl Future<Output = Result<Dto, ApiError>> + Send;
}

/// Read-only handler for reference collections
pub trait ReferenceHandler<Dto>: Send + Sync {
    /// Every entry, in repository order
    fn list(&self) -> impl Future<Output = Result<Vec<Dto>, ApiError>> + Send;

    /// A single entry, or `NotFound`
    fn get(&self, id: Uuid) -> impl Future<Output = Result<Dto, ApiError>> + Send;
}
