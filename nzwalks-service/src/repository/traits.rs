//! Repository trait definitions
//!
//! The traits use RPITIT (Return Position Impl Trait In Traits) so backends
//! can implement them with plain `async fn` and no `async_trait` boxing.
//!
//! - [`ReadRepository`]: lookups only. Walk validation depends on this for
//!   its Region and Difficulty checks, which keeps validation read-only.
//! - [`Repository`]: full CRUD, used by the resource handlers.
//!
//! # Example
//!
//! ```rust,ignore
//! use nzwalks_service::repository::{ReadRepository, Repository, RepositoryResult};
//!
//! struct PgRegionRepository {
//!     pool: PgPool,
//! }
//!
//! impl ReadRepository<Region> for PgRegionRepository {
//!     async fn list(&self) -> RepositoryResult<Vec<Region>> {
//!         // SELECT * FROM regions
//!         todo!()
//!     }
//!
//!     async fn get(&self, id: &Uuid) -> RepositoryResult<Option<Region>> {
//!         // SELECT * FROM regions WHERE id = $1
//!         todo!()
//!     }
//! }
//! ```

use std::future::Future;

use uuid::Uuid;

use super::error::RepositoryError;

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Read access to a collection of entities
pub trait ReadRepository<Entity>: Send + Sync {
    /// All entities in repository-defined order
    fn list(&self) -> impl Future<Output = RepositoryResult<Vec<Entity>>> + Send;

    /// Find an entity by id
    ///
    /// Returns `Ok(None)` when no entity has that id.
    fn get(&self, id: &Uuid) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;
}

/// CRUD access to a collection of entities
///
/// Every method is atomic on its own. Nothing here spans calls, so a
/// caller that reads and then writes gets no isolation between the two.
pub trait Repository<Entity>: ReadRepository<Entity> {
    /// Store a new entity and return it with its assigned id
    ///
    /// Any id already present on `entity` is ignored.
    fn add(&self, entity: Entity) -> impl Future<Output = RepositoryResult<Entity>> + Send;

    /// Replace the entity stored under `id` with `entity`
    ///
    /// Full replace: every field comes from `entity`, only the id is kept.
    /// Returns `Ok(None)` when nothing is stored under `id`.
    fn update(
        &self,
        id: &Uuid,
        entity: Entity,
    ) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;

    /// Remove the entity stored under `id`, returning its last state
    ///
    /// Returns `Ok(None)` when nothing is stored under `id`.
    fn delete(&self, id: &Uuid) -> impl Future<Output = RepositoryResult<Option<Entity>>> + Send;
}
