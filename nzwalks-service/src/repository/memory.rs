//! In-process repository backed by a concurrent map

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use super::traits::{ReadRepository, Repository, RepositoryResult};
use crate::models::Entity;

/// Repository keeping entities in a [`DashMap`]
///
/// Cloning is cheap and clones share the same entries. Listing order is
/// whatever the map yields; callers must not depend on it.
#[derive(Debug)]
pub struct InMemoryRepository<E> {
    entries: Arc<DashMap<Uuid, E>>,
}

impl<E> Clone for InMemoryRepository<E> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Create a repository pre-populated with entities, keeping their ids
    pub fn with_entities(entities: impl IntoIterator<Item = E>) -> Self {
        let repository = Self::new();
        for entity in entities {
            repository.entries.insert(entity.id(), entity);
        }
        repository
    }

    /// Number of stored entities
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the repository holds no entities
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: Entity> ReadRepository<E> for InMemoryRepository<E> {
    async fn list(&self) -> RepositoryResult<Vec<E>> {
        Ok(self.entries.iter().map(|entry| entry.value().clone()).collect())
    }

    async fn get(&self, id: &Uuid) -> RepositoryResult<Option<E>> {
        Ok(self.entries.get(id).map(|entry| entry.value().clone()))
    }
}

impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn add(&self, entity: E) -> RepositoryResult<E> {
        let entity = entity.with_id(Uuid::new_v4());
        self.entries.insert(entity.id(), entity.clone());
        tracing::debug!(entity = E::NAME, id = %entity.id(), "Entity stored");
        Ok(entity)
    }

    async fn update(&self, id: &Uuid, entity: E) -> RepositoryResult<Option<E>> {
        let Some(mut slot) = self.entries.get_mut(id) else {
            return Ok(None);
        };
        let entity = entity.with_id(*id);
        *slot = entity.clone();
        Ok(Some(entity))
    }

    async fn delete(&self, id: &Uuid) -> RepositoryResult<Option<E>> {
        Ok(self.entries.remove(id).map(|(_, entity)| entity))
    }
}
