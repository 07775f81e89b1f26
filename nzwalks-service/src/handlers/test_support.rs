//! Repository doubles for handler tests

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::models::Entity;
use crate::repository::{
    InMemoryRepository, ReadRepository, Repository, RepositoryError, RepositoryErrorKind,
    RepositoryOperation, RepositoryResult,
};

/// Repository whose every call fails with the configured kind
pub(crate) struct FailingRepository {
    kind: RepositoryErrorKind,
}

impl FailingRepository {
    pub(crate) fn new(kind: RepositoryErrorKind) -> Self {
        Self { kind }
    }

    fn fail(&self, operation: RepositoryOperation) -> RepositoryError {
        RepositoryError::new(operation, self.kind, "store offline")
    }
}

impl<E: Entity> ReadRepository<E> for FailingRepository {
    async fn list(&self) -> RepositoryResult<Vec<E>> {
        Err(self.fail(RepositoryOperation::List))
    }

    async fn get(&self, _id: &Uuid) -> RepositoryResult<Option<E>> {
        Err(self.fail(RepositoryOperation::Get))
    }
}

impl<E: Entity> Repository<E> for FailingRepository {
    async fn add(&self, _entity: E) -> RepositoryResult<E> {
        Err(self.fail(RepositoryOperation::Add))
    }

    async fn update(&self, _id: &Uuid, _entity: E) -> RepositoryResult<Option<E>> {
        Err(self.fail(RepositoryOperation::Update))
    }

    async fn delete(&self, _id: &Uuid) -> RepositoryResult<Option<E>> {
        Err(self.fail(RepositoryOperation::Delete))
    }
}

/// In-memory repository that counts every call made to it
pub(crate) struct RecordingRepository<E> {
    inner: InMemoryRepository<E>,
    calls: AtomicUsize,
}

impl<E: Entity> Default for RecordingRepository<E> {
    fn default() -> Self {
        Self {
            inner: InMemoryRepository::new(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl<E> RecordingRepository<E> {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl<E: Entity> ReadRepository<E> for RecordingRepository<E> {
    async fn list(&self) -> RepositoryResult<Vec<E>> {
        self.record();
        self.inner.list().await
    }

    async fn get(&self, id: &Uuid) -> RepositoryResult<Option<E>> {
        self.record();
        self.inner.get(id).await
    }
}

impl<E: Entity> Repository<E> for RecordingRepository<E> {
    async fn add(&self, entity: E) -> RepositoryResult<E> {
        self.record();
        self.inner.add(entity).await
    }

    async fn update(&self, id: &Uuid, entity: E) -> RepositoryResult<Option<E>> {
        self.record();
        self.inner.update(id, entity).await
    }

    async fn delete(&self, id: &Uuid) -> RepositoryResult<Option<E>> {
        self.record();
        self.inner.delete(id).await
    }
}
