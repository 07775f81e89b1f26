//! Walk resource handler

use std::sync::Arc;

use uuid::Uuid;

use super::error::{ApiError, ApiOperation};
use super::traits::CollectionHandler;
use crate::models::{Entity, Region, Walk, WalkDifficulty, WalkDto, WalkRequest};
use crate::repository::{ReadRepository, Repository};
use crate::validation::validate_walk;

/// Orchestrates validation and storage for walks
///
/// Regions and difficulties are only read, to check the references a walk
/// request carries.
pub struct WalkHandler<W, R, D> {
    walks: Arc<W>,
    regions: Arc<R>,
    difficulties: Arc<D>,
}

impl<W, R, D> WalkHandler<W, R, D> {
    pub fn new(walks: Arc<W>, regions: Arc<R>, difficulties: Arc<D>) -> Self {
        Self {
            walks,
            regions,
            difficulties,
        }
    }
}

impl<W, R, D> Clone for WalkHandler<W, R, D> {
    fn clone(&self) -> Self {
        Self {
            walks: Arc::clone(&self.walks),
            regions: Arc::clone(&self.regions),
            difficulties: Arc::clone(&self.difficulties),
        }
    }
}

impl<W, R, D> WalkHandler<W, R, D>
where
    R: ReadRepository<Region>,
    D: ReadRepository<WalkDifficulty>,
{
    /// Validate `request` against the reference stores, handing it back only
    /// when every rule passes
    async fn check(
        &self,
        operation: ApiOperation,
        request: Option<WalkRequest>,
    ) -> Result<WalkRequest, ApiError> {
        let errors = validate_walk(
            request.as_ref(),
            self.regions.as_ref(),
            self.difficulties.as_ref(),
        )
        .await
        .map_err(|err| ApiError::from(err).with_operation(operation))?;

        match request {
            Some(request) if errors.is_empty() => Ok(request),
            _ => {
                tracing::warn!(
                    %operation,
                    fields = ?errors.fields().collect::<Vec<_>>(),
                    "Walk request rejected"
                );
                Err(ApiError::validation_failed(operation, errors))
            }
        }
    }
}

impl<W, R, D> CollectionHandler<WalkDto, WalkRequest, WalkRequest> for WalkHandler<W, R, D>
where
    W: Repository<Walk>,
    R: ReadRepository<Region>,
    D: ReadRepository<WalkDifficulty>,
{
    async fn list(&self) -> Result<Vec<WalkDto>, ApiError> {
        let walks = self.walks.list().await?;
        tracing::info!(count = walks.len(), "Listing walks");
        Ok(walks.into_iter().map(WalkDto::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<WalkDto, ApiError> {
        let walk = self
            .walks
            .get(&id)
            .await?
            .ok_or_else(|| ApiError::not_found(Walk::NAME, id.to_string()))?;
        Ok(walk.into())
    }

    async fn add(&self, dto: Option<WalkRequest>) -> Result<WalkDto, ApiError> {
        let request = self.check(ApiOperation::Add, dto).await?;
        let walk = self.walks.add(Walk::from(request)).await?;
        tracing::info!(id = %walk.id, region_id = %walk.region_id, "Walk added");
        Ok(walk.into())
    }

    async fn update(&self, id: Uuid, dto: Option<WalkRequest>) -> Result<WalkDto, ApiError> {
        let request = self.check(ApiOperation::Update, dto).await?;
        let walk = self
            .walks
            .update(&id, Walk::from(request))
            .await?
            .ok_or_else(|| {
                ApiError::not_found(Walk::NAME, id.to_string()).with_operation(ApiOperation::Update)
            })?;
        tracing::info!(%id, "Walk updated");
        Ok(walk.into())
    }

    async fn delete(&self, id: Uuid) -> Result<WalkDto, ApiError> {
        let walk = self.walks.delete(&id).await?.ok_or_else(|| {
            ApiError::not_found(Walk::NAME, id.to_string()).with_operation(ApiOperation::Delete)
        })?;
        tracing::info!(%id, "Walk deleted");
        Ok(walk.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::ApiErrorKind;
    use crate::handlers::test_support::{FailingRepository, RecordingRepository};
    use crate::models::RegionRequest;
    use crate::repository::{InMemoryRepository, RepositoryErrorKind};

    type MemoryHandler = WalkHandler<
        InMemoryRepository<Walk>,
        InMemoryRepository<Region>,
        InMemoryRepository<WalkDifficulty>,
    >;

    struct Fixture {
        handler: MemoryHandler,
        regions: Arc<InMemoryRepository<Region>>,
        region_id: Uuid,
        difficulty_id: Uuid,
    }

    async fn fixture() -> Fixture {
        let regions = Arc::new(InMemoryRepository::new());
        let region = regions
            .add(Region::from(RegionRequest {
                code: Some("AKL".to_string()),
                name: Some("Auckland".to_string()),
                area: 4894.0,
                lat: -36.8,
                long: 174.7,
                population: 1_700_000,
            }))
            .await
            .unwrap();
        let medium = WalkDifficulty::new("Medium");
        let difficulties = Arc::new(InMemoryRepository::with_entities([medium.clone()]));

        Fixture {
            handler: WalkHandler::new(
                Arc::new(InMemoryRepository::new()),
                Arc::clone(&regions),
                difficulties,
            ),
            regions,
            region_id: region.id,
            difficulty_id: medium.id,
        }
    }

    fn walk_in(fixture: &Fixture, name: &str) -> WalkRequest {
        WalkRequest {
            name: Some(name.to_string()),
            length: 4.5,
            region_id: fixture.region_id,
            walk_difficulty_id: fixture.difficulty_id,
        }
    }

    #[tokio::test]
    async fn test_add_then_get() {
        let fixture = fixture().await;
        let created = fixture
            .handler
            .add(Some(walk_in(&fixture, "Rangitoto Summit")))
            .await
            .unwrap();
        assert!(!created.id.is_nil());
        assert_eq!(created.region_id, fixture.region_id);

        let fetched = fixture.handler.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fixture.handler.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_empty_name_is_the_only_error() {
        let fixture = fixture().await;
        let err = fixture
            .handler
            .add(Some(walk_in(&fixture, "")))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::ValidationFailed);
        assert_eq!(err.field_errors.fields().collect::<Vec<_>>(), vec!["Name"]);
        assert!(fixture.handler.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_references_rejected() {
        let fixture = fixture().await;
        let request = WalkRequest {
            region_id: Uuid::new_v4(),
            walk_difficulty_id: Uuid::new_v4(),
            ..walk_in(&fixture, "Nowhere Track")
        };
        let err = fixture.handler.add(Some(request)).await.unwrap_err();
        assert_eq!(
            err.field_errors.fields().collect::<Vec<_>>(),
            vec!["RegionId", "WalkDifficultyId"]
        );
    }

    #[tokio::test]
    async fn test_region_removed_after_add_keeps_walk() {
        let fixture = fixture().await;
        let created = fixture
            .handler
            .add(Some(walk_in(&fixture, "Tama Lakes")))
            .await
            .unwrap();

        fixture.regions.delete(&fixture.region_id).await.unwrap();

        // The dangling walk is still served, but can no longer be updated
        // against its old region.
        assert_eq!(fixture.handler.get(created.id).await.unwrap(), created);
        let err = fixture
            .handler
            .update(created.id, Some(walk_in(&fixture, "Tama Lakes")))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::ValidationFailed);
        assert_eq!(err.operation, ApiOperation::Update);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let fixture = fixture().await;
        let err = fixture
            .handler
            .update(Uuid::new_v4(), Some(walk_in(&fixture, "Ghost")))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_update_replaces_and_delete_removes() {
        let fixture = fixture().await;
        let created = fixture
            .handler
            .add(Some(walk_in(&fixture, "Coast Track")))
            .await
            .unwrap();

        let replacement = WalkRequest {
            length: 12.0,
            ..walk_in(&fixture, "Coastal Track")
        };
        let updated = fixture
            .handler
            .update(created.id, Some(replacement))
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Coastal Track");
        assert_eq!(updated.length, 12.0);

        assert_eq!(fixture.handler.delete(created.id).await.unwrap(), updated);
        assert_eq!(
            fixture.handler.get(created.id).await.unwrap_err().kind,
            ApiErrorKind::NotFound
        );
    }

    #[tokio::test]
    async fn test_lookup_failure_is_not_a_validation_error() {
        let walks = Arc::new(RecordingRepository::<Walk>::default());
        let handler = WalkHandler::new(
            Arc::clone(&walks),
            Arc::new(FailingRepository::new(RepositoryErrorKind::Timeout)),
            Arc::new(InMemoryRepository::<WalkDifficulty>::new()),
        );

        let request = WalkRequest {
            name: Some("Anywhere".to_string()),
            length: 1.0,
            ..WalkRequest::default()
        };
        let err = handler.add(Some(request)).await.unwrap_err();
        assert_eq!(err.kind, ApiErrorKind::ServiceUnavailable);
        assert_eq!(err.operation, ApiOperation::Add);
        assert!(err.field_errors.is_empty());
        assert_eq!(walks.calls(), 0);
    }

    #[tokio::test]
    async fn test_absent_request_never_reaches_repository() {
        let walks = Arc::new(RecordingRepository::<Walk>::default());
        let handler = WalkHandler::new(
            Arc::clone(&walks),
            Arc::new(InMemoryRepository::<Region>::new()),
            Arc::new(InMemoryRepository::<WalkDifficulty>::new()),
        );

        let err = handler.add(None).await.unwrap_err();
        assert_eq!(err.field_errors.fields().collect::<Vec<_>>(), vec!["Request"]);
        assert_eq!(walks.calls(), 0);
    }
}
