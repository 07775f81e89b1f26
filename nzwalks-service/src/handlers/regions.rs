//! Region resource handler

use std::sync::Arc;

use uuid::Uuid;

use super::error::{ApiError, ApiOperation};
use super::traits::CollectionHandler;
use crate::models::{Entity, Region, RegionDto, RegionRequest};
use crate::repository::{ReadRepository, Repository};
use crate::validation::validate_region;

/// Orchestrates validation and storage for regions
pub struct RegionHandler<R> {
    regions: Arc<R>,
}

impl<R> RegionHandler<R> {
    pub fn new(regions: Arc<R>) -> Self {
        Self { regions }
    }
}

impl<R> Clone for RegionHandler<R> {
    fn clone(&self) -> Self {
        Self {
            regions: Arc::clone(&self.regions),
        }
    }
}

/// Validate `request`, handing it back only when every rule passes
fn check(
    operation: ApiOperation,
    request: Option<RegionRequest>,
) -> Result<RegionRequest, ApiError> {
    let errors = validate_region(request.as_ref());
    match request {
        Some(request) if errors.is_empty() => Ok(request),
        _ => {
            tracing::warn!(
                %operation,
                fields = ?errors.fields().collect::<Vec<_>>(),
                "Region request rejected"
            );
            Err(ApiError::validation_failed(operation, errors))
        }
    }
}

impl<R> CollectionHandler<RegionDto, RegionRequest, RegionRequest> for RegionHandler<R>
where
    R: Repository<Region>,
{
    async fn list(&self) -> Result<Vec<RegionDto>, ApiError> {
        let regions = self.regions.list().await?;
        tracing::info!(count = regions.len(), "Listing regions");
        Ok(regions.into_iter().map(RegionDto::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<RegionDto, ApiError> {
        let region = self
            .regions
            .get(&id)
            .await?
            .ok_or_else(|| ApiError::not_found(Region::NAME, id.to_string()))?;
        Ok(region.into())
    }

    async fn add(&self, dto: Option<RegionRequest>) -> Result<RegionDto, ApiError> {
        let request = check(ApiOperation::Add, dto)?;
        let region = self.regions.add(Region::from(request)).await?;
        tracing::info!(id = %region.id, code = %region.code, "Region added");
        Ok(region.into())
    }

    async fn update(&self, id: Uuid, dto: Option<RegionRequest>) -> Result<RegionDto, ApiError> {
        let request = check(ApiOperation::Update, dto)?;
        let region = self
            .regions
            .update(&id, Region::from(request))
            .await?
            .ok_or_else(|| {
                ApiError::not_found(Region::NAME, id.to_string())
                    .with_operation(ApiOperation::Update)
            })?;
        tracing::info!(%id, "Region updated");
        Ok(region.into())
    }

    async fn delete(&self, id: Uuid) -> Result<RegionDto, ApiError> {
        let region = self.regions.delete(&id).await?.ok_or_else(|| {
            ApiError::not_found(Region::NAME, id.to_string()).with_operation(ApiOperation::Delete)
        })?;
        tracing::info!(%id, "Region deleted");
        Ok(region.into())
    }
}
