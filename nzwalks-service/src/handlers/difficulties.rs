//! Read-only walk difficulty handler

use std::sync::Arc;

use uuid::Uuid;

use super::error::ApiError;
use super::traits::ReferenceHandler;
use crate::models::{Entity, WalkDifficulty, WalkDifficultyDto};
use crate::repository::ReadRepository;

/// Serves the seeded difficulty levels
pub struct DifficultyHandler<D> {
    difficulties: Arc<D>,
}

impl<D> DifficultyHandler<D> {
    pub fn new(difficulties: Arc<D>) -> Self {
        Self { difficulties }
    }
}

impl<D> Clone for DifficultyHandler<D> {
    fn clone(&self) -> Self {
        Self {
            difficulties: Arc::clone(&self.difficulties),
        }
    }
}

impl<D> ReferenceHandler<WalkDifficultyDto> for DifficultyHandler<D>
where
    D: ReadRepository<WalkDifficulty>,
{
    async fn list(&self) -> Result<Vec<WalkDifficultyDto>, ApiError> {
        let mut difficulties: Vec<WalkDifficultyDto> = self
            .difficulties
            .list()
            .await?
            .into_iter()
            .map(WalkDifficultyDto::from)
            .collect();
        difficulties.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(difficulties)
    }

    async fn get(&self, id: Uuid) -> Result<WalkDifficultyDto, ApiError> {
        self.difficulties
            .get(&id)
            .await?
            .map(WalkDifficultyDto::from)
            .ok_or_else(|| ApiError::not_found(WalkDifficulty::NAME, id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::ApiErrorKind;
    use crate::repository::InMemoryRepository;

    #[tokio::test]
    async fn test_list_is_sorted_by_name() {
        let repo = InMemoryRepository::with_entities(
            ["Medium", "Hard", "Easy"].map(WalkDifficulty::new),
        );
        let handler = DifficultyHandler::new(Arc::new(repo));

        let names: Vec<String> = handler
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Easy", "Hard", "Medium"]);
    }

    #[tokio::test]
    async fn test_get_known_and_unknown() {
        let easy = WalkDifficulty::new("Easy");
        let handler = DifficultyHandler::new(Arc::new(InMemoryRepository::with_entities([
            easy.clone(),
        ])));

        assert_eq!(handler.get(easy.id).await.unwrap().name, "Easy");
        assert_eq!(
            handler.get(Uuid::new_v4()).await.unwrap_err().kind,
            ApiErrorKind::NotFound
        );
    }
}
