//! Application state management

use std::sync::Arc;

use crate::config::Config;
use crate::handlers::{DifficultyHandler, RegionHandler, WalkHandler};
use crate::models::{Region, Walk, WalkDifficulty};
use crate::repository::InMemoryRepository;

pub type RegionStore = InMemoryRepository<Region>;
pub type WalkStore = InMemoryRepository<Walk>;
pub type DifficultyStore = InMemoryRepository<WalkDifficulty>;

/// Application state shared across handlers
///
/// Cloning is cheap: the stores sit behind `Arc`s.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    regions: Arc<RegionStore>,
    walks: Arc<WalkStore>,
    difficulties: Arc<DifficultyStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl AppState {
    /// Create state with empty region and walk stores and the configured
    /// difficulty levels
    pub fn new(config: Config) -> Self {
        let difficulties = InMemoryRepository::with_entities(
            config
                .seed
                .difficulties
                .iter()
                .map(|name| WalkDifficulty::new(name.as_str())),
        );
        tracing::debug!(count = difficulties.len(), "Seeded walk difficulties");

        Self {
            config: Arc::new(config),
            regions: Arc::new(RegionStore::new()),
            walks: Arc::new(WalkStore::new()),
            difficulties: Arc::new(difficulties),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn regions(&self) -> &Arc<RegionStore> {
        &self.regions
    }

    pub fn walks(&self) -> &Arc<WalkStore> {
        &self.walks
    }

    pub fn difficulties(&self) -> &Arc<DifficultyStore> {
        &self.difficulties
    }

    pub fn region_handler(&self) -> RegionHandler<RegionStore> {
        RegionHandler::new(Arc::clone(&self.regions))
    }

    pub fn walk_handler(&self) -> WalkHandler<WalkStore, RegionStore, DifficultyStore> {
        WalkHandler::new(
            Arc::clone(&self.walks),
            Arc::clone(&self.regions),
            Arc::clone(&self.difficulties),
        )
    }

    pub fn difficulty_handler(&self) -> DifficultyHandler<DifficultyStore> {
        DifficultyHandler::new(Arc::clone(&self.difficulties))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seeds_three_difficulties() {
        let state = AppState::default();
        assert_eq!(state.difficulties().len(), 3);
        assert!(state.regions().is_empty());
        assert!(state.walks().is_empty());
    }

    #[test]
    fn test_clones_share_stores() {
        let mut config = Config::default();
        config.seed.difficulties = vec!["Alpine".to_string()];
        let state = AppState::new(config);
        let clone = state.clone();
        assert!(Arc::ptr_eq(state.regions(), clone.regions()));
        assert_eq!(clone.difficulties().len(), 1);
    }
}
