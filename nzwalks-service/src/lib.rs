//! # nzwalks-service
//!
//! CRUD HTTP service for New Zealand regions and the walks in them.
//!
//! - Regions and walks can be listed, fetched, added, replaced and deleted
//! - Every add and update is validated first; a rejected request never
//!   reaches the store and comes back as a 400 field-error map
//! - Walks must reference an existing region and walk difficulty
//! - Walk difficulties are read-only reference data seeded from config
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nzwalks_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let app = app(AppState::new(config.clone()));
//!
//!     Server::new(config).serve(app).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod health;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod repository;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, CorsMode, LogFormat};
    pub use crate::error::{Error, Result};
    pub use crate::handlers::{
        ApiError, ApiErrorKind, ApiOperation, CollectionHandler, OptionalJson, ReferenceHandler,
    };
    pub use crate::health::{health, readiness};
    pub use crate::models::{
        Region, RegionDto, RegionRequest, Walk, WalkDifficulty, WalkDifficultyDto, WalkDto,
        WalkRequest,
    };
    pub use crate::observability::init_tracing;
    pub use crate::repository::{InMemoryRepository, ReadRepository, Repository};
    pub use crate::responses::Created;
    pub use crate::routes::app;
    pub use crate::server::Server;
    pub use crate::state::AppState;
    pub use crate::validation::FieldErrors;
}
