//! Resource handlers for regions, walks and walk difficulties
//!
//! Each handler sits between the HTTP routes and the repositories: it runs
//! the validators, maps requests to entities and entities to DTOs, and turns
//! "nothing stored under that id" into [`ApiErrorKind::NotFound`].
//!
//! Handlers are generic over their repositories so tests can swap in
//! failing or call-counting stores.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use nzwalks_service::handlers::{CollectionHandler, RegionHandler};
//! use nzwalks_service::models::{Region, RegionRequest};
//! use nzwalks_service::repository::InMemoryRepository;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let handler = RegionHandler::new(Arc::new(InMemoryRepository::<Region>::new()));
//!
//! let request = RegionRequest {
//!     code: Some("NSN".to_string()),
//!     name: Some("Nelson".to_string()),
//!     area: 445.0,
//!     ..RegionRequest::default()
//! };
//! let created = handler.add(Some(request)).await.unwrap();
//! assert_eq!(handler.get(created.id).await.unwrap().code, "NSN");
//! # });
//! ```

mod difficulties;
mod error;
mod extract;
mod regions;
mod traits;
mod walks;

#[cfg(test)]
pub(crate) mod test_support;

pub use difficulties::DifficultyHandler;
pub use error::{ApiError, ApiErrorKind, ApiErrorResponse, ApiOperation};
pub use extract::OptionalJson;
pub use regions::RegionHandler;
pub use traits::{CollectionHandler, ReferenceHandler};
pub use walks::WalkHandler;
