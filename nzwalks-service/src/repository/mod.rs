//! Repository traits and the in-memory store
//!
//! The resource handlers only ever talk to storage through these traits.
//! [`InMemoryRepository`] is the store the binary wires up; a database-backed
//! store would implement the same two traits.
//!
//! # Example
//!
//! ```rust
//! use nzwalks_service::models::WalkDifficulty;
//! use nzwalks_service::repository::{InMemoryRepository, ReadRepository};
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let easy = WalkDifficulty::new("Easy");
//! let difficulties = InMemoryRepository::with_entities([easy.clone()]);
//!
//! let found = difficulties.get(&easy.id).await.unwrap();
//! assert_eq!(found, Some(easy));
//! # });
//! ```

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation};
pub use memory::InMemoryRepository;
pub use traits::{ReadRepository, Repository, RepositoryResult};
