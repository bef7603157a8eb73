//! Repository adapters
//!
//! Implementations of the repository ports declared in `infrastructure::ports`.

mod author_repository;

pub use author_repository::UserAwareAuthorRepository;
