//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    persistence::UserAwareAuthorRepository,
    ports::{AuthorRepo, CurrentUserPort},
};
use crate::use_cases;

/// Main application state.
///
/// Holds all repository ports and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Ports handlers read directly.
///
/// The author repository is not listed: it is owned by `AuthorOps` and only
/// reachable through the use case.
pub struct Repositories {
    pub current_user: Arc<dyn CurrentUserPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub author: use_cases::AuthorUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(current_user: Arc<dyn CurrentUserPort>) -> Self {
        let author_repo: Arc<dyn AuthorRepo> =
            Arc::new(UserAwareAuthorRepository::new(current_user.clone()));
        Self::with_author_repo(current_user, author_repo)
    }

    /// Create an App around a caller-supplied author repository.
    pub fn with_author_repo(
        current_user: Arc<dyn CurrentUserPort>,
        author_repo: Arc<dyn AuthorRepo>,
    ) -> Self {
        let author_ops = Arc::new(use_cases::AuthorOps::new(author_repo));

        Self {
            repositories: Repositories { current_user },
            use_cases: UseCases {
                author: use_cases::AuthorUseCases::new(author_ops),
            },
        }
    }
}
