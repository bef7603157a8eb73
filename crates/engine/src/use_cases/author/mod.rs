//! Author use cases.

use std::sync::Arc;

use userlayer_domain::Author;

use crate::infrastructure::ports::{AuthorRepo, RepoError};

/// Container for author use cases.
pub struct AuthorUseCases {
    pub ops: Arc<AuthorOps>,
}

impl AuthorUseCases {
    pub fn new(ops: Arc<AuthorOps>) -> Self {
        Self { ops }
    }
}

/// Author operations.
pub struct AuthorOps {
    author: Arc<dyn AuthorRepo>,
}

impl AuthorOps {
    pub fn new(author: Arc<dyn AuthorRepo>) -> Self {
        Self { author }
    }

    /// Hand the author to the repository unchanged.
    pub async fn add(&self, author: Author) -> Result<(), AuthorError> {
        self.author.add(&author).await?;
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AuthorError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockAuthorRepo;

    #[tokio::test]
    async fn add_forwards_exactly_once_with_same_author() {
        let mut repo = MockAuthorRepo::new();
        repo.expect_add()
            .withf(|author| *author == Author::new())
            .times(1)
            .returning(|_| Ok(()));

        let ops = AuthorOps::new(Arc::new(repo));
        let result = ops.add(Author::new()).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn add_propagates_repository_error() {
        let mut repo = MockAuthorRepo::new();
        repo.expect_add()
            .times(1)
            .returning(|_| Err(RepoError::unavailable("offline")));

        let ops = AuthorOps::new(Arc::new(repo));
        let err = ops.add(Author::new()).await.unwrap_err();

        assert!(matches!(err, AuthorError::Repo(RepoError::Unavailable(_))));
        assert_eq!(
            err.to_string(),
            "Repository error: Repository unavailable: offline"
        );
    }
}
