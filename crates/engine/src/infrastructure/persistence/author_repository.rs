//! Author repository that consults the current user

use std::sync::Arc;

use async_trait::async_trait;
use userlayer_domain::Author;

use crate::infrastructure::ports::{AuthorRepo, CurrentUserPort, RepoError};

/// Author repository with the current-user accessor injected.
///
/// Nothing is stored. `add` only looks up who is making the call, which is
/// the point of the demo: the data layer reaches the HTTP user without the
/// controller or the service passing it down.
pub struct UserAwareAuthorRepository {
    current_user: Arc<dyn CurrentUserPort>,
}

impl UserAwareAuthorRepository {
    pub fn new(current_user: Arc<dyn CurrentUserPort>) -> Self {
        Self { current_user }
    }
}

#[async_trait]
impl AuthorRepo for UserAwareAuthorRepository {
    async fn add(&self, _author: &Author) -> Result<(), RepoError> {
        let user_name = self.current_user.name();
        tracing::debug!(
            user_name = user_name.as_deref().unwrap_or("<anonymous>"),
            "Adding author on behalf of current user"
        );
        Ok(())
    }
}
