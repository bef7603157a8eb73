//! Repository port traits for data access.

use async_trait::async_trait;
use userlayer_domain::Author;

use super::error::RepoError;

// =============================================================================
// Database Ports (one per entity type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepo: Send + Sync {
    async fn add(&self, author: &Author) -> Result<(), RepoError>;
}
