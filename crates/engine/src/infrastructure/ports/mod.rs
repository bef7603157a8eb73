//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Author storage (the demo repository only traces the call)
//! - The current HTTP user (could swap header identity -> JWT claims)

mod error;
mod identity;
mod repos;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::AuthorRepo;

// =============================================================================
// Identity Ports
// =============================================================================
pub use identity::CurrentUserPort;

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockAuthorRepo;

#[cfg(test)]
pub use identity::MockCurrentUserPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
