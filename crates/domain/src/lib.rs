//! userlayer domain types.
//!
//! Entities and value objects shared by every layer of the engine. Nothing in
//! this crate performs I/O.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::Author;
pub use error::DomainError;
pub use value_objects::{UserIdentity, UserName};
