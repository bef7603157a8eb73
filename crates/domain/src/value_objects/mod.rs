//! Value objects - Immutable objects defined by their attributes

mod user_identity;

pub use user_identity::{UserIdentity, UserName};
