//! Domain entities - Core business objects

mod author;

pub use author::Author;
