//! Infrastructure - port definitions and their adapters.

pub mod current_user;
pub mod persistence;
pub mod ports;
pub mod settings;
