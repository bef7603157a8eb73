//! userlayer Engine library.
//!
//! A three-layer web application in which the data layer reads the identity
//! of the current HTTP user through an injected accessor.
//!
//! ## Structure
//!
//! - `api/` - HTTP routes and server-rendered pages (presentation)
//! - `use_cases/` - Service operations, forwarding to repository ports
//! - `infrastructure/` - Port traits, the current-user accessor, repositories, settings
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
