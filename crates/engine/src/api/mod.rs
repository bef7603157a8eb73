//! API layer - HTTP entry points.

pub mod http;
pub mod views;

use std::sync::Arc;

use axum::{middleware, Router};

use crate::app::App;
use crate::infrastructure::current_user::capture_request_context;

/// Full application router: routes, fallback and the request-context layer.
pub fn router(app: Arc<App>) -> Router {
    http::routes()
        .fallback(http::not_found)
        .with_state(app)
        .layer(middleware::from_fn(capture_request_context))
}
