//! HTTP routes.

use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use userlayer_domain::Author;

use super::views::{self, ErrorViewModel};
use crate::app::App;
use crate::infrastructure::current_user::{CurrentRequest, CorrelationId};
use crate::infrastructure::ports::CurrentUserPort;

/// Create all HTTP routes.
///
/// Home controller actions follow the default MVC route
/// `/{controller=Home}/{action=Index}`.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(index))
        .route("/Home", get(index))
        .route("/Home/Index", get(index))
        .route("/Home/Privacy", get(privacy))
        .route("/Home/Error", get(error))
        .route("/api/health", get(health))
        .route("/api/me", get(me))
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Home
// =============================================================================

async fn index(
    State(app): State<Arc<App>>,
    CurrentRequest(ctx): CurrentRequest,
) -> Result<Html<String>, ApiError> {
    app.use_cases
        .author
        .ops
        .add(Author::new())
        .await?;
    Ok(Html(views::index(&ctx.user)))
}

async fn privacy() -> Html<String> {
    Html(views::privacy())
}

async fn error(CurrentRequest(ctx): CurrentRequest) -> impl IntoResponse {
    let model = ErrorViewModel {
        request_id: Some(ctx.request_id.to_string()),
    };
    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache"),
            (header::PRAGMA, "no-cache"),
        ],
        Html(views::error(&model)),
    )
}

// =============================================================================
// Current user
// =============================================================================

#[derive(Debug, Serialize)]
struct CurrentUserResponse {
    authenticated: bool,
    user_id: Option<String>,
    name: Option<String>,
    email: Option<String>,
    roles: Vec<String>,
    request_id: CorrelationId,
}

/// Report the caller as seen through the injected accessor.
async fn me(
    State(app): State<Arc<App>>,
    CurrentRequest(ctx): CurrentRequest,
) -> Json<CurrentUserResponse> {
    let current_user = &app.repositories.current_user;
    let identity = current_user.identity();
    Json(CurrentUserResponse {
        authenticated: current_user.is_authenticated(),
        user_id: current_user.user_id(),
        name: current_user.name(),
        email: current_user.email(),
        roles: identity.roles().to_vec(),
        request_id: ctx.request_id,
    })
}

pub(crate) async fn not_found() -> ApiError {
    ApiError::NotFound
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => {
                (axum::http::StatusCode::NOT_FOUND, "Not found").into_response()
            }
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed");
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal error",
                )
                    .into_response()
            }
        }
    }
}

impl From<crate::use_cases::author::AuthorError> for ApiError {
    fn from(e: crate::use_cases::author::AuthorError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
