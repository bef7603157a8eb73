//! userlayer Engine - Main entry point.

use std::sync::Arc;

use axum::http::header::HeaderName;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use userlayer_engine::api;
use userlayer_engine::app::App;
use userlayer_engine::infrastructure::{
    current_user::{
        HttpCurrentUser, REQUEST_ID_HEADER, USER_EMAIL_HEADER, USER_ID_HEADER, USER_NAME_HEADER,
        USER_ROLES_HEADER,
    },
    ports::CurrentUserPort,
    settings::{CorsOrigins, ServerConfig},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary is usually run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "userlayer_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting userlayer engine");

    let config = ServerConfig::from_env();

    // One accessor for the whole process; it resolves the user per request.
    let current_user: Arc<dyn CurrentUserPort> = Arc::new(HttpCurrentUser::new());
    let app = Arc::new(App::new(current_user));

    let mut router = api::router(app).layer(TraceLayer::new_for_http());

    if let Some(cors) = config.cors.as_ref().and_then(build_cors_layer) {
        router = router.layer(cors);
    }

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}

fn build_cors_layer(origins: &CorsOrigins) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        // Identity headers trigger CORS preflights.
        .allow_headers([
            HeaderName::from_static(USER_ID_HEADER),
            HeaderName::from_static(USER_NAME_HEADER),
            HeaderName::from_static(USER_EMAIL_HEADER),
            HeaderName::from_static(USER_ROLES_HEADER),
        ])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]);

    match origins {
        CorsOrigins::Any => Some(cors.allow_origin(Any)),
        CorsOrigins::List(list) => {
            let origins: Vec<HeaderValue> = list
                .iter()
                .filter_map(|s| HeaderValue::from_str(s).ok())
                .collect();

            if origins.is_empty() {
                tracing::warn!("CORS_ALLOWED_ORIGINS contained no valid origins, CORS disabled");
                return None;
            }

            Some(cors.allow_origin(origins))
        }
    }
}
