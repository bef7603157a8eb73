//! Current HTTP user, reachable from any layer.
//!
//! `capture_request_context` runs in front of every route. It reads the
//! identity headers, tags the request with a [`CorrelationId`] and keeps both in a
//! task-local for as long as the request future is being polled. Anything
//! holding an `Arc<dyn CurrentUserPort>` (repositories included) can then ask
//! [`HttpCurrentUser`] who the caller is without the request being threaded
//! through every signature.
//!
//! Identity is taken from trusted headers:
//!
//! | Header         | Meaning                              |
//! |----------------|--------------------------------------|
//! | `X-User-Id`    | user id; absent means anonymous      |
//! | `X-User-Name`  | display name                         |
//! | `X-User-Email` | email                                |
//! | `X-User-Roles` | comma-separated role list            |

use std::convert::Infallible;
use std::fmt;

use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use serde::Serialize;
use userlayer_domain::{UserIdentity, UserName};
use uuid::Uuid;

use super::ports::CurrentUserPort;

pub const USER_ID_HEADER: &str = "x-user-id";
pub const USER_NAME_HEADER: &str = "x-user-name";
pub const USER_EMAIL_HEADER: &str = "x-user-email";
pub const USER_ROLES_HEADER: &str = "x-user-roles";
pub const REQUEST_ID_HEADER: &str = "x-request-id";

tokio::task_local! {
    static REQUEST_CONTEXT: RequestContext;
}

/// Identifier assigned to each inbound request, echoed as `X-Request-Id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CorrelationId(Uuid);

impl CorrelationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Short format (first 8 characters) for logging.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for CorrelationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the engine knows about the request in flight.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: CorrelationId,
    pub user: UserIdentity,
}

impl RequestContext {
    pub fn new(user: UserIdentity) -> Self {
        Self {
            request_id: CorrelationId::new(),
            user,
        }
    }

    pub fn anonymous() -> Self {
        Self::new(UserIdentity::anonymous())
    }

    /// Context of the request currently being processed, if any.
    pub fn current() -> Option<Self> {
        REQUEST_CONTEXT.try_with(Clone::clone).ok()
    }

    /// Run `f` with `self` as the current request context.
    pub async fn scope<F>(self, f: F) -> F::Output
    where
        F: std::future::Future,
    {
        REQUEST_CONTEXT.scope(self, f).await
    }
}

// =============================================================================
// Accessor
// =============================================================================

/// Singleton `CurrentUserPort` backed by the request task-local.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpCurrentUser;

impl HttpCurrentUser {
    pub fn new() -> Self {
        Self
    }
}

impl CurrentUserPort for HttpCurrentUser {
    fn identity(&self) -> UserIdentity {
        REQUEST_CONTEXT
            .try_with(|ctx| ctx.user.clone())
            .unwrap_or_else(|_| UserIdentity::anonymous())
    }
}

// =============================================================================
// Middleware
// =============================================================================

/// Build the request context and run the rest of the stack inside it.
///
/// Permissive: requests without identity headers (or with malformed ones)
/// continue as anonymous.
pub async fn capture_request_context(mut request: Request, next: Next) -> Response {
    let context = RequestContext::new(identity_from_headers(request.headers()));
    let request_id = context.request_id;

    tracing::debug!(
        request_id = %request_id.short(),
        user = %context.user,
        authenticated = context.user.is_authenticated(),
        "Captured request context"
    );

    request.extensions_mut().insert(context.clone());
    let mut response = context.scope(next.run(request)).await;

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// Map identity headers to a [`UserIdentity`].
pub fn identity_from_headers(headers: &HeaderMap) -> UserIdentity {
    let Some(user_id) = header_str(headers, USER_ID_HEADER) else {
        return UserIdentity::anonymous();
    };

    let name = header_str(headers, USER_NAME_HEADER).and_then(|raw| match UserName::new(raw) {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring invalid X-User-Name header");
            None
        }
    });

    let identity = match UserIdentity::authenticated(user_id, name) {
        Ok(identity) => identity,
        Err(e) => {
            tracing::warn!(error = %e, "Invalid X-User-Id header, treating request as anonymous");
            return UserIdentity::anonymous();
        }
    };

    let identity = match header_str(headers, USER_EMAIL_HEADER) {
        Some(email) => identity.with_email(email),
        None => identity,
    };

    match header_str(headers, USER_ROLES_HEADER) {
        Some(roles) => identity.with_roles(roles.split(',')),
        None => identity,
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &'static str) -> Option<&'a str> {
    let value = headers.get(name)?;
    match std::str::from_utf8(value.as_bytes()) {
        Ok(s) => Some(s),
        Err(_) => {
            tracing::warn!(header = name, "Ignoring non-UTF-8 header value");
            None
        }
    }
}

// =============================================================================
// Extractor
// =============================================================================

/// Extractor for the request context in handlers.
///
/// Never rejects: without the middleware it falls back to the task-local, then
/// to a fresh anonymous context.
#[derive(Debug, Clone)]
pub struct CurrentRequest(pub RequestContext);

impl<S> FromRequestParts<S> for CurrentRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let context = parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .or_else(RequestContext::current)
            .unwrap_or_else(RequestContext::anonymous);
        Ok(Self(context))
    }
}
