//! Access to the user behind the current request from any layer.

use userlayer_domain::UserIdentity;

/// Read-only view of the current HTTP user.
///
/// Implementations are shared singletons; the identity they return is the one
/// bound to the request being processed when the call is made. Outside of a
/// request every method answers for an anonymous user.
#[cfg_attr(test, mockall::automock)]
pub trait CurrentUserPort: Send + Sync {
    fn identity(&self) -> UserIdentity;

    fn name(&self) -> Option<String> {
        self.identity().name().map(|n| n.as_str().to_string())
    }

    fn user_id(&self) -> Option<String> {
        self.identity().user_id().map(str::to_string)
    }

    fn email(&self) -> Option<String> {
        self.identity().email().map(str::to_string)
    }

    fn is_authenticated(&self) -> bool {
        self.identity().is_authenticated()
    }

    fn is_in_role(&self, role: &str) -> bool {
        self.identity().is_in_role(role)
    }
}
