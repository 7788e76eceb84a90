//! Per-request authorization context.

use serde::Serialize;

use crate::roles::Role;
use crate::session::{Identity, Session, User};

/// What the pipeline learned about the current request.
///
/// Created by the toggle step with only `auth_enabled` set, enriched by the
/// enforcement step once a session is resolved, then handed to downstream
/// handlers. Each step returns a new value instead of mutating in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuthorizationContext {
    pub auth_enabled: bool,
    pub user: Option<User>,
    pub session: Option<Session>,
}

impl AuthorizationContext {
    pub fn new(auth_enabled: bool) -> Self {
        Self {
            auth_enabled,
            user: None,
            session: None,
        }
    }

    pub fn with_identity(self, identity: Identity) -> Self {
        Self {
            auth_enabled: self.auth_enabled,
            user: Some(identity.user),
            session: Some(identity.session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_identity_keeps_toggle() {
        let identity = Identity {
            session: Session {
                id: "s".into(),
                user_id: "u".into(),
                expires_at: None,
            },
            user: User {
                id: "u".into(),
                email: None,
                name: None,
                role: Role::Admin,
            },
        };

        let context = AuthorizationContext::new(true).with_identity(identity);

        assert!(context.auth_enabled);
        assert!(context.is_authenticated());
        assert_eq!(context.role(), Some(Role::Admin));
    }

    #[test]
    fn test_new_context_is_anonymous() {
        let context = AuthorizationContext::new(false);
        assert!(!context.is_authenticated());
        assert_eq!(context.role(), None);
    }
}
