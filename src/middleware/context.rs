use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use gatehouse_auth::{AuthorizationContext, Role, User, require_role};
use gatehouse_core::AppError;

/// The [`AuthorizationContext`] left behind by the pipeline.
///
/// # Example
///
/// ```ignore
/// async fn handler(RequestAuth(context): RequestAuth) -> impl IntoResponse {
///     Json(context)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequestAuth(pub AuthorizationContext);

impl<S> FromRequestParts<S> for RequestAuth
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthorizationContext>()
            .cloned()
            .map(RequestAuth)
            .ok_or_else(|| {
                AppError::internal(anyhow::anyhow!(
                    "Authorization context missing; is the auth pipeline installed?"
                ))
            })
    }
}

/// Rejection for handler-level role checks.
///
/// Anonymous callers are sent to sign in rather than shown an error.
#[derive(Debug)]
pub enum AuthRejection {
    SignIn { location: String },
    Error(AppError),
}

impl From<AppError> for AuthRejection {
    fn from(err: AppError) -> Self {
        AuthRejection::Error(err)
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::SignIn { location } => Redirect::to(&location).into_response(),
            AuthRejection::Error(err) => err.into_response(),
        }
    }
}

impl RequestAuth {
    /// Role check for individual handlers.
    ///
    /// Passes with `None` while auth is disabled. With auth enabled an
    /// anonymous caller is redirected to `signin_path` and an
    /// under-privileged one gets 403.
    pub fn require_role(
        &self,
        required: Role,
        signin_path: &str,
    ) -> Result<Option<&User>, AuthRejection> {
        if self.0.auth_enabled && self.0.user.is_none() {
            return Err(AuthRejection::SignIn {
                location: signin_path.to_string(),
            });
        }

        require_role(&self.0, required).map_err(|denied| AppError::forbidden(denied).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{StatusCode, header};
    use gatehouse_auth::{Identity, Session};

    const SIGNIN: &str = "/auth/signin";

    fn signed_in(role: Role) -> RequestAuth {
        RequestAuth(AuthorizationContext::new(true).with_identity(Identity {
            session: Session {
                id: "s".into(),
                user_id: "u".into(),
                expires_at: None,
            },
            user: User {
                id: "u".into(),
                email: None,
                name: None,
                role,
            },
        }))
    }

    #[test]
    fn test_require_role_skipped_when_disabled() {
        let auth = RequestAuth(AuthorizationContext::new(false));
        assert!(auth.require_role(Role::SuperAdmin, SIGNIN).unwrap().is_none());
    }

    #[test]
    fn test_require_role_anonymous_redirects_to_signin() {
        let auth = RequestAuth(AuthorizationContext::new(true));
        let response = auth
            .require_role(Role::User, SIGNIN)
            .unwrap_err()
            .into_response();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), SIGNIN);
    }

    #[test]
    fn test_require_role_insufficient_is_forbidden() {
        let err = signed_in(Role::Admin)
            .require_role(Role::SuperAdmin, SIGNIN)
            .unwrap_err();

        match err {
            AuthRejection::Error(err) => {
                assert_eq!(err.status, StatusCode::FORBIDDEN);
                assert_eq!(
                    err.error.to_string(),
                    "Access denied. Required role: SUPER_ADMIN"
                );
            }
            other => panic!("expected 403, got {other:?}"),
        }
    }

    #[test]
    fn test_require_role_returns_user() {
        let auth = signed_in(Role::SuperAdmin);
        let user = auth.require_role(Role::Admin, SIGNIN).unwrap().unwrap();
        assert_eq!(user.id, "u");
    }
}
