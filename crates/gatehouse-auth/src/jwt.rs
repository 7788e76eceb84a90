//! Session token encoding and verification.
//!
//! Tokens are HS256 JWTs signed with [`SessionConfig::secret`]. Minting is
//! only used by the CLI and tests; in production the identity provider issues
//! the tokens and Gatehouse only verifies them.

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use gatehouse_config::SessionConfig;
use gatehouse_core::AppError;

use crate::claims::SessionClaims;

/// Identity data to embed in a freshly minted session token.
#[derive(Debug, Clone, Default)]
pub struct TokenSubject<'a> {
    pub user_id: &'a str,
    pub email: Option<&'a str>,
    pub name: Option<&'a str>,
    pub role: Option<&'a str>,
}

/// Creates a session token valid for [`SessionConfig::max_age_secs`].
///
/// # Errors
///
/// Returns an internal [`AppError`] if encoding fails.
pub fn create_session_token(
    subject: &TokenSubject<'_>,
    session_config: &SessionConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + session_config.max_age_secs.max(0) as usize;

    let claims = SessionClaims {
        sub: subject.user_id.to_string(),
        sid: Uuid::new_v4().to_string(),
        email: subject.email.map(str::to_string),
        name: subject.name.map(str::to_string),
        role: subject.role.map(str::to_string),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(session_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow::anyhow!("Failed to create session token: {}", e)))
}

/// Verifies signature and expiry and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized [`AppError`] for malformed, forged or expired
/// tokens.
pub fn verify_session_token(
    token: &str,
    session_config: &SessionConfig,
) -> Result<SessionClaims, AppError> {
    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(session_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::unauthorized(anyhow::anyhow!("Invalid session token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    fn config(secret: &str) -> SessionConfig {
        SessionConfig {
            secret: secret.into(),
            cookie_name: "gatehouse.session_token".into(),
            max_age_secs: 300,
        }
    }

    #[test]
    fn test_token_carries_role() {
        let config = config("test-secret");
        let token = create_session_token(
            &TokenSubject {
                user_id: "user-1",
                email: Some("ada@example.com"),
                role: Some("ADMIN"),
                ..Default::default()
            },
            &config,
        )
        .unwrap();

        let claims = verify_session_token(&token, &config).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
        assert_eq!(claims.email.as_deref(), Some("ada@example.com"));
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_unauthorized() {
        let token = create_session_token(
            &TokenSubject {
                user_id: "user-1",
                ..Default::default()
            },
            &config("secret-a"),
        )
        .unwrap();

        let err = verify_session_token(&token, &config("secret-b")).unwrap_err();
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = config("test-secret");
        // Expired well past the default 60s leeway.
        let claims = SessionClaims {
            sub: "user-1".into(),
            sid: "s".into(),
            email: None,
            name: None,
            role: Some("ADMIN".into()),
            exp: (Utc::now().timestamp() - 3600) as usize,
            iat: (Utc::now().timestamp() - 7200) as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_session_token(&token, &config).is_err());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(verify_session_token("not-a-jwt", &config("test-secret")).is_err());
    }
}
