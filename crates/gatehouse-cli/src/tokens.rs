use gatehouse_auth::{TokenSubject, create_session_token};
use gatehouse_config::SessionConfig;

/// Mints a session token the server will accept as a bearer token or cookie.
pub fn issue_token(subject: &TokenSubject<'_>, config: &SessionConfig) -> anyhow::Result<String> {
    create_session_token(subject, config).map_err(|e| e.error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatehouse_auth::verify_session_token;

    #[test]
    fn test_issued_token_verifies() {
        let config = SessionConfig {
            secret: "cli-secret".into(),
            cookie_name: "gatehouse.session_token".into(),
            max_age_secs: 60,
        };

        let token = issue_token(
            &TokenSubject {
                user_id: "ops",
                role: Some("SUPER_ADMIN"),
                ..Default::default()
            },
            &config,
        )
        .unwrap();

        let claims = verify_session_token(&token, &config).unwrap();
        assert_eq!(claims.role.as_deref(), Some("SUPER_ADMIN"));
    }
}
