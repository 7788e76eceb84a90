use std::env;

pub const DEFAULT_SESSION_COOKIE: &str = "gatehouse.session_token";

/// Settings for verifying session tokens issued by the identity provider.
///
/// - `SESSION_SECRET`: HMAC secret shared with the identity provider
/// - `SESSION_COOKIE_NAME`: cookie carrying the token (default: `gatehouse.session_token`)
/// - `SESSION_MAX_AGE_SECS`: lifetime of tokens minted by the CLI (default: `300`)
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub secret: String,
    pub cookie_name: String,
    pub max_age_secs: i64,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            cookie_name: env::var("SESSION_COOKIE_NAME")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string()),
            max_age_secs: env::var("SESSION_MAX_AGE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(300), // 5 minutes
        }
    }
}
