//! Session token claims.

use serde::{Deserialize, Serialize};

/// Claims carried by a session token issued by the identity provider.
///
/// `role` stays a raw string on the wire; it is parsed into
/// [`Role`](crate::Role) by the session resolver, never here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (subject claim)
    pub sub: String,
    /// Session ID
    pub sid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let claims: SessionClaims = serde_json::from_str(
            r#"{"sub":"user-1","sid":"session-1","exp":9999999999,"iat":1234567890}"#,
        )
        .unwrap();

        assert_eq!(claims.sub, "user-1");
        assert!(claims.role.is_none());
        assert!(claims.email.is_none());
    }

    #[test]
    fn test_absent_role_is_not_serialized() {
        let claims = SessionClaims {
            sub: "user-1".into(),
            sid: "session-1".into(),
            email: None,
            name: None,
            role: None,
            exp: 9999999999,
            iat: 1234567890,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(!serialized.contains("role"));
    }
}
