//! Role hierarchy.
//!
//! Roles form a total order: `USER < ADMIN < SUPER_ADMIN`. Anything else the
//! identity provider hands us (absent, empty, misspelled) becomes
//! [`Role::Unknown`], which ranks below every defined role and never
//! satisfies a requirement.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
    SuperAdmin,
    #[serde(other)]
    Unknown,
}

/// Returned by the strict [`FromStr`] parse used for configuration input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}' (expected USER, ADMIN or SUPER_ADMIN)")]
pub struct UnknownRole(pub String);

impl Role {
    /// The defined roles in ascending order of privilege.
    pub const ALL: [Role; 3] = [Role::User, Role::Admin, Role::SuperAdmin];

    pub const fn rank(self) -> i8 {
        match self {
            Role::User => 0,
            Role::Admin => 1,
            Role::SuperAdmin => 2,
            Role::Unknown => -1,
        }
    }

    /// Lossy parse for identity data. Total over every input.
    pub fn parse(raw: &str) -> Self {
        raw.parse().unwrap_or(Role::Unknown)
    }

    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map(Role::parse).unwrap_or(Role::Unknown)
    }

    /// `true` when `self` is a defined role ranked at or above `required`.
    pub fn satisfies(self, required: Role) -> bool {
        self != Role::Unknown && self.rank() >= required.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
            Role::SuperAdmin => "SUPER_ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            "SUPER_ADMIN" => Ok(Role::SuperAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a raw role string against a required role.
///
/// Absent or unrecognized roles fail closed.
pub fn has_role(actual: Option<&str>, required: Role) -> bool {
    Role::from_optional(actual).satisfies(required)
}

pub fn is_admin(actual: Option<&str>) -> bool {
    has_role(actual, Role::Admin)
}

pub fn is_super_admin(actual: Option<&str>) -> bool {
    has_role(actual, Role::SuperAdmin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_order() {
        assert_eq!(Role::User.rank(), 0);
        assert_eq!(Role::Admin.rank(), 1);
        assert_eq!(Role::SuperAdmin.rank(), 2);
        assert_eq!(Role::Unknown.rank(), -1);
    }

    #[test]
    fn test_has_role_matches_rank_comparison() {
        for actual in Role::ALL {
            for required in Role::ALL {
                assert_eq!(
                    has_role(Some(actual.as_str()), required),
                    actual.rank() >= required.rank(),
                    "{actual} vs {required}"
                );
            }
        }
    }

    #[test]
    fn test_missing_role_never_satisfies() {
        for required in Role::ALL {
            assert!(!has_role(None, required));
            assert!(!has_role(Some(""), required));
        }
    }

    #[test]
    fn test_garbage_role_never_satisfies() {
        assert!(!has_role(Some("bogus"), Role::User));
        assert!(!has_role(Some("admin"), Role::User));
        assert!(!has_role(Some("ADMIN "), Role::User));
        assert!(!has_role(Some("\u{0}SUPER_ADMIN"), Role::User));
    }

    #[test]
    fn test_unknown_never_satisfies_itself() {
        assert!(!Role::Unknown.satisfies(Role::Unknown));
    }

    #[test]
    fn test_strict_parse_rejects_lowercase() {
        assert_eq!("SUPER_ADMIN".parse::<Role>(), Ok(Role::SuperAdmin));
        assert_eq!(
            "super_admin".parse::<Role>(),
            Err(UnknownRole("super_admin".into()))
        );
    }

    #[test]
    fn test_admin_helpers() {
        assert!(is_admin(Some("ADMIN")));
        assert!(is_admin(Some("SUPER_ADMIN")));
        assert!(!is_admin(Some("USER")));
        assert!(is_super_admin(Some("SUPER_ADMIN")));
        assert!(!is_super_admin(Some("ADMIN")));
    }

    #[test]
    fn test_serde_wire_form() {
        assert_eq!(
            serde_json::to_string(&Role::SuperAdmin).unwrap(),
            r#""SUPER_ADMIN""#
        );
        let parsed: Role = serde_json::from_str(r#""MODERATOR""#).unwrap();
        assert_eq!(parsed, Role::Unknown);
    }
}
