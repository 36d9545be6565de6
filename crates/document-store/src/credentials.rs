//! # Caller Credentials & Access Rules
//!
//! Every request carries the caller's [`Credentials`] explicitly. A collection checks them
//! against its [`AccessRule`] before touching any document.

use serde::Deserialize;

/// Identity presented with each request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    uid: Option<String>,
    email: Option<String>,
}

impl Credentials {
    /// Credentials of a caller that is not signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Credentials of a signed-in user.
    pub fn user(uid: impl Into<String>, email: Option<String>) -> Self {
        Self {
            uid: Some(uid.into()),
            email,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.uid.is_some()
    }

    pub fn uid(&self) -> Option<&str> {
        self.uid.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}

/// Who may read and write a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRule {
    /// Anyone, signed in or not.
    Public,
    /// Only callers with a uid.
    #[default]
    Authenticated,
}

impl AccessRule {
    pub fn permits(&self, caller: &Credentials) -> bool {
        match self {
            AccessRule::Public => true,
            AccessRule::Authenticated => caller.is_authenticated(),
        }
    }
}

impl std::str::FromStr for AccessRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "public" => Ok(AccessRule::Public),
            "authenticated" => Ok(AccessRule::Authenticated),
            other => Err(format!("unknown access rule '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_rule_refuses_anonymous_callers() {
        let rule = AccessRule::Authenticated;
        assert!(!rule.permits(&Credentials::anonymous()));
        assert!(rule.permits(&Credentials::user("uid_1", None)));
    }

    #[test]
    fn public_rule_admits_everyone() {
        assert!(AccessRule::Public.permits(&Credentials::anonymous()));
    }

    #[test]
    fn parses_rule_names_case_insensitively() {
        assert_eq!("Public".parse::<AccessRule>(), Ok(AccessRule::Public));
        assert_eq!(
            " authenticated ".parse::<AccessRule>(),
            Ok(AccessRule::Authenticated)
        );
        assert!("admins".parse::<AccessRule>().is_err());
    }
}
