//! The signed-in user, passed explicitly to every store call.

use document_store::Credentials;

const NO_USER: &str = "no user";

/// Authentication state of the person using the storefront.
///
/// Authentication itself happens elsewhere; the storefront only carries the resulting
/// credentials down to the store and shows who is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    credentials: Credentials,
}

impl Session {
    pub fn signed_in(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::user(uid, Some(email.into())),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn is_signed_in(&self) -> bool {
        self.credentials.is_authenticated()
    }

    /// The signed-in email, or `"no user"`.
    pub fn label(&self) -> &str {
        self.credentials.email().unwrap_or(NO_USER)
    }

    pub fn sign_out(&mut self) {
        self.credentials = Credentials::anonymous();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_follows_sign_in_state() {
        let mut session = Session::signed_in("uid_1", "ana@example.com");
        assert!(session.is_signed_in());
        assert_eq!(session.label(), "ana@example.com");

        session.sign_out();
        assert!(!session.is_signed_in());
        assert_eq!(session.label(), "no user");
    }
}
