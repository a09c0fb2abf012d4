use super::error::ConfigError;
use sha2::{Digest, Sha256};
use std::fmt;
use subtle::ConstantTimeEq;

/// SHA-256 digests of the Basic-Auth username and password the webhook accepts.
///
/// Plaintext is hashed on construction and dropped; candidates are hashed the
/// same way and compared without short-circuiting.
#[derive(Clone)]
pub struct Credentials {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl Credentials {
    /// # Errors
    /// Returns an error naming every empty parameter.
    pub fn new(username: &str, password: &str) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        if username.is_empty() {
            missing.push("username");
        }
        if password.is_empty() {
            missing.push("password");
        }
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        Ok(Self {
            username_digest: digest(username),
            password_digest: digest(password),
        })
    }

    /// Both components must match; both comparisons always run.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        let username_digest = digest(username);
        let password_digest = digest(password);

        let username_match = self.username_digest[..].ct_eq(&username_digest[..]);
        let password_match = self.password_digest[..].ct_eq(&password_digest[..]);

        bool::from(username_match & password_match)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username_digest", &"[REDACTED]")
            .field("password_digest", &"[REDACTED]")
            .finish()
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}
