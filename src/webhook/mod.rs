//! Framework-agnostic core of the Corbado webhook.
//!
//! [`Webhook`] owns the expected Basic-Auth credentials and the two host
//! callbacks. [`Webhook::handle`] runs one request through authentication,
//! action dispatch, body validation and the matching callback, and returns a
//! plain response descriptor that any HTTP framework can write out.

pub mod callback;
pub mod credentials;
mod dispatcher;
pub mod dto;
pub mod error;
pub mod logger;

pub use callback::{AuthMethods, PasswordVerify};
pub use credentials::Credentials;
pub use dispatcher::{WebhookRequest, WebhookResponse, ACTION_HEADER, WWW_AUTHENTICATE_CHALLENGE};
pub use dto::Status;
pub use error::{ConfigError, RequestError, ResponseError};
pub use logger::{Logger, NullLogger, TracingLogger};

use secrecy::{ExposeSecret, SecretString};
use std::{fmt, sync::Arc};

/// Everything a [`Webhook`] needs. Missing values are reported together by
/// [`Webhook::new`].
#[derive(Default)]
pub struct WebhookConfig {
    pub logger: Option<Arc<dyn Logger>>,
    pub username: String,
    pub password: SecretString,
    pub auth_methods: Option<Arc<dyn AuthMethods>>,
    pub password_verify: Option<Arc<dyn PasswordVerify>>,
}

impl WebhookConfig {
    /// Start a config with the Basic-Auth credentials and a [`TracingLogger`].
    #[must_use]
    pub fn new(username: String, password: SecretString) -> Self {
        Self {
            logger: Some(Arc::new(TracingLogger)),
            username,
            password,
            auth_methods: None,
            password_verify: None,
        }
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Some(Arc::new(logger));
        self
    }

    #[must_use]
    pub fn with_auth_methods(mut self, callback: impl AuthMethods + 'static) -> Self {
        self.auth_methods = Some(Arc::new(callback));
        self
    }

    #[must_use]
    pub fn with_password_verify(mut self, callback: impl PasswordVerify + 'static) -> Self {
        self.password_verify = Some(Arc::new(callback));
        self
    }
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("logger", &self.logger.is_some())
            .field("username", &self.username)
            .field("password", &self.password)
            .field("auth_methods", &self.auth_methods.is_some())
            .field("password_verify", &self.password_verify.is_some())
            .finish()
    }
}

/// Validated webhook, ready to handle requests. Cheap to share behind an `Arc`.
pub struct Webhook {
    logger: Arc<dyn Logger>,
    credentials: Credentials,
    auth_methods: Arc<dyn AuthMethods>,
    password_verify: Arc<dyn PasswordVerify>,
}

impl Webhook {
    /// # Errors
    /// Returns a single [`ConfigError`] naming every missing parameter.
    pub fn new(config: WebhookConfig) -> Result<Self, ConfigError> {
        let mut missing = Vec::new();
        if config.logger.is_none() {
            missing.push("logger");
        }

        // Credentials own the username and password checks
        let credentials =
            match Credentials::new(&config.username, config.password.expose_secret()) {
                Ok(credentials) => Some(credentials),
                Err(ConfigError::Missing(names)) => {
                    missing.extend(names);
                    None
                }
            };

        if config.auth_methods.is_none() {
            missing.push("authMethodsCallback");
        }
        if config.password_verify.is_none() {
            missing.push("passwordVerifyCallback");
        }

        match (
            config.logger,
            credentials,
            config.auth_methods,
            config.password_verify,
        ) {
            (Some(logger), Some(credentials), Some(auth_methods), Some(password_verify)) => {
                Ok(Self {
                    logger,
                    credentials,
                    auth_methods,
                    password_verify,
                })
            }
            _ => Err(ConfigError::Missing(missing)),
        }
    }
}

impl fmt::Debug for Webhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Webhook")
            .field("credentials", &self.credentials)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    fn password(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn builds_with_all_parameters() {
        let webhook = Webhook::new(
            WebhookConfig::new("webhookUsername".to_string(), password("webhookPassword"))
                .with_logger(NullLogger)
                .with_auth_methods(|_: &str| -> Result<Status> { Ok(Status::Exists) })
                .with_password_verify(|_: &str, _: &str| -> Result<bool> { Ok(true) }),
        );
        assert!(webhook.is_ok());
    }

    #[test]
    fn reports_every_missing_parameter() {
        let err = Webhook::new(WebhookConfig::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing required parameters: logger, username, password, authMethodsCallback, passwordVerifyCallback"
        );
    }

    #[test]
    fn reports_missing_callbacks_only() {
        let err = Webhook::new(WebhookConfig::new(
            "webhookUsername".to_string(),
            password("webhookPassword"),
        ))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec!["authMethodsCallback", "passwordVerifyCallback"])
        );
    }

    #[test]
    fn reports_missing_password_between_logger_and_callbacks() {
        let config = WebhookConfig {
            username: "webhookUsername".to_string(),
            ..WebhookConfig::default()
        }
        .with_auth_methods(|_: &str| -> Result<Status> { Ok(Status::NotExists) });

        let err = Webhook::new(config).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec!["logger", "password", "passwordVerifyCallback"])
        );
    }

    #[test]
    fn config_debug_hides_password() {
        let config = WebhookConfig::new("user".to_string(), password("hunter2"));
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
