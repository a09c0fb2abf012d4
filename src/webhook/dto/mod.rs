//! Wire types for the two webhook actions.
//!
//! Requests are decoded into a loosely typed body first so that every broken
//! rule can be reported at once, then flattened into the validated request.

pub mod auth_methods_request;
pub mod auth_methods_response;
pub mod password_verify_request;
pub mod password_verify_response;

pub use auth_methods_request::{AuthMethodsRequest, AuthMethodsRequestBody, AuthMethodsRequestData};
pub use auth_methods_response::{AuthMethodsResponse, AuthMethodsResponseData, Status};
pub use password_verify_request::{
    PasswordVerifyRequest, PasswordVerifyRequestBody, PasswordVerifyRequestData,
};
pub use password_verify_response::{PasswordVerifyResponse, PasswordVerifyResponseData};

use super::error::RequestError;

pub const ACTION_AUTH_METHODS: &str = "authMethods";
pub const ACTION_PASSWORD_VERIFY: &str = "passwordVerify";

/// Collects rule violations in the order they are checked.
#[derive(Debug, Default)]
pub(crate) struct Violations(Vec<String>);

impl Violations {
    pub(crate) fn require(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.0.push(format!("field '{field}' is empty"));
        }
    }

    pub(crate) fn require_action(&mut self, expected: &str, value: &str) {
        if value != expected {
            self.0.push(format!("field 'action' must be '{expected}'"));
        }
    }

    pub(crate) fn finish(self) -> Result<(), RequestError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(RequestError::Validation(self.0))
        }
    }
}

/// Reject empty input before handing it to the JSON parser.
pub(crate) fn parse<T>(body: &[u8]) -> Result<T, RequestError>
where
    T: serde::de::DeserializeOwned,
{
    if body.is_empty() {
        return Err(RequestError::EmptyBody);
    }

    Ok(serde_json::from_slice(body)?)
}
