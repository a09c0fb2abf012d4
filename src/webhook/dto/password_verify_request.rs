use super::{parse, Violations, ACTION_PASSWORD_VERIFY};
use crate::webhook::error::RequestError;
use serde::Deserialize;
use std::fmt;
use utoipa::ToSchema;

/// Body of a `passwordVerify` request as sent on the wire.
#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct PasswordVerifyRequestBody {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "projectID")]
    pub project_id: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub data: Option<PasswordVerifyRequestData>,
}

#[derive(ToSchema, Deserialize, Default)]
pub struct PasswordVerifyRequestData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for PasswordVerifyRequestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordVerifyRequestData")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Validated `passwordVerify` request.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordVerifyRequest {
    pub id: String,
    pub project_id: String,
    pub action: String,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for PasswordVerifyRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordVerifyRequest")
            .field("id", &self.id)
            .field("project_id", &self.project_id)
            .field("action", &self.action)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl PasswordVerifyRequest {
    /// Decode and validate a raw request body.
    ///
    /// # Errors
    /// Same policy as `AuthMethodsRequest::decode`, with the password checked last.
    pub fn decode(body: &[u8]) -> Result<Self, RequestError> {
        let body: PasswordVerifyRequestBody = parse(body)?;
        let data = body.data.unwrap_or_default();

        let mut violations = Violations::default();
        violations.require("id", &body.id);
        violations.require("projectID", &body.project_id);
        violations.require_action(ACTION_PASSWORD_VERIFY, &body.action);
        violations.require("data.username", &data.username);
        violations.require("data.password", &data.password);
        violations.finish()?;

        Ok(Self {
            id: body.id,
            project_id: body.project_id,
            action: body.action,
            username: data.username,
            password: data.password,
        })
    }
}
