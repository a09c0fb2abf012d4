use super::{parse, Violations, ACTION_AUTH_METHODS};
use crate::webhook::error::RequestError;
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of an `authMethods` request as sent on the wire.
#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct AuthMethodsRequestBody {
    #[serde(default)]
    pub id: String,
    #[serde(default, rename = "projectID")]
    pub project_id: String,
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub data: Option<AuthMethodsRequestData>,
}

#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct AuthMethodsRequestData {
    #[serde(default)]
    pub username: String,
}

/// Validated `authMethods` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthMethodsRequest {
    pub id: String,
    pub project_id: String,
    pub action: String,
    pub username: String,
}

impl AuthMethodsRequest {
    /// Decode and validate a raw request body.
    ///
    /// # Errors
    /// Returns `EmptyBody` for zero-length input, `MalformedJson` when the
    /// body is not JSON of the expected shape, and `Validation` listing every
    /// broken rule otherwise.
    pub fn decode(body: &[u8]) -> Result<Self, RequestError> {
        let body: AuthMethodsRequestBody = parse(body)?;
        let username = body.data.map(|data| data.username).unwrap_or_default();

        let mut violations = Violations::default();
        violations.require("id", &body.id);
        violations.require("projectID", &body.project_id);
        violations.require_action(ACTION_AUTH_METHODS, &body.action);
        violations.require("data.username", &username);
        violations.finish()?;

        Ok(Self {
            id: body.id,
            project_id: body.project_id,
            action: body.action,
            username,
        })
    }
}
