use crate::webhook::error::ResponseError;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordVerifyResponseData {
    pub success: bool,
}

/// Response for the `passwordVerify` action.
#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordVerifyResponse {
    #[serde(rename = "responseID")]
    pub response_id: String,
    pub data: PasswordVerifyResponseData,
}

impl PasswordVerifyResponse {
    #[must_use]
    pub fn new(response_id: impl Into<String>, success: bool) -> Self {
        Self {
            response_id: response_id.into(),
            data: PasswordVerifyResponseData { success },
        }
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, ResponseError> {
        Ok(serde_json::to_vec(self)?)
    }
}
