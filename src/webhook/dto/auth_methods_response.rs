use crate::webhook::error::ResponseError;
use serde::Serialize;
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Whether a user with the given username exists in the host application.
#[derive(ToSchema, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Exists,
    NotExists,
}

impl Status {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exists => "exists",
            Self::NotExists => "not_exists",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ResponseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exists" => Ok(Self::Exists),
            "not_exists" => Ok(Self::NotExists),
            _ => Err(ResponseError::InvalidStatus {
                exists: Self::Exists.as_str(),
                not_exists: Self::NotExists.as_str(),
            }),
        }
    }
}

#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthMethodsResponseData {
    pub status: Status,
}

/// Response for the `authMethods` action.
///
/// The response id is free text used for correlation; it shows up in the
/// webhook log of the developer panel.
#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthMethodsResponse {
    #[serde(rename = "responseID")]
    pub response_id: String,
    pub data: AuthMethodsResponseData,
}

impl AuthMethodsResponse {
    #[must_use]
    pub fn new(response_id: impl Into<String>, status: Status) -> Self {
        Self {
            response_id: response_id.into(),
            data: AuthMethodsResponseData { status },
        }
    }

    /// Build a response from an untyped status value.
    ///
    /// # Errors
    /// Returns an error unless `status` is `exists` or `not_exists`.
    pub fn try_new(response_id: impl Into<String>, status: &str) -> Result<Self, ResponseError> {
        Ok(Self::new(response_id, status.parse()?))
    }

    /// # Errors
    /// Returns an error if serialization fails.
    pub fn encode(&self) -> Result<Vec<u8>, ResponseError> {
        Ok(serde_json::to_vec(self)?)
    }
}
