use super::{
    dto::{
        AuthMethodsRequest, AuthMethodsResponse, PasswordVerifyRequest, PasswordVerifyResponse,
        ACTION_AUTH_METHODS, ACTION_PASSWORD_VERIFY,
    },
    Webhook,
};
use anyhow::Context;
use axum::http::{
    header::{AUTHORIZATION, CONTENT_TYPE, WWW_AUTHENTICATE},
    HeaderMap, HeaderValue, Method, StatusCode, Uri,
};
use base64ct::{Base64, Encoding};
use std::{borrow::Cow, io::Read};

/// Header carrying the action selector.
pub const ACTION_HEADER: &str = "X-Corbado-Action";

pub const WWW_AUTHENTICATE_CHALLENGE: &str = r#"Basic realm="restricted", charset="UTF-8""#;

const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
const CONTENT_TYPE_TEXT: &str = "text/plain; charset=utf-8";

/// What the dispatcher needs from an inbound HTTP request.
#[derive(Debug)]
pub struct WebhookRequest<R> {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: R,
}

/// What the HTTP layer has to write back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl WebhookResponse {
    fn new(status: StatusCode, content_type: Option<&'static str>, body: Vec<u8>) -> Self {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        }

        Self {
            status,
            headers,
            body,
        }
    }

    fn json(body: Vec<u8>) -> Self {
        Self::new(StatusCode::OK, Some(CONTENT_TYPE_JSON), body)
    }

    fn unauthorized() -> Self {
        let mut response = Self::new(
            StatusCode::UNAUTHORIZED,
            Some(CONTENT_TYPE_TEXT),
            b"Unauthorized".to_vec(),
        );
        response.headers.insert(
            WWW_AUTHENTICATE,
            HeaderValue::from_static(WWW_AUTHENTICATE_CHALLENGE),
        );
        response
    }

    fn bad_request(message: String) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            Some(CONTENT_TYPE_TEXT),
            message.into_bytes(),
        )
    }

    fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, None, Vec::new())
    }
}

/// Terminal outcome of a request that did not succeed.
#[derive(Debug)]
enum Failure {
    /// Missing, malformed or wrong credentials; indistinguishable to the caller.
    Unauthenticated,
    BadRequest(String),
    /// Logged server side, never shown to the caller.
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for Failure {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl Webhook {
    /// Run one request through authentication and action dispatch.
    ///
    /// Always produces exactly one response; nothing is retried.
    pub fn handle<R: Read>(&self, request: WebhookRequest<R>) -> WebhookResponse {
        self.logger.debug(&format!("{} {}", request.method, request.uri));

        match self.dispatch(request) {
            Ok(response) => response,
            Err(Failure::Unauthenticated) => WebhookResponse::unauthorized(),
            Err(Failure::BadRequest(message)) => WebhookResponse::bad_request(message),
            Err(Failure::Internal(err)) => {
                self.logger.error(&err);
                WebhookResponse::internal_server_error()
            }
        }
    }

    fn dispatch<R: Read>(&self, mut request: WebhookRequest<R>) -> Result<WebhookResponse, Failure> {
        self.authenticate(&request.headers)?;

        if request.method != Method::POST {
            return Err(Failure::BadRequest(format!(
                "Invalid method '{}', only POST is allowed",
                request.method
            )));
        }

        let action = action(&request.headers);
        if action.is_empty() {
            return Err(Failure::BadRequest(format!(
                "{ACTION_HEADER} header missing or empty"
            )));
        }

        let mut body = Vec::new();
        request
            .body
            .read_to_end(&mut body)
            .context("reading request body failed")?;

        if body.is_empty() {
            return Err(Failure::BadRequest(
                "Empty body, provide JSON request".to_string(),
            ));
        }

        match &*action {
            ACTION_AUTH_METHODS => self.handle_auth_methods(&body),
            ACTION_PASSWORD_VERIFY => self.handle_password_verify(&body),
            other => Err(Failure::BadRequest(format!(
                "Invalid action given in {ACTION_HEADER} header ('{other}')"
            ))),
        }
    }

    fn authenticate(&self, headers: &HeaderMap) -> Result<(), Failure> {
        match basic_auth(headers) {
            Some((username, password)) if self.credentials.matches(&username, &password) => Ok(()),
            _ => Err(Failure::Unauthenticated),
        }
    }

    fn handle_auth_methods(&self, body: &[u8]) -> Result<WebhookResponse, Failure> {
        let request =
            AuthMethodsRequest::decode(body).context("decoding authMethods request failed")?;

        if request.username.is_empty() {
            return Err(Failure::BadRequest(
                "username must not be empty".to_string(),
            ));
        }

        let status = self
            .auth_methods
            .auth_methods(&request.username)
            .context("authMethods callback failed")?;

        let body = AuthMethodsResponse::new("", status)
            .encode()
            .context("encoding authMethods response failed")?;

        Ok(WebhookResponse::json(body))
    }

    fn handle_password_verify(&self, body: &[u8]) -> Result<WebhookResponse, Failure> {
        let request = PasswordVerifyRequest::decode(body)
            .context("decoding passwordVerify request failed")?;

        if request.username.is_empty() {
            return Err(Failure::BadRequest(
                "username must not be empty".to_string(),
            ));
        }

        if request.password.is_empty() {
            return Err(Failure::BadRequest(
                "password must not be empty".to_string(),
            ));
        }

        let success = self
            .password_verify
            .password_verify(&request.username, &request.password)
            .context("passwordVerify callback failed")?;

        let body = PasswordVerifyResponse::new("", success)
            .encode()
            .context("encoding passwordVerify response failed")?;

        Ok(WebhookResponse::json(body))
    }
}

fn action(headers: &HeaderMap) -> Cow<'_, str> {
    headers
        .get(ACTION_HEADER)
        .map_or(Cow::Borrowed(""), |value| {
            String::from_utf8_lossy(value.as_bytes())
        })
}

/// Parse `Authorization: Basic <base64(username:password)>`.
fn basic_auth(headers: &HeaderMap) -> Option<(String, String)> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = Base64::decode_vec(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some((username.to_string(), password.to_string()))
}
