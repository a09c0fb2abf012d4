//! axum binding for the webhook core.

use crate::webhook::{
    dto::{
        AuthMethodsRequestBody, AuthMethodsResponse, PasswordVerifyRequestBody,
        PasswordVerifyResponse,
    },
    Webhook, WebhookRequest, WebhookResponse,
};
use axum::{
    body::{Body, Bytes},
    extract::Extension,
    http::{HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use std::{
    io::{self, Cursor, Read},
    sync::Arc,
};
use tracing::{error, instrument};
use utoipa::ToSchema;

/// Upper bound for a buffered request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Request body buffered by axum, or the error that stopped buffering.
///
/// Handing the failure to the core keeps the authentication and header
/// checks ahead of the body read.
enum BufferedBody {
    Ready(Cursor<Bytes>),
    Failed(Option<io::Error>),
}

impl Read for BufferedBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Ready(cursor) => cursor.read(buf),
            Self::Failed(err) => Err(err
                .take()
                .unwrap_or_else(|| io::Error::other("request body unavailable"))),
        }
    }
}

impl IntoResponse for WebhookResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

/// Request body of the webhook route, its shape selected by `X-Corbado-Action`.
#[derive(ToSchema)]
#[serde(untagged)]
pub enum WebhookRequestBody {
    AuthMethods(AuthMethodsRequestBody),
    PasswordVerify(PasswordVerifyRequestBody),
}

/// Successful response of the webhook route, matching the requested action.
#[derive(ToSchema)]
#[serde(untagged)]
pub enum WebhookResponseBody {
    AuthMethods(AuthMethodsResponse),
    PasswordVerify(PasswordVerifyResponse),
}

/// Corbado webhook endpoint.
///
/// Served at `/corbadoWebhook` unless `--path` (`CORBADO_WEBHOOK_PATH`) mounts it elsewhere.
#[utoipa::path(
    post,
    path = "/corbadoWebhook",
    params(
        ("X-Corbado-Action" = String, Header, description = "Webhook action: authMethods or passwordVerify")
    ),
    request_body(
        content = WebhookRequestBody,
        description = "authMethods or passwordVerify body, matching X-Corbado-Action",
        content_type = "application/json"
    ),
    responses (
        (status = 200, description = "Action result", body = WebhookResponseBody, content_type = "application/json"),
        (status = 400, description = "Invalid method, action or body", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid Basic-Auth credentials", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal error, details only in server logs"),
    ),
    tag = "webhook"
)]
#[instrument(skip_all)]
pub async fn webhook(
    webhook: Extension<Arc<Webhook>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Response {
    let body = match axum::body::to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => BufferedBody::Ready(Cursor::new(bytes)),
        Err(err) => BufferedBody::Failed(Some(io::Error::other(err))),
    };

    let request = WebhookRequest {
        method,
        uri,
        headers,
        body,
    };

    // Callbacks are synchronous and may block on the host's storage.
    let webhook = Arc::clone(&webhook.0);
    match tokio::task::spawn_blocking(move || webhook.handle(request)).await {
        Ok(response) => response.into_response(),
        Err(err) => {
            error!("Webhook task failed: {}", err);

            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
