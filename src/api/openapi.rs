use super::handlers::{health, webhook};
use crate::webhook::dto::{
    AuthMethodsRequestBody, AuthMethodsRequestData, AuthMethodsResponse, AuthMethodsResponseData,
    PasswordVerifyRequestBody, PasswordVerifyRequestData, PasswordVerifyResponse,
    PasswordVerifyResponseData, Status,
};
use utoipa::{
    openapi::{InfoBuilder, License},
    OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(webhook::webhook, health::health),
    components(schemas(
        AuthMethodsRequestBody,
        AuthMethodsRequestData,
        AuthMethodsResponse,
        AuthMethodsResponseData,
        PasswordVerifyRequestBody,
        PasswordVerifyRequestData,
        PasswordVerifyResponse,
        PasswordVerifyResponseData,
        Status,
        webhook::WebhookRequestBody,
        webhook::WebhookResponseBody,
        health::Health,
    )),
    tags(
        (name = "webhook", description = "Corbado webhook actions (authMethods, passwordVerify)"),
        (name = "health", description = "Liveness")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();

    // Use Cargo.toml metadata for the document info.
    let mut info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some(env!("CARGO_PKG_DESCRIPTION")))
        .build();
    info.license = Some(License::new(env!("CARGO_PKG_LICENSE")));
    doc.info = info;

    doc
}
