use actix_web::dev::HttpServiceFactory;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{web, App};

use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};
use crate::tests::support::auth_helper::token_provider_data;
use crate::AppState;

/// Serves one handler with the same extractor configuration as the real
/// server and returns the status with the JSON body (`Null` when empty).
pub async fn send<F>(
    state: web::Data<AppState>,
    route: F,
    request: TestRequest,
) -> (StatusCode, serde_json::Value)
where
    F: HttpServiceFactory + 'static,
{
    let app = test::init_service(
        App::new()
            .app_data(state)
            .app_data(token_provider_data())
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(route),
    )
    .await;

    let resp = test::call_service(&app, request.to_request()).await;
    let status = resp.status();
    let bytes = test::read_body(resp).await;
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

const BOUNDARY: &str = "----alumni-test-boundary";

/// One-part `multipart/form-data` body. Returns the `Content-Type` header
/// value and the encoded payload.
pub fn multipart_body(
    field: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    (format!("multipart/form-data; boundary={BOUNDARY}"), body)
}
