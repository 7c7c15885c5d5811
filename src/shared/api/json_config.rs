use actix_web::web::JsonConfig;

use crate::shared::api::ApiResponse;

/// Malformed or oversized JSON bodies come back in the same envelope as
/// every other validation failure instead of actix's plain-text 400.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_BODY", &detail),
        )
        .into()
    })
}
