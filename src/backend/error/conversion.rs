/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, funnelling every
 * service failure into a JSON error body with the mapped status code.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message"
 * }
 * ```
 *
 * Internal failures (store, hashing, token signing) are logged at error
 * level and returned as a generic 500 message.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.is_internal() {
            tracing::error!("Internal error: {:?}", self);
        } else {
            tracing::debug!("Request failed: {}", self);
        }

        let status = self.status_code();
        let body = serde_json::json!({ "error": self.message() });

        (status, Json(body)).into_response()
    }
}
