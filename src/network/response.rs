//! HTTP responses
//!
//! Status codes and JSON bodies for replies and errors.
//!
//! Error bodies share one shape:
//! ```text
//! {"error": {"code": "NOT_FOUND", "message": "...", ...details}}
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};

use crate::error::PostboxError;
use crate::protocol::Reply;

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Posts(posts) => (StatusCode::OK, Json(posts)).into_response(),
            Reply::Created(post) => (StatusCode::CREATED, Json(post)).into_response(),
            Reply::Updated(post) => (StatusCode::OK, Json(post)).into_response(),
            Reply::Deleted(id) => (StatusCode::OK, Json(Reply::deleted_message(&id))).into_response(),
            Reply::Pong => (
                StatusCode::OK,
                Json(json!({ "status": "ok", "version": crate::VERSION })),
            )
                .into_response(),
        }
    }
}

impl IntoResponse for PostboxError {
    fn into_response(self) -> Response {
        let message = self.to_string();

        let (status, code, details) = match &self {
            PostboxError::FieldErrors(fields) => (
                StatusCode::BAD_REQUEST,
                "FIELD_ERRORS",
                Some(("fields", json!(fields))),
            ),
            PostboxError::InvalidQuery {
                accepted_fields,
                accepted_directions,
                ..
            } => (
                StatusCode::BAD_REQUEST,
                "INVALID_QUERY",
                Some((
                    "accepted",
                    json!({ "sort": accepted_fields, "direction": accepted_directions }),
                )),
            ),
            PostboxError::MissingQuery => (StatusCode::BAD_REQUEST, "MISSING_QUERY", None),
            PostboxError::InvalidSearch(_) => (StatusCode::BAD_REQUEST, "INVALID_SEARCH", None),
            PostboxError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY", None),
            PostboxError::BodyTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "BODY_TOO_LARGE", None),
            PostboxError::PostNotFound(_) | PostboxError::NoMatches => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", None)
            }
            PostboxError::Io(e) => {
                tracing::error!("IO error while handling request: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None)
            }
            PostboxError::Config(e) => {
                tracing::error!("Configuration error while handling request: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None)
            }
        };

        if status.is_client_error() {
            tracing::warn!(code, "Rejected request: {}", message);
        }

        let mut error = json!({ "code": code, "message": message });
        if let (Some((key, value)), Value::Object(map)) = (details, &mut error) {
            map.insert(key.to_string(), value);
        }

        (status, Json(json!({ "error": error }))).into_response()
    }
}
