use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::fmt;

/// Unified API error type.
///
/// Produces `{"error": "<message>"}` JSON responses.
#[derive(Debug)]
pub struct ApiErr {
    status: StatusCode,
    message: String,
}

impl ApiErr {
    /// Build a closure that logs a storage error and converts it into a
    /// `500 Internal Server Error` echoing the driver message.
    ///
    /// The original backend surfaced every storage failure this way — one
    /// undifferentiated category, raw driver text in the body — and callers
    /// depend on the `error` field being present and non-empty.
    pub fn storage<E: fmt::Display>(context: &str) -> impl FnOnce(E) -> Self + '_ {
        move |e| {
            tracing::error!("{context}: {e}");
            Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            }
        }
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({"error": self.message})),
        )
            .into_response()
    }
}
