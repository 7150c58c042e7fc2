/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers. The error is converted to an appropriate
 * HTTP status code and a small HTML body.
 *
 * # Response Format
 *
 * ```html
 * <h1>404 Not Found</h1>
 * <p>Article not found</p>
 * ```
 *
 * Error pages are built here instead of going through the template renderer,
 * so a missing template can still be reported.
 */

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use minijinja::HtmlEscape;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (status, Html(error_page(status, &self.message()))).into_response()
    }
}

/// Render the fallback HTML body for an error status
pub(crate) fn error_page(status: StatusCode, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html><head><title>{status}</title></head>\
         <body><h1>{status}</h1><p>{message}</p><p><a href=\"/\">Home</a></p></body></html>",
        status = status,
        message = HtmlEscape(message),
    )
}
