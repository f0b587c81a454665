//! Mapping of workload results onto HTTP responses.

use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response, StatusCode};

use crate::{Error, Result};

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// A successful plain-text response.
pub fn text(body: impl Into<String>) -> Response<String> {
    with_status(StatusCode::OK, body.into())
}

/// The response reported for a failed request.
pub fn error(err: &Error) -> Response<String> {
    let status = err.status_code();
    if status.is_server_error() {
        tracing::error!(error = ?err, %status, "request failed");
    } else {
        tracing::warn!(error = %err, %status, "rejected request");
    }
    with_status(status, format!("{err}\n"))
}

/// Renders a workload result, successful or not.
pub fn from_result(result: Result<String>) -> Response<String> {
    match result {
        Ok(body) => text(body),
        Err(err) => error(&err),
    }
}

fn with_status(status: StatusCode, body: String) -> Response<String> {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN));
    response
}
