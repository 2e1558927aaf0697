//! Request failure capture and the centralized error responder.
//!
//! Handlers return [`AppResult`](crate::error::AppResult); the error half
//! becomes an empty response tagged with a [`Failure`]. Panics and unmatched
//! routes are tagged the same way. [`respond`] runs outermost and turns every
//! tagged response into the matching page, so each request gets exactly one
//! rendered response. Error statuses that arrive untagged, like extractor
//! rejections and method mismatches, are rendered from their status alone.

use std::any::Any;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::Uri,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{
    error::{AppError, Failure},
    AppState,
};

/// Largest rejection body kept as failure detail
const MAX_DETAIL_BYTES: usize = 16 * 1024;

/// Render the page for any failed response
pub async fn respond(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let mut response = next.run(request).await;
    let marker = response.extensions_mut().remove::<Failure>();
    let failure = match marker {
        Some(failure) => failure,
        None if is_failure_status(&response) => {
            let status = response.status();
            Failure::from_status(status, body_text(response.into_body()).await)
        }
        None => return response,
    };

    tracing::debug!(%method, %uri, status = ?failure.status, "{}", failure.detail);
    state
        .views
        .render_failure(&failure, state.config.expose_error_details())
}

fn is_failure_status(response: &Response) -> bool {
    let status = response.status();
    status.is_client_error() || status.is_server_error()
}

async fn body_text(body: Body) -> String {
    match to_bytes(body, MAX_DETAIL_BYTES).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(_) => String::new(),
    }
}

/// Fallback for paths that match no route
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Convert a handler panic into a failure response
pub fn capture_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Internal(format!("handler panicked: {}", detail)).into_response()
}
