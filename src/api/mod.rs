//! HTTP handlers and routing for Library Manager

pub mod books;
pub mod failure;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::AppState;

/// Create the application router with all routes.
///
/// Layer order matters: panics are caught first, then every failure is
/// rendered by the centralized responder, then the request is traced.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(books::home))
        .route("/books", get(books::list_books))
        .route("/books/new", get(books::new_book_form).post(books::create_book))
        .route("/books/:id", get(books::show_book).post(books::update_book))
        .route("/books/:id/delete", post(books::delete_book))
        .route("/search", post(books::search_books))
        .fallback(failure::not_found)
        .layer(CatchPanicLayer::custom(failure::capture_panic))
        .layer(middleware::from_fn_with_state(state.clone(), failure::respond))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
