//! Shared test fixtures

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use sqlx::{Pool, Sqlite};
use tower::ServiceExt;

use library_manager::{
    api,
    config::{AppConfig, DatabaseConfig},
    models::book::BookForm,
    repository::Repository,
    services::Services,
    views::Views,
    AppState,
};

/// Application state over a fresh in-memory database
pub async fn test_state(environment: &str) -> (AppState, Pool<Sqlite>) {
    let config = AppConfig {
        environment: environment.to_string(),
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
        },
        ..AppConfig::default()
    };

    let pool = Repository::connect(&config.database)
        .await
        .expect("Failed to open in-memory database");
    let repository = Repository::new(pool.clone());
    repository.migrate().await.expect("Failed to run migrations");

    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(Services::new(repository)),
        views: Arc::new(Views::new().expect("Failed to compile templates")),
    };
    (state, pool)
}

pub async fn test_router() -> (Router, AppState) {
    let (state, _pool) = test_state("development").await;
    (api::create_router(state.clone()), state)
}

pub fn form(title: &str, author: &str, genre: &str, year: &str) -> BookForm {
    BookForm {
        title: Some(title.to_string()),
        author: Some(author.to_string()),
        genre: Some(genre.to_string()),
        year: Some(year.to_string()),
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

/// Send one request and return the response with its body as text
pub async fn send(router: &Router, request: Request<Body>) -> (Response<Body>, String) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to send request");
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    let text = String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8");
    (Response::from_parts(parts, Body::empty()), text)
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .expect("Missing Location header")
}
