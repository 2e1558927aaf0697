//! Book catalog pages

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use minijinja::context;

use crate::{
    error::{AppError, AppResult},
    models::book::{BookDraft, BookForm, SearchForm},
    AppState,
};

/// Home page: the catalog lives at `/books`
pub async fn home() -> Redirect {
    Redirect::to("/books")
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.catalog.list_books().await?;
    state.views.render(
        "index.html",
        context! { books => books, title => "SQL Library Manager" },
    )
}

/// Empty create form
pub async fn new_book_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.views.render(
        "new-book.html",
        context! { book => BookDraft::default(), title => "New Book" },
    )
}

/// Create a book, or show the form again with its errors
pub async fn create_book(
    State(state): State<AppState>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    match state.services.catalog.create_book(form).await {
        Ok(book) => Ok(Redirect::to(&book_path(book.id)).into_response()),
        Err(AppError::Validation { draft, errors }) => Ok(state
            .views
            .render(
                "new-book.html",
                context! { book => draft, errors => errors, title => "New Book" },
            )?
            .into_response()),
        Err(e) => Err(e),
    }
}

/// Book detail / edit form
pub async fn show_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Html<String>> {
    let id = parse_id(&id)?;
    let book = state.services.catalog.get_book(id).await?;
    let draft = BookDraft::new(Some(book.id), BookForm::from(&book));
    state.views.render(
        "update-book.html",
        context! { book => draft, title => book.title },
    )
}

/// Update a book, or show the edit form again with its errors
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookForm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    match state.services.catalog.update_book(id, form).await {
        Ok(book) => Ok(Redirect::to(&book_path(book.id)).into_response()),
        Err(AppError::Validation { draft, errors }) => Ok(state
            .views
            .render(
                "update-book.html",
                context! { book => draft, errors => errors, title => "Edit Book" },
            )?
            .into_response()),
        Err(e) => Err(e),
    }
}

/// Delete a book. This cannot be undone.
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Redirect> {
    let id = parse_id(&id)?;
    state.services.catalog.delete_book(id).await?;
    Ok(Redirect::to("/books"))
}

/// Search the catalog
pub async fn search_books(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let books = state.services.catalog.search_books(&form.search).await?;
    if books.is_empty() {
        return state
            .views
            .render("search-fail.html", context! { title => "No Results" });
    }
    state.views.render(
        "search-results.html",
        context! { books => books, title => "Search Results" },
    )
}

fn book_path(id: i64) -> String {
    format!("/books/{}", id)
}

/// A path segment that is not a number names no book
fn parse_id(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Book {} not found", raw)))
}
