//! Book model and form types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book fields as submitted by the create/edit forms.
///
/// Values are kept as raw strings so a rejected submission can be shown
/// back to the user exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct BookForm {
    #[validate(
        required(message = "Please provide a title"),
        length(min = 1, message = "Please provide a title")
    )]
    pub title: Option<String>,
    #[validate(
        required(message = "Please provide an author"),
        length(min = 1, message = "Please provide an author")
    )]
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<String>,
}

impl BookForm {
    /// Fill the fields missing from this submission with the stored values
    pub fn merged_onto(self, book: &Book) -> Self {
        Self {
            title: self.title.or_else(|| Some(book.title.clone())),
            author: self.author.or_else(|| Some(book.author.clone())),
            genre: self.genre.or_else(|| book.genre.clone()),
            year: self.year.or_else(|| book.year.map(|y| y.to_string())),
        }
    }
}

impl From<&Book> for BookForm {
    fn from(book: &Book) -> Self {
        Self {
            title: Some(book.title.clone()),
            author: Some(book.author.clone()),
            genre: book.genre.clone(),
            year: book.year.map(|y| y.to_string()),
        }
    }
}

/// Validated, normalized values ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFields {
    pub title: String,
    pub author: String,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

/// A book that has not been persisted: an empty "new" form or a rejected
/// submission. `id` is set when editing an existing record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookDraft {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub form: BookForm,
}

impl BookDraft {
    pub fn new(id: Option<i64>, form: BookForm) -> Self {
        Self { id, form }
    }
}

/// Search form submitted to `/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
}
