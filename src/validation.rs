//! Write-time validation of book submissions

use serde::Serialize;
use validator::Validate;

use crate::models::book::{BookFields, BookForm};

/// A validation message scoped to one form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a submitted book.
///
/// All violations are collected, in form order. Surrounding whitespace is
/// trimmed before checking, so a whitespace-only title or author counts as
/// missing. Blank `genre` and `year` are treated as absent.
pub fn validate_book(form: &BookForm) -> Result<BookFields, Vec<FieldError>> {
    let mut errors = Vec::new();
    let trimmed = BookForm {
        title: trim(form.title.as_deref()),
        author: trim(form.author.as_deref()),
        genre: trim(form.genre.as_deref()),
        year: trim(form.year.as_deref()),
    };

    if let Err(failures) = trimmed.validate() {
        let by_field = failures.field_errors();
        for field in ["title", "author"] {
            if let Some(list) = by_field.get(field) {
                // `required` and `length` share a message; report it once
                if let Some(first) = list.first() {
                    let message = first
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", field));
                    errors.push(FieldError::new(field, message));
                }
            }
        }
    }

    let year = match non_blank(trimmed.year.as_deref()) {
        None => None,
        Some(raw) => match raw.parse::<i32>() {
            Ok(year) => Some(year),
            Err(_) => {
                errors.push(FieldError::new("year", "Year must be a whole number"));
                None
            }
        },
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(BookFields {
        title: trimmed.title.unwrap_or_default(),
        author: trimmed.author.unwrap_or_default(),
        genre: non_blank(trimmed.genre.as_deref()).map(str::to_string),
        year,
    })
}

fn trim(value: Option<&str>) -> Option<String> {
    value.map(|v| v.trim().to_string())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
