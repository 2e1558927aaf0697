//! Data models for Library Manager

pub mod book;

pub use book::{Book, BookDraft, BookFields, BookForm};
