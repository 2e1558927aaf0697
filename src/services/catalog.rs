//! Book catalog service

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookDraft, BookForm},
    repository::Repository,
    validation::validate_book,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list_all().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book.
    ///
    /// A rejected form yields [`AppError::Validation`] holding the submitted
    /// values; nothing is written in that case.
    pub async fn create_book(&self, form: BookForm) -> AppResult<Book> {
        let fields = match validate_book(&form) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "Rejected new book");
                return Err(AppError::Validation {
                    draft: Box::new(BookDraft::new(None, form)),
                    errors,
                });
            }
        };

        let book = self.repository.books.create(&fields).await?;
        tracing::info!(id = book.id, title = %book.title, "Created book");
        Ok(book)
    }

    /// Update a book.
    ///
    /// Fields missing from `form` keep their stored values. On rejection the
    /// draft carries the merged values and the path id.
    pub async fn update_book(&self, id: i64, form: BookForm) -> AppResult<Book> {
        let existing = self.repository.books.get_by_id(id).await?;
        let form = form.merged_onto(&existing);

        let fields = match validate_book(&form) {
            Ok(fields) => fields,
            Err(errors) => {
                tracing::debug!(id, errors = errors.len(), "Rejected book update");
                return Err(AppError::Validation {
                    draft: Box::new(BookDraft::new(Some(id), form)),
                    errors,
                });
            }
        };

        let book = self.repository.books.update(id, &fields).await?;
        tracing::info!(id = book.id, "Updated book");
        Ok(book)
    }

    /// Delete a book permanently
    pub async fn delete_book(&self, id: i64) -> AppResult<()> {
        self.repository.books.get_by_id(id).await?;
        self.repository.books.delete(id).await?;
        tracing::info!(id, "Deleted book");
        Ok(())
    }

    /// Search title, author and genre, plus year for numeric queries
    pub async fn search_books(&self, query: &str) -> AppResult<Vec<Book>> {
        self.repository.books.search(query).await
    }

    /// Number of stored books
    pub async fn count_books(&self) -> AppResult<i64> {
        self.repository.books.count().await
    }
}
