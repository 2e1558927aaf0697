//! Books repository

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFields},
};

/// Columns matched by free-text search, in result order
const SEARCH_COLUMNS: [&str; 3] = ["title", "author", "genre"];

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Sqlite>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all books in insertion order
    pub async fn list_all(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Insert a new book
    pub async fn create(&self, fields: &BookFields) -> AppResult<Book> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, genre, year, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(fields.year)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Overwrite every editable field of a book
    pub async fn update(&self, id: i64, fields: &BookFields) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = ?, author = ?, genre = ?, year = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&fields.title)
        .bind(&fields.author)
        .bind(&fields.genre)
        .bind(fields.year)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Delete a book
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }

    /// Search books.
    ///
    /// Runs one substring query per text column, then an exact year query
    /// when the whole trimmed `query` is an integer, and concatenates the
    /// results. A book matching several clauses appears once per clause.
    ///
    /// Matching uses SQLite's `LIKE`, which ignores case for ASCII letters
    /// and compares every other character as typed. The year clause needs
    /// the entire query to be a number: `1954 novels` does not trigger it,
    /// while `0` does.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Book>> {
        let pattern = like_pattern(query);
        let mut books = Vec::new();

        for column in SEARCH_COLUMNS {
            let sql = format!(
                r"SELECT * FROM books WHERE {column} LIKE ? ESCAPE '\' ORDER BY id"
            );
            let mut rows = sqlx::query_as::<_, Book>(&sql)
                .bind(&pattern)
                .fetch_all(&self.pool)
                .await?;
            books.append(&mut rows);
        }

        if let Ok(year) = query.trim().parse::<i32>() {
            let mut rows =
                sqlx::query_as::<_, Book>("SELECT * FROM books WHERE year = ? ORDER BY id")
                    .bind(year)
                    .fetch_all(&self.pool)
                    .await?;
            books.append(&mut rows);
        }

        Ok(books)
    }

    /// Count stored books
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

/// Build a `LIKE` pattern matching `query` anywhere, with wildcards escaped
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
