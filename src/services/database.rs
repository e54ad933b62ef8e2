//! Database service for book-service.

use crate::error::AppError;
use crate::models::{Book, BookUpdate, NewBook};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Create a new database connection pool.
    #[instrument(skip(database_url), fields(service = "book-service"))]
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, AppError> {
        info!(
            max_connections = max_connections,
            min_connections = min_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .connect(database_url)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to connect: {}", e)))?;

        info!("PostgreSQL connection pool established");

        Ok(Self { pool })
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Check database health.
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Run database migrations.
    #[instrument(skip(self))]
    pub async fn run_migrations(&self) -> Result<(), AppError> {
        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Migration failed: {}", e)))?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Insert a new book row.
    #[instrument(skip(self, input), fields(isbn = %input.isbn))]
    pub async fn create_book(&self, input: &NewBook) -> Result<Book, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(&input.isbn)
        .bind(&input.amazon_url)
        .bind(&input.author)
        .bind(&input.language)
        .bind(input.pages)
        .bind(&input.publisher)
        .bind(&input.title)
        .bind(input.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                AppError::Conflict(anyhow::anyhow!(
                    "Book with isbn '{}' already exists",
                    input.isbn
                ))
            }
            _ => AppError::DatabaseError(anyhow::anyhow!("Failed to create book: {}", e)),
        })?;

        info!(isbn = %book.isbn, title = %book.title, "Book created");

        Ok(book)
    }

    /// List all books, ordered by title.
    #[instrument(skip(self))]
    pub async fn list_books(&self) -> Result<Vec<Book>, AppError> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            ORDER BY title
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to list books: {}", e)))?;

        Ok(books)
    }

    /// Get a book by isbn.
    #[instrument(skip(self))]
    pub async fn get_book(&self, isbn: &str) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT isbn, amazon_url, author, language, pages, publisher, title, year
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to get book: {}", e)))?;

        Ok(book)
    }

    /// Overwrite all mutable fields of a book. Returns `None` when no row matches.
    #[instrument(skip(self, input), fields(isbn = %isbn))]
    pub async fn update_book(
        &self,
        isbn: &str,
        input: &BookUpdate,
    ) -> Result<Option<Book>, AppError> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET amazon_url = $2,
                author = $3,
                language = $4,
                pages = $5,
                publisher = $6,
                title = $7,
                year = $8
            WHERE isbn = $1
            RETURNING isbn, amazon_url, author, language, pages, publisher, title, year
            "#,
        )
        .bind(isbn)
        .bind(&input.amazon_url)
        .bind(&input.author)
        .bind(&input.language)
        .bind(input.pages)
        .bind(&input.publisher)
        .bind(&input.title)
        .bind(input.year)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to update book: {}", e)))?;

        if let Some(ref book) = book {
            info!(isbn = %book.isbn, "Book updated");
        }

        Ok(book)
    }

    /// Delete a book by isbn. Returns `false` when no row matched.
    #[instrument(skip(self))]
    pub async fn delete_book(&self, isbn: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!("Failed to delete book: {}", e)))?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(isbn = %isbn, "Book deleted");
        }

        Ok(deleted)
    }
}
