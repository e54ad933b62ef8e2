//! Book model for the catalog.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row of the books relation, keyed by ISBN.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

/// Input for inserting a new book.
#[derive(Debug, Clone)]
pub struct NewBook {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

/// Full replacement for an existing book. The key itself is immutable.
#[derive(Debug, Clone)]
pub struct BookUpdate {
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}
