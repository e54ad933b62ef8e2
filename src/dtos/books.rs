use crate::models::{Book, BookUpdate, NewBook};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for `POST /books`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "isbn must not be empty"))]
    pub isbn: String,
    #[validate(url(message = "amazon_url must be a valid URL"))]
    pub amazon_url: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
    #[validate(range(min = 1, message = "pages must be positive"))]
    pub pages: i32,
    #[validate(length(min = 1, message = "publisher must not be empty"))]
    pub publisher: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0, max = 9999, message = "year must be a four-digit year"))]
    pub year: i32,
}

/// Payload for `PUT /books/:isbn`. Carries every field except the key;
/// unknown keys (including `isbn`) are rejected at deserialization.
#[derive(Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct UpdateBookRequest {
    #[validate(url(message = "amazon_url must be a valid URL"))]
    pub amazon_url: String,
    #[validate(length(min = 1, message = "author must not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "language must not be empty"))]
    pub language: String,
    #[validate(range(min = 1, message = "pages must be positive"))]
    pub pages: i32,
    #[validate(length(min = 1, message = "publisher must not be empty"))]
    pub publisher: String,
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 0, max = 9999, message = "year must be a four-digit year"))]
    pub year: i32,
}

impl From<CreateBookRequest> for NewBook {
    fn from(req: CreateBookRequest) -> Self {
        NewBook {
            isbn: req.isbn,
            amazon_url: req.amazon_url,
            author: req.author,
            language: req.language,
            pages: req.pages,
            publisher: req.publisher,
            title: req.title,
            year: req.year,
        }
    }
}

impl From<UpdateBookRequest> for BookUpdate {
    fn from(req: UpdateBookRequest) -> Self {
        BookUpdate {
            amazon_url: req.amazon_url,
            author: req.author,
            language: req.language,
            pages: req.pages,
            publisher: req.publisher,
            title: req.title,
            year: req.year,
        }
    }
}

/// Single-book envelope returned by create, get and update.
#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub book: Book,
}

/// Envelope for `GET /books`.
#[derive(Debug, Serialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
}

/// Confirmation envelope for delete.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
