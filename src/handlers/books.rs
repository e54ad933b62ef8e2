use crate::dtos::{
    BookListResponse, BookResponse, CreateBookRequest, MessageResponse, UpdateBookRequest,
};
use crate::error::AppError;
use crate::models::{BookUpdate, NewBook};
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateBookRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = NewBook::from(req);
    let book = state.db.create_book(&input).await?;

    Ok((StatusCode::CREATED, Json(BookResponse { book })))
}

pub async fn list_books(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let books = state.db.list_books().await?;

    Ok(Json(BookListResponse { books }))
}

pub async fn get_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let book = state
        .db
        .get_book(&isbn)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No book found with isbn '{}'", isbn)))?;

    Ok(Json(BookResponse { book }))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateBookRequest>,
) -> Result<impl IntoResponse, AppError> {
    let input = BookUpdate::from(req);
    let book = state
        .db
        .update_book(&isbn, &input)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("No book found with isbn '{}'", isbn)))?;

    Ok(Json(BookResponse { book }))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.db.delete_book(&isbn).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!(
            "No book found with isbn '{}'",
            isbn
        )));
    }

    Ok(Json(MessageResponse {
        message: "deleted".to_string(),
    }))
}
