use crate::error::ApiResult;
use crate::schemas::{AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ApiResponse, BookDto};
use model::{Dao, DaoError};
use tracing::{debug, info, instrument, warn};

/// Rejects unknown IDs with 404 before any other work is done.
async fn ensure_book_exists(state: &AppState, book_id: i32) -> ApiResult<()> {
    if state.books.validate_key(book_id).await? {
        Ok(())
    } else {
        warn!("Book with ID {} not found", book_id);
        Err(DaoError::not_found("Book", book_id).into())
    }
}

/// Get all books
#[utoipa::path(
    get,
    path = "/api/v1/books",
    tag = "books",
    responses(
        (status = 200, description = "Books retrieved successfully", body = ApiResponse<Vec<BookDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_books(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<BookDto>>>> {
    let books = state.books.read_all().await?;
    debug!("Returning {} books", books.len());
    Ok(Json(ApiResponse::ok(books, "Books retrieved successfully")))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/api/v1/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book retrieved successfully", body = ApiResponse<BookDto>),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_book(
    Path(book_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<BookDto>>> {
    ensure_book_exists(&state, book_id).await?;
    let book = state
        .books
        .read(book_id)
        .await?
        .ok_or_else(|| DaoError::not_found("Book", book_id))?;
    Ok(Json(ApiResponse::ok(book, "Book retrieved successfully")))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/api/v1/books",
    tag = "books",
    request_body = BookDto,
    responses(
        (status = 201, description = "Book created successfully", body = ApiResponse<BookDto>),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(title = %request.title))]
pub async fn create_book(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<BookDto>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<BookDto>>)> {
    let book = state.books.create(request).await?;
    info!("Book '{}' created with ID {}", book.title, book.id);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(book, "Book created successfully"))))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/api/v1/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    request_body = BookDto,
    responses(
        (status = 200, description = "Book updated successfully", body = ApiResponse<BookDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_book(
    Path(book_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<BookDto>>,
) -> ApiResult<Json<ApiResponse<BookDto>>> {
    ensure_book_exists(&state, book_id).await?;
    let book = state.books.update(book_id, request).await?;
    Ok(Json(ApiResponse::ok(book, "Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/api/v1/books/{book_id}",
    tag = "books",
    params(
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 204, description = "Book deleted successfully"),
        (status = 404, description = "Book not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_book(Path(book_id): Path<i32>, State(state): State<AppState>) -> ApiResult<StatusCode> {
    ensure_book_exists(&state, book_id).await?;
    state.books.delete(book_id).await?;
    info!("Book with ID {} deleted", book_id);
    Ok(StatusCode::NO_CONTENT)
}
