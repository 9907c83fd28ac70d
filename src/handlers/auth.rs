use crate::error::ApiResult;
use crate::schemas::{AppState, ErrorResponse};
use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::{ApiResponse, CredentialsRequest, UserDto};
use tracing::{info, instrument, warn};

/// Register a new user with the default role
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn register(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CredentialsRequest>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<UserDto>>)> {
    let user = state.users.create_user(&request.username, &request.password).await?;
    info!("User '{}' registered", user.username);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user, "User registered successfully"))))
}

/// Verify a username and password
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = "auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Credentials accepted", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid request"),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(username = %request.username))]
pub async fn login(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CredentialsRequest>>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state
        .users
        .verify_user(&request.username, &request.password)
        .await
        .inspect_err(|_| warn!("Rejected login for '{}'", request.username))?;
    info!("User '{}' logged in", user.username);
    Ok(Json(ApiResponse::ok(user, "Login successful")))
}
