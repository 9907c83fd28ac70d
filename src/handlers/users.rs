use crate::error::{ApiError, ApiResult};
use crate::schemas::{AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ApiResponse, RoleRequest, UserDto};
use model::{Dao, DaoError};
use tracing::{debug, info, instrument, trace, warn};

/// Get all users with their roles
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_users(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<UserDto>>>> {
    trace!("Entering get_users function");
    let users = state.users.read_all().await?;
    debug!("Retrieved {} users from database", users.len());
    Ok(Json(ApiResponse::ok(users, "Users retrieved successfully")))
}

/// Get a user by username
#[utoipa::path(
    get,
    path = "/api/v1/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_user(
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    match state.users.read(username.clone()).await? {
        Some(user) => Ok(Json(ApiResponse::ok(user, "User retrieved successfully"))),
        None => {
            warn!("User '{}' not found", username);
            Err(DaoError::not_found("User", username).into())
        }
    }
}

/// Update a user's password and/or roles
///
/// A missing password keeps the current one; an empty role list keeps the current roles.
#[utoipa::path(
    put,
    path = "/api/v1/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    request_body = UserDto,
    responses(
        (status = 200, description = "User updated successfully", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_user(
    Path(username): Path<String>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<UserDto>>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    if !request.username.is_empty() && request.username != username {
        return Err(ApiError::Validation("Usernames cannot be changed".to_string()));
    }

    let user = state.users.update(username, request).await?;
    info!("User '{}' updated", user.username);
    Ok(Json(ApiResponse::ok(user, "User updated successfully")))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/v1/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 204, description = "User deleted successfully"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_user(Path(username): Path<String>, State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.users.delete(username).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Grant a role to a user. Granting a role the user already holds changes nothing.
#[utoipa::path(
    post,
    path = "/api/v1/users/{username}/roles",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    request_body = RoleRequest,
    responses(
        (status = 200, description = "Role granted", body = ApiResponse<UserDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn add_role(
    Path(username): Path<String>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<RoleRequest>>,
) -> ApiResult<Json<ApiResponse<UserDto>>> {
    let user = state.users.add_role(&username, &request.role_name).await?;
    info!("User '{}' now holds roles {:?}", user.username, user.roles);
    Ok(Json(ApiResponse::ok(user, "Role granted successfully")))
}
