use crate::error::ApiResult;
use crate::schemas::{AppState, ErrorResponse};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use common::{ApiResponse, HotelDto, RoomDto};
use model::{Dao, DaoError};
use tracing::{debug, info, instrument, trace, warn};

/// Get all rooms of all hotels
#[utoipa::path(
    get,
    path = "/api/v1/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = ApiResponse<Vec<RoomDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_rooms(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<RoomDto>>>> {
    let rooms = state.rooms.read_all().await?;
    debug!("Returning {} rooms", rooms.len());
    Ok(Json(ApiResponse::ok(rooms, "Rooms retrieved successfully")))
}

/// Get a room by ID
#[utoipa::path(
    get,
    path = "/api/v1/rooms/{room_id}",
    tag = "rooms",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room retrieved successfully", body = ApiResponse<RoomDto>),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_room(
    Path(room_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<RoomDto>>> {
    trace!("Entering get_room function for room_id: {}", room_id);
    let Some(room) = state.rooms.read(room_id).await? else {
        warn!("Room with ID {} not found", room_id);
        return Err(DaoError::not_found("Room", room_id).into());
    };
    Ok(Json(ApiResponse::ok(room, "Room retrieved successfully")))
}

/// Add a room to an existing hotel
#[utoipa::path(
    post,
    path = "/api/v1/rooms/hotel/{hotel_id}",
    tag = "rooms",
    params(
        ("hotel_id" = i32, Path, description = "ID of the hotel receiving the room")
    ),
    request_body = RoomDto,
    responses(
        (status = 201, description = "Room added, the updated hotel is returned", body = ApiResponse<HotelDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 409, description = "Room number already taken in this hotel", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn add_room_to_hotel(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<RoomDto>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<HotelDto>>)> {
    trace!("Adding room {} to hotel {}", request.room_number, hotel_id);
    let hotel = state.rooms.add_room_to_hotel(hotel_id, request).await?;
    info!("Hotel {} now has {} rooms", hotel.id, hotel.rooms.len());
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(hotel, "Room added successfully"))))
}

/// Update a room. The owning hotel cannot be changed.
#[utoipa::path(
    put,
    path = "/api/v1/rooms/{room_id}",
    tag = "rooms",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    request_body = RoomDto,
    responses(
        (status = 200, description = "Room updated successfully", body = ApiResponse<RoomDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 409, description = "Room number already taken in this hotel", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_room(
    Path(room_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<RoomDto>>,
) -> ApiResult<Json<ApiResponse<RoomDto>>> {
    let room = state.rooms.update(room_id, request).await?;
    Ok(Json(ApiResponse::ok(room, "Room updated successfully")))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/api/v1/rooms/{room_id}",
    tag = "rooms",
    params(
        ("room_id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room deleted successfully"),
        (status = 404, description = "Room not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_room(Path(room_id): Path<i32>, State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.rooms.delete(room_id).await?;
    info!("Room with ID {} deleted", room_id);
    Ok(StatusCode::NO_CONTENT)
}
