use crate::error::{ApiError, ApiResult};
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

/// Get all hotels with their rooms
#[utoipa::path(
    get,
    path = "/api/v1/hotels",
    tag = "hotels",
    responses(
        (status = 200, description = "Hotels retrieved successfully", body = ApiResponse<Vec<HotelDto>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_hotels(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<HotelDto>>>> {
    trace!("Entering get_hotels function");
    let hotels = state.hotels.read_all().await?;
    debug!("Returning {} hotels", hotels.len());
    Ok(Json(ApiResponse::ok(hotels, "Hotels retrieved successfully")))
}

/// Get a hotel by ID
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Hotel retrieved successfully", body = ApiResponse<HotelDto>),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_hotel(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<HotelDto>>> {
    trace!("Entering get_hotel function for hotel_id: {}", hotel_id);
    match state.hotels.read(hotel_id).await? {
        Some(hotel) => Ok(Json(ApiResponse::ok(hotel, "Hotel retrieved successfully"))),
        None => {
            warn!("Hotel with ID {} not found", hotel_id);
            Err(DaoError::not_found("Hotel", hotel_id).into())
        }
    }
}

/// Get the rooms of a hotel
#[utoipa::path(
    get,
    path = "/api/v1/hotels/{hotel_id}/rooms",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 200, description = "Rooms retrieved successfully", body = ApiResponse<Vec<RoomDto>>),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_hotel_rooms(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
) -> ApiResult<Json<ApiResponse<Vec<RoomDto>>>> {
    let rooms = state.hotels.rooms_of(hotel_id).await?;
    debug!("Hotel {} has {} rooms", hotel_id, rooms.len());
    Ok(Json(ApiResponse::ok(rooms, "Rooms retrieved successfully")))
}

/// Create a new hotel, optionally with rooms
#[utoipa::path(
    post,
    path = "/api/v1/hotels",
    tag = "hotels",
    request_body = HotelDto,
    responses(
        (status = 201, description = "Hotel created successfully", body = ApiResponse<HotelDto>),
        (status = 400, description = "Invalid request"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request), fields(hotel_name = %request.hotel_name))]
pub async fn create_hotel(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<HotelDto>>,
) -> ApiResult<(StatusCode, Json<ApiResponse<HotelDto>>)> {
    trace!("Entering create_hotel function");
    let hotel = state.hotels.create(request).await?;
    info!("Hotel '{}' created with ID {}", hotel.hotel_name, hotel.id);
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(hotel, "Hotel created successfully"))))
}

/// Update an existing hotel. Rooms are managed through the room endpoints.
#[utoipa::path(
    put,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    request_body = HotelDto,
    responses(
        (status = 200, description = "Hotel updated successfully", body = ApiResponse<HotelDto>),
        (status = 400, description = "Invalid request"),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state, request))]
pub async fn update_hotel(
    Path(hotel_id): Path<i32>,
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<HotelDto>>,
) -> ApiResult<Json<ApiResponse<HotelDto>>> {
    if request.id != 0 && request.id != hotel_id {
        return Err(ApiError::Validation(format!(
            "Body ID {} does not match path ID {}",
            request.id, hotel_id
        )));
    }
    let hotel = state.hotels.update(hotel_id, request).await?;
    Ok(Json(ApiResponse::ok(hotel, "Hotel updated successfully")))
}

/// Delete a hotel together with all of its rooms
#[utoipa::path(
    delete,
    path = "/api/v1/hotels/{hotel_id}",
    tag = "hotels",
    params(
        ("hotel_id" = i32, Path, description = "Hotel ID")
    ),
    responses(
        (status = 204, description = "Hotel deleted successfully"),
        (status = 404, description = "Hotel not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_hotel(Path(hotel_id): Path<i32>, State(state): State<AppState>) -> ApiResult<StatusCode> {
    state.hotels.delete(hotel_id).await?;
    info!("Hotel with ID {} deleted", hotel_id);
    Ok(StatusCode::NO_CONTENT)
}
