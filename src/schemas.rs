use common::{
    ApiResponse, BookDto, CredentialsRequest, Genre, HotelDto, HotelType, RoleRequest, RoomDto,
    RoomType, UserDto,
};
use model::{BookDao, HotelDao, RoomDao, UserDao};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    pub hotels: HotelDao,
    pub rooms: RoomDao,
    pub books: BookDao,
    pub users: UserDao,
}

impl AppState {
    /// Builds one data-access object per entity type over the same pool.
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            hotels: HotelDao::new(db.clone()),
            rooms: RoomDao::new(db.clone()),
            books: BookDao::new(db.clone()),
            users: UserDao::new(db.clone()),
            db,
        }
    }
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::hotels::get_hotels,
        crate::handlers::hotels::get_hotel,
        crate::handlers::hotels::get_hotel_rooms,
        crate::handlers::hotels::create_hotel,
        crate::handlers::hotels::update_hotel,
        crate::handlers::hotels::delete_hotel,
        crate::handlers::rooms::get_rooms,
        crate::handlers::rooms::get_room,
        crate::handlers::rooms::add_room_to_hotel,
        crate::handlers::rooms::update_room,
        crate::handlers::rooms::delete_room,
        crate::handlers::books::get_books,
        crate::handlers::books::get_book,
        crate::handlers::books::create_book,
        crate::handlers::books::update_book,
        crate::handlers::books::delete_book,
        crate::handlers::auth::register,
        crate::handlers::auth::login,
        crate::handlers::users::get_users,
        crate::handlers::users::get_user,
        crate::handlers::users::update_user,
        crate::handlers::users::delete_user,
        crate::handlers::users::add_role,
    ),
    components(
        schemas(
            ApiResponse<HotelDto>,
            ApiResponse<Vec<HotelDto>>,
            ApiResponse<RoomDto>,
            ApiResponse<Vec<RoomDto>>,
            ApiResponse<BookDto>,
            ApiResponse<Vec<BookDto>>,
            ApiResponse<UserDto>,
            ApiResponse<Vec<UserDto>>,
            ErrorResponse,
            HealthResponse,
            HotelDto,
            HotelType,
            RoomDto,
            RoomType,
            BookDto,
            Genre,
            UserDto,
            CredentialsRequest,
            RoleRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hotels", description = "Hotel management endpoints"),
        (name = "rooms", description = "Room management endpoints"),
        (name = "books", description = "Book catalogue endpoints"),
        (name = "auth", description = "Registration and login endpoints"),
        (name = "users", description = "User and role management endpoints"),
    ),
    info(
        title = "HotelRust API",
        description = "Hotel, room and book catalogue API with user accounts and roles",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
