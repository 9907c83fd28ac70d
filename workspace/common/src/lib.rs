//! Common transport-layer types shared by the data-access layer and the HTTP handlers.
//! These structs are the flat, serializable projections of the persisted entities;
//! they carry no persistence identity semantics of their own.

mod book;
mod hotel;
mod user;

pub use book::{BookDto, Genre};
pub use hotel::{HotelDto, HotelType, RoomDto, RoomType};
pub use user::{CredentialsRequest, RoleRequest, UserDto};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::ValidationError;

/// Rejects strings that are empty or whitespace only.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

impl<T> ApiResponse<T> {
    /// Wraps `data` in a successful envelope.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
            success: true,
        }
    }
}
