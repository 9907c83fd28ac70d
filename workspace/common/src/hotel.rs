use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::non_blank;

/// Category of a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HotelType {
    Luxury,
    Standard,
    Budget,
}

/// Category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Single,
    Double,
    Suite,
}

/// Hotel transfer object. Embeds the full room list of the hotel.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Validate)]
pub struct HotelDto {
    /// Generated id; zero when the hotel has not been persisted yet
    #[serde(default)]
    pub id: i32,
    #[validate(custom(function = "non_blank", message = "Hotel name must be set"))]
    pub hotel_name: String,
    #[validate(custom(function = "non_blank", message = "Hotel address must be set"))]
    pub hotel_address: String,
    pub hotel_type: HotelType,
    /// Rooms owned by the hotel, ordered by room id
    #[serde(default)]
    #[validate(custom(function = "validate_rooms"))]
    pub rooms: Vec<RoomDto>,
}

impl HotelDto {
    /// Creates a not-yet-persisted hotel without rooms.
    pub fn new(hotel_name: impl Into<String>, hotel_address: impl Into<String>, hotel_type: HotelType) -> Self {
        Self {
            id: 0,
            hotel_name: hotel_name.into(),
            hotel_address: hotel_address.into(),
            hotel_type,
            rooms: Vec::new(),
        }
    }

    pub fn with_rooms(mut self, rooms: Vec<RoomDto>) -> Self {
        self.rooms = rooms;
        self
    }
}

/// Room transfer object. Refers to its hotel by id only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Validate)]
pub struct RoomDto {
    /// Generated id; zero when the room has not been persisted yet
    #[serde(default)]
    pub id: i32,
    /// Owning hotel, absent for rooms embedded in a hotel request
    #[serde(default)]
    pub hotel_id: Option<i32>,
    #[validate(range(min = 1, message = "Room number must be positive"))]
    pub room_number: i32,
    /// Price per night in currency units
    #[validate(custom(function = "validate_price"))]
    pub room_price: Decimal,
    pub room_type: RoomType,
}

impl RoomDto {
    /// Creates a not-yet-persisted room.
    pub fn new(room_number: i32, room_price: Decimal, room_type: RoomType) -> Self {
        Self {
            id: 0,
            hotel_id: None,
            room_number,
            room_price,
            room_type,
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() {
        let mut error = ValidationError::new("negative_price");
        error.message = Some("Room price must not be negative".into());
        return Err(error);
    }
    Ok(())
}

fn validate_rooms(rooms: &[RoomDto]) -> Result<(), ValidationError> {
    for room in rooms {
        if room.validate().is_err() {
            let mut error = ValidationError::new("invalid_room");
            error.message = Some(format!("Room {} is invalid", room.room_number).into());
            return Err(error);
        }
    }
    Ok(())
}
