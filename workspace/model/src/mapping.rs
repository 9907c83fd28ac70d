//! Conversions between entity models and their transfer objects.
//!
//! `to_transfer` direction is a plain `From<Model>`. The `from_transfer` direction
//! produces an `ActiveModel`; an id of zero means "not yet persisted" and leaves
//! the key `NotSet` so the store assigns it.

use common::{BookDto, HotelDto, RoomDto, UserDto};
use sea_orm::{ActiveValue, ActiveValue::NotSet, Set};

use crate::entities::{book, hotel, room, user};

impl From<room::Model> for RoomDto {
    fn from(model: room::Model) -> Self {
        Self {
            id: model.id,
            hotel_id: Some(model.hotel_id),
            room_number: model.room_number,
            room_price: model.room_price,
            room_type: model.room_type.into(),
        }
    }
}

impl From<book::Model> for BookDto {
    fn from(model: book::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            author: model.author,
            publisher: model.publisher,
            year_published: model.year_published,
            genre: model.genre.into(),
        }
    }
}

/// Builds a hotel transfer object with its full room list, ordered by room id.
pub fn hotel_to_dto(model: hotel::Model, mut rooms: Vec<room::Model>) -> HotelDto {
    rooms.sort_by_key(|room| room.id);
    HotelDto {
        id: model.id,
        hotel_name: model.hotel_name,
        hotel_address: model.hotel_address,
        hotel_type: model.hotel_type.into(),
        rooms: rooms.into_iter().map(RoomDto::from).collect(),
    }
}

/// Builds a user transfer object. The password hash is dropped; role names are sorted.
pub fn user_to_dto(model: user::Model, mut roles: Vec<String>) -> UserDto {
    roles.sort();
    roles.dedup();
    UserDto {
        username: model.username,
        password: None,
        roles,
    }
}

fn surrogate_key(id: i32) -> ActiveValue<i32> {
    if id == 0 { NotSet } else { Set(id) }
}

impl From<&HotelDto> for hotel::ActiveModel {
    fn from(dto: &HotelDto) -> Self {
        Self {
            id: surrogate_key(dto.id),
            hotel_name: Set(dto.hotel_name.clone()),
            hotel_address: Set(dto.hotel_address.clone()),
            hotel_type: Set(dto.hotel_type.into()),
        }
    }
}

impl From<&RoomDto> for room::ActiveModel {
    fn from(dto: &RoomDto) -> Self {
        Self {
            id: surrogate_key(dto.id),
            room_number: Set(dto.room_number),
            room_price: Set(dto.room_price),
            room_type: Set(dto.room_type.into()),
            hotel_id: match dto.hotel_id {
                Some(hotel_id) => Set(hotel_id),
                None => NotSet,
            },
        }
    }
}

impl From<&BookDto> for book::ActiveModel {
    fn from(dto: &BookDto) -> Self {
        Self {
            id: surrogate_key(dto.id),
            title: Set(dto.title.clone()),
            author: Set(dto.author.clone()),
            publisher: Set(dto.publisher.clone()),
            year_published: Set(dto.year_published),
            genre: Set(dto.genre.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Genre, HotelType, RoomType};
    use rust_decimal::Decimal;

    fn room_model(id: i32, number: i32) -> room::Model {
        room::Model {
            id,
            room_number: number,
            room_price: Decimal::new(2520, 0),
            room_type: room::RoomType::Single,
            hotel_id: 1,
        }
    }

    #[test]
    fn test_hotel_to_dto_orders_rooms_by_id() {
        let hotel = hotel::Model {
            id: 1,
            hotel_name: "Hilton".to_string(),
            hotel_address: "Copenhagen".to_string(),
            hotel_type: hotel::HotelType::Standard,
        };

        let dto = hotel_to_dto(hotel, vec![room_model(3, 113), room_model(1, 111), room_model(2, 112)]);

        assert_eq!(dto.hotel_type, HotelType::Standard);
        let numbers: Vec<i32> = dto.rooms.iter().map(|r| r.room_number).collect();
        assert_eq!(numbers, vec![111, 112, 113]);
        assert!(dto.rooms.iter().all(|r| r.hotel_id == Some(1)));
    }

    #[test]
    fn test_zero_id_is_not_set() {
        let dto = BookDto::new("Dune", "Frank Herbert", "Chilton", 1965, Genre::Science);
        let active: book::ActiveModel = (&dto).into();
        assert_eq!(active.id, NotSet);
        assert_eq!(active.genre, Set(book::Genre::Science));

        let mut persisted = dto;
        persisted.id = 12;
        let active: book::ActiveModel = (&persisted).into();
        assert_eq!(active.id, Set(12));
    }

    #[test]
    fn test_room_without_hotel_leaves_reference_unset() {
        let dto = RoomDto::new(202, Decimal::new(2500, 0), RoomType::Suite);
        let active: room::ActiveModel = (&dto).into();
        assert_eq!(active.hotel_id, NotSet);
        assert_eq!(active.room_type, Set(room::RoomType::Suite));
    }

    #[test]
    fn test_user_to_dto_hides_hash_and_sorts_roles() {
        let model = user::Model {
            username: "admin".to_string(),
            password: "$argon2id$...".to_string(),
        };
        let dto = user_to_dto(model, vec!["user".to_string(), "admin".to_string(), "user".to_string()]);

        assert_eq!(dto.password, None);
        assert_eq!(dto.roles, vec!["admin".to_string(), "user".to_string()]);
    }
}
