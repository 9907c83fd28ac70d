//! Persistence layer: entities, conversions to transfer objects and the
//! transactional data-access objects built on top of them.

pub mod dao;
pub mod entities;
pub mod error;
pub mod mapping;
pub mod password;

pub use dao::{BookDao, Dao, HotelDao, RoomDao, UserDao, insert_hotel, insert_user};
pub use error::DaoError;
