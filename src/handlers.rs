pub mod auth;
pub mod books;
pub mod health;
pub mod hotels;
pub mod rooms;
pub mod users;
