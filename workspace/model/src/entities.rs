//! SeaORM entity modules for the hotel and book catalogue and for the
//! user/role records backing authentication.

pub mod book;
pub mod hotel;
pub mod role;
pub mod room;
pub mod user;
pub mod user_role;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::book::Entity as Book;
    pub use super::hotel::Entity as Hotel;
    pub use super::role::Entity as Role;
    pub use super::room::Entity as Room;
    pub use super::user::Entity as User;
    pub use super::user_role::Entity as UserRole;
}
