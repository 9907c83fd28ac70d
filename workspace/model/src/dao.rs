//! Data-access layer: one accessor per entity type.
//!
//! Every mutating operation runs inside a single database transaction. A
//! transaction that is dropped before `commit` (early `?` return) is rolled
//! back, so no partial write is ever visible. While a transaction is open all
//! statements of that operation go through it and never through the pool.

mod book;
mod hotel;
mod room;
mod user;

pub use book::BookDao;
pub use hotel::{HotelDao, insert_hotel};
pub use room::RoomDao;
pub use user::{UserDao, insert_user};

use async_trait::async_trait;

use crate::error::DaoError;

/// Uniform persistence contract over transfer type `T` keyed by `K`.
#[async_trait]
pub trait Dao<T, K>: Send + Sync
where
    T: Send + 'static,
    K: Send + 'static,
{
    /// Persists `data`, assigning its identity, and returns the stored representation.
    async fn create(&self, data: T) -> Result<T, DaoError>;

    /// Looks up one row by key. Absence is `Ok(None)`.
    async fn read(&self, key: K) -> Result<Option<T>, DaoError>;

    /// Returns every row in key order.
    async fn read_all(&self) -> Result<Vec<T>, DaoError>;

    /// Overwrites the mutable fields of an existing row.
    async fn update(&self, key: K, data: T) -> Result<T, DaoError>;

    async fn delete(&self, key: K) -> Result<(), DaoError>;

    /// Existence check that does not materialize the row.
    async fn validate_key(&self, key: K) -> Result<bool, DaoError>;
}

#[cfg(test)]
pub(crate) mod testing {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection};

    /// Create an in-memory SQLite database with the full schema applied.
    pub async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }
}
