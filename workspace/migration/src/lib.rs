pub use sea_orm_migration::prelude::*;

pub mod entity_iden;
mod m20240101_000001_create_hotel_tables;
mod m20240101_000002_create_user_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_hotel_tables::Migration),
            Box::new(m20240101_000002_create_user_tables::Migration),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database};

    #[tokio::test]
    async fn test_up_and_down() {
        let db = Database::connect("sqlite::memory:").await.unwrap();

        Migrator::up(&db, None).await.unwrap();
        let manager = SchemaManager::new(&db);
        for table in ["hotel", "room", "book", "users", "roles", "user_roles"] {
            assert!(manager.has_table(table).await.unwrap(), "missing table {}", table);
        }

        Migrator::down(&db, None).await.unwrap();
        assert!(!manager.has_table("hotel").await.unwrap());
        assert!(!manager.has_table("users").await.unwrap());
    }

    #[tokio::test]
    async fn test_room_number_unique_per_hotel() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        db.execute_unprepared(
            "INSERT INTO hotel (hotel_name, hotel_address, hotel_type) VALUES ('Hilton', 'Copenhagen', 'STANDARD'), ('Hotel California', 'California', 'LUXURY')",
        )
        .await
        .unwrap();
        db.execute_unprepared(
            "INSERT INTO room (room_number, room_price, room_type, hotel_id) VALUES (111, 2520, 'SINGLE', 1), (111, 2520, 'SINGLE', 2)",
        )
        .await
        .unwrap();

        let duplicate = db
            .execute_unprepared("INSERT INTO room (room_number, room_price, room_type, hotel_id) VALUES (111, 100, 'SUITE', 1)")
            .await;
        assert!(duplicate.is_err());

        let orphan = db
            .execute_unprepared("INSERT INTO room (room_number, room_price, room_type, hotel_id) VALUES (5, 100, 'SUITE', 99)")
            .await;
        assert!(orphan.is_err());
    }
}
