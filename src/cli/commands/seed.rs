use anyhow::Result;
use common::{HotelDto, HotelType, RoomDto, RoomType};
use model::entities::{hotel, role, room, user, user_role};
use model::password::hash_password;
use model::{insert_hotel, insert_user};
use rust_decimal::Decimal;
use sea_orm::{EntityTrait, TransactionTrait};
use tracing::{debug, info, instrument};

use super::initdb::run_migrations;
use crate::config::initialize_app_state_with_url;
use crate::schemas::AppState;

fn baseline_room(number: i32, price: i64, room_type: RoomType) -> RoomDto {
    RoomDto::new(number, Decimal::new(price, 0), room_type)
}

/// The two baseline hotels with their rooms.
pub fn baseline_hotels() -> Vec<HotelDto> {
    vec![
        HotelDto::new("Hotel California", "California", HotelType::Luxury).with_rooms(vec![
            baseline_room(100, 2520, RoomType::Single),
            baseline_room(101, 2520, RoomType::Single),
            baseline_room(102, 2520, RoomType::Single),
            baseline_room(103, 2520, RoomType::Single),
            baseline_room(104, 3200, RoomType::Double),
            baseline_room(105, 4500, RoomType::Suite),
        ]),
        HotelDto::new("Hilton", "Copenhagen", HotelType::Standard).with_rooms(vec![
            baseline_room(111, 2520, RoomType::Single),
            baseline_room(112, 2520, RoomType::Single),
            baseline_room(113, 2520, RoomType::Single),
            baseline_room(114, 2520, RoomType::Double),
            baseline_room(115, 3200, RoomType::Double),
            baseline_room(116, 4500, RoomType::Suite),
        ]),
    ]
}

/// Replace hotels, rooms, users and roles with the baseline data in one
/// transaction. Books are left alone. On failure the previous data stays.
#[instrument(skip(state))]
pub async fn seed_database(state: &AppState) -> Result<()> {
    let user_hash = hash_password("user123")?;
    let admin_hash = hash_password("admin123")?;

    let txn = state.db.begin().await?;
    room::Entity::delete_many().exec(&txn).await?;
    hotel::Entity::delete_many().exec(&txn).await?;
    user_role::Entity::delete_many().exec(&txn).await?;
    user::Entity::delete_many().exec(&txn).await?;
    role::Entity::delete_many().exec(&txn).await?;
    debug!("Existing hotels, rooms, users and roles removed");

    for hotel in baseline_hotels() {
        let created = insert_hotel(&txn, &hotel).await?;
        debug!("Seeded hotel '{}' with {} rooms", created.hotel_name, created.rooms.len());
    }

    insert_user(&txn, "user", user_hash, &["user"]).await?;
    insert_user(&txn, "admin", admin_hash, &["admin"]).await?;

    txn.commit().await?;
    info!("Baseline data loaded");
    Ok(())
}

pub async fn seed(database_url: &str) -> Result<()> {
    let state = initialize_app_state_with_url(database_url).await?;
    run_migrations(&state.db).await?;
    seed_database(&state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::setup_test_app_state;
    use model::Dao;
    use sea_orm::ConnectionTrait;

    #[tokio::test]
    async fn test_seed_is_repeatable() {
        let state = setup_test_app_state().await;

        seed_database(&state).await.unwrap();
        seed_database(&state).await.unwrap();

        let hotels = state.hotels.read_all().await.unwrap();
        assert_eq!(hotels.len(), 2);
        assert_eq!(hotels[0].hotel_name, "Hotel California");
        assert_eq!(hotels[0].rooms.len(), 6);
        assert_eq!(hotels[1].hotel_name, "Hilton");
        assert_eq!(hotels[1].rooms.len(), 6);
        assert_eq!(state.rooms.read_all().await.unwrap().len(), 12);

        let admin = state.users.verify_user("admin", "admin123").await.unwrap();
        assert_eq!(admin.roles, vec!["admin".to_string()]);
        let user = state.users.verify_user("user", "user123").await.unwrap();
        assert_eq!(user.roles, vec!["user".to_string()]);
        assert_eq!(state.users.read_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_seed_keeps_previous_data() {
        let state = setup_test_app_state().await;
        seed_database(&state).await.unwrap();
        let hotels_before = state.hotels.read_all().await.unwrap();

        state
            .db
            .execute_unprepared(
                "CREATE TRIGGER block_admin BEFORE INSERT ON users \
                 WHEN NEW.username = 'admin' BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
            )
            .await
            .unwrap();

        assert!(seed_database(&state).await.is_err());

        assert_eq!(state.hotels.read_all().await.unwrap(), hotels_before);
        assert_eq!(state.rooms.read_all().await.unwrap().len(), 12);
        assert_eq!(state.users.read_all().await.unwrap().len(), 2);
        assert!(state.users.verify_user("admin", "admin123").await.is_ok());
    }
}
