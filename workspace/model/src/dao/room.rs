use async_trait::async_trait;
use common::{HotelDto, RoomDto};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use super::Dao;
use super::hotel::load_hotel;
use crate::entities::{hotel, room};
use crate::error::{DaoError, require};

#[derive(Clone, Debug)]
pub struct RoomDao {
    db: DatabaseConnection,
}

impl RoomDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Attaches a new room to an existing hotel and returns the hotel with its
    /// refreshed room list.
    #[instrument(skip(self, data), fields(room_number = data.room_number))]
    pub async fn add_room_to_hotel(&self, hotel_id: i32, data: RoomDto) -> Result<HotelDto, DaoError> {
        validate(&data)?;

        let txn = self.db.begin().await?;
        if hotel::Entity::find_by_id(hotel_id).count(&txn).await? == 0 {
            warn!("Hotel with ID {} not found, room not added", hotel_id);
            return Err(DaoError::not_found("Hotel", hotel_id));
        }

        let mut active: room::ActiveModel = (&data).into();
        active.id = Default::default();
        active.hotel_id = Set(hotel_id);
        let created = active.insert(&txn).await?;
        debug!("Room {} inserted with ID {}", created.room_number, created.id);

        let hotel = load_hotel(&txn, hotel_id)
            .await?
            .ok_or_else(|| DaoError::not_found("Hotel", hotel_id))?;
        txn.commit().await?;

        info!("Room {} added to hotel {}", created.room_number, hotel_id);
        Ok(hotel)
    }
}

fn validate(data: &RoomDto) -> Result<(), DaoError> {
    require(data.room_number > 0, "Room number must be positive")?;
    require(!data.room_price.is_sign_negative(), "Room price must not be negative")
}

#[async_trait]
impl Dao<RoomDto, i32> for RoomDao {
    /// Rooms can only be created for an existing hotel named by `hotel_id`;
    /// anything else violates the room's hotel reference.
    #[instrument(skip(self, data), fields(room_number = data.room_number))]
    async fn create(&self, data: RoomDto) -> Result<RoomDto, DaoError> {
        validate(&data)?;
        let Some(hotel_id) = data.hotel_id else {
            return Err(DaoError::constraint("Room must belong to a hotel"));
        };

        let txn = self.db.begin().await?;
        if hotel::Entity::find_by_id(hotel_id).count(&txn).await? == 0 {
            return Err(DaoError::constraint(format!("Hotel {} does not exist", hotel_id)));
        }

        let mut active: room::ActiveModel = (&data).into();
        active.id = Default::default();
        let created = active.insert(&txn).await?;
        txn.commit().await?;

        info!("Room created with ID {}", created.id);
        Ok(created.into())
    }

    #[instrument(skip(self))]
    async fn read(&self, key: i32) -> Result<Option<RoomDto>, DaoError> {
        let room = room::Entity::find_by_id(key).one(&self.db).await?;
        Ok(room.map(RoomDto::from))
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<RoomDto>, DaoError> {
        let rooms = room::Entity::find()
            .order_by_asc(room::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Retrieved {} rooms", rooms.len());
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    /// Overwrites number, price and type. The owning hotel never changes.
    #[instrument(skip(self, data))]
    async fn update(&self, key: i32, data: RoomDto) -> Result<RoomDto, DaoError> {
        validate(&data)?;

        let txn = self.db.begin().await?;
        let Some(existing) = room::Entity::find_by_id(key).one(&txn).await? else {
            warn!("Room with ID {} not found for update", key);
            return Err(DaoError::not_found("Room", key));
        };

        let mut active: room::ActiveModel = existing.into();
        active.room_number = Set(data.room_number);
        active.room_price = Set(data.room_price);
        active.room_type = Set(data.room_type.into());
        let updated = active.update(&txn).await?;
        txn.commit().await?;

        info!("Room with ID {} updated", key);
        Ok(updated.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: i32) -> Result<(), DaoError> {
        let txn = self.db.begin().await?;
        let result = room::Entity::delete_by_id(key).exec(&txn).await?;
        if result.rows_affected == 0 {
            warn!("Room with ID {} not found for deletion", key);
            return Err(DaoError::not_found("Room", key));
        }
        txn.commit().await?;

        info!("Room with ID {} deleted", key);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn validate_key(&self, key: i32) -> Result<bool, DaoError> {
        Ok(room::Entity::find_by_id(key).count(&self.db).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::HotelDao;
    use crate::dao::testing::setup_db;
    use common::{HotelType, RoomType};
    use rust_decimal::Decimal;

    async fn hilton(db: &DatabaseConnection) -> HotelDto {
        HotelDao::new(db.clone())
            .create(
                HotelDto::new("Hilton", "Copenhagen", HotelType::Standard).with_rooms(vec![
                    RoomDto::new(111, Decimal::new(2520, 0), RoomType::Single),
                    RoomDto::new(112, Decimal::new(2520, 0), RoomType::Single),
                ]),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_room_to_hotel_returns_hotel_with_new_room() {
        let db = setup_db().await;
        let hotel = hilton(&db).await;
        let dao = RoomDao::new(db);

        let updated = dao
            .add_room_to_hotel(hotel.id, RoomDto::new(202, Decimal::new(2500, 0), RoomType::Suite))
            .await
            .unwrap();

        assert_eq!(updated.id, hotel.id);
        assert_eq!(updated.rooms.len(), 3);
        let added = updated.rooms.last().unwrap();
        assert_eq!(added.room_number, 202);
        assert_eq!(added.room_type, RoomType::Suite);
        assert_eq!(added.hotel_id, Some(hotel.id));
    }

    #[tokio::test]
    async fn test_add_room_to_missing_hotel_is_not_found() {
        let dao = RoomDao::new(setup_db().await);
        let result = dao
            .add_room_to_hotel(9999, RoomDto::new(202, Decimal::new(2500, 0), RoomType::Suite))
            .await;

        assert!(matches!(result, Err(DaoError::NotFound { entity: "Hotel", .. })));
        assert!(dao.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_room_number_in_hotel_is_constraint_violation() {
        let db = setup_db().await;
        let hotel = hilton(&db).await;
        let dao = RoomDao::new(db);

        let result = dao
            .add_room_to_hotel(hotel.id, RoomDto::new(111, Decimal::new(100, 0), RoomType::Double))
            .await;
        assert!(matches!(result, Err(DaoError::ConstraintViolation(_))));
        assert_eq!(dao.read_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_create_requires_hotel() {
        let db = setup_db().await;
        let hotel = hilton(&db).await;
        let dao = RoomDao::new(db);

        let orphan = RoomDto::new(300, Decimal::new(100, 0), RoomType::Single);
        assert!(matches!(dao.create(orphan.clone()).await, Err(DaoError::ConstraintViolation(_))));

        let mut dangling = orphan.clone();
        dangling.hotel_id = Some(hotel.id + 100);
        assert!(matches!(dao.create(dangling).await, Err(DaoError::ConstraintViolation(_))));

        let mut owned = orphan;
        owned.hotel_id = Some(hotel.id);
        let created = dao.create(owned).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(dao.read(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_update_keeps_hotel_reference() {
        let db = setup_db().await;
        let hotel = hilton(&db).await;
        let dao = RoomDao::new(db);
        let room = hotel.rooms[0].clone();

        let mut changes = RoomDto::new(121, Decimal::new(3000, 0), RoomType::Double);
        changes.hotel_id = Some(hotel.id + 7);
        let updated = dao.update(room.id, changes).await.unwrap();

        assert_eq!(updated.id, room.id);
        assert_eq!(updated.room_number, 121);
        assert_eq!(updated.room_price, Decimal::new(3000, 0));
        assert_eq!(updated.hotel_id, Some(hotel.id));
    }

    #[tokio::test]
    async fn test_missing_room_paths() {
        let dao = RoomDao::new(setup_db().await);

        assert_eq!(dao.read(42).await.unwrap(), None);
        assert!(!dao.validate_key(42).await.unwrap());
        assert!(matches!(dao.delete(42).await, Err(DaoError::NotFound { .. })));
        let changes = RoomDto::new(1, Decimal::new(1, 0), RoomType::Single);
        assert!(matches!(dao.update(42, changes).await, Err(DaoError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_delete_room_keeps_hotel() {
        let db = setup_db().await;
        let hotel = hilton(&db).await;
        let dao = RoomDao::new(db.clone());

        dao.delete(hotel.rooms[0].id).await.unwrap();

        let remaining = HotelDao::new(db).read(hotel.id).await.unwrap().unwrap();
        assert_eq!(remaining.rooms.len(), 1);
        assert!(!dao.validate_key(hotel.rooms[0].id).await.unwrap());
    }
}
