use std::collections::HashSet;

use async_trait::async_trait;
use common::{HotelDto, RoomDto};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, instrument, trace, warn};

use super::Dao;
use crate::entities::{hotel, room};
use crate::error::{DaoError, require};
use crate::mapping::hotel_to_dto;

/// Data access for hotels and, through them, their rooms.
#[derive(Clone, Debug)]
pub struct HotelDao {
    db: DatabaseConnection,
}

impl HotelDao {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rooms of one hotel, ordered by room id.
    #[instrument(skip(self))]
    pub async fn rooms_of(&self, hotel_id: i32) -> Result<Vec<RoomDto>, DaoError> {
        let txn = self.db.begin().await?;
        if hotel::Entity::find_by_id(hotel_id).count(&txn).await? == 0 {
            warn!("Hotel with ID {} not found", hotel_id);
            return Err(DaoError::not_found("Hotel", hotel_id));
        }
        let rooms = rooms_of_hotel(&txn, hotel_id).await?;
        txn.commit().await?;
        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }
}

/// Loads a hotel together with its rooms over `conn`.
pub(crate) async fn load_hotel<C: ConnectionTrait>(conn: &C, id: i32) -> Result<Option<HotelDto>, DbErr> {
    let Some(model) = hotel::Entity::find_by_id(id).one(conn).await? else {
        return Ok(None);
    };
    let rooms = rooms_of_hotel(conn, id).await?;
    Ok(Some(hotel_to_dto(model, rooms)))
}

async fn rooms_of_hotel<C: ConnectionTrait>(conn: &C, hotel_id: i32) -> Result<Vec<room::Model>, DbErr> {
    room::Entity::find()
        .filter(room::Column::HotelId.eq(hotel_id))
        .order_by_asc(room::Column::Id)
        .all(conn)
        .await
}

/// Inserts a hotel and its rooms over `conn`, which is usually an open
/// transaction. Incoming ids are ignored.
pub async fn insert_hotel<C: ConnectionTrait>(conn: &C, data: &HotelDto) -> Result<HotelDto, DaoError> {
    validate(data)?;

    let mut active: hotel::ActiveModel = data.into();
    active.id = Default::default();
    let created = active.insert(conn).await?;
    debug!("Inserted hotel row with ID {}", created.id);

    // A hotel never holds the same room number twice; later duplicates are dropped.
    let mut seen = HashSet::new();
    let mut rooms = Vec::with_capacity(data.rooms.len());
    for dto in data.rooms.iter().filter(|room| seen.insert(room.room_number)) {
        let mut active: room::ActiveModel = dto.into();
        active.id = Default::default();
        active.hotel_id = Set(created.id);
        rooms.push(active.insert(conn).await?);
    }

    Ok(hotel_to_dto(created, rooms))
}

fn validate(data: &HotelDto) -> Result<(), DaoError> {
    require(!data.hotel_name.trim().is_empty(), "Hotel name must be set")?;
    require(!data.hotel_address.trim().is_empty(), "Hotel address must be set")
}

#[async_trait]
impl Dao<HotelDto, i32> for HotelDao {
    #[instrument(skip(self, data), fields(hotel_name = %data.hotel_name))]
    async fn create(&self, data: HotelDto) -> Result<HotelDto, DaoError> {
        trace!("Entering HotelDao::create");
        let txn = self.db.begin().await?;
        let created = insert_hotel(&txn, &data).await?;
        txn.commit().await?;

        info!("Hotel created with ID {} and {} rooms", created.id, created.rooms.len());
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn read(&self, key: i32) -> Result<Option<HotelDto>, DaoError> {
        let txn = self.db.begin().await?;
        let hotel = load_hotel(&txn, key).await?;
        txn.commit().await?;
        if hotel.is_none() {
            debug!("Hotel with ID {} does not exist", key);
        }
        Ok(hotel)
    }

    #[instrument(skip(self))]
    async fn read_all(&self) -> Result<Vec<HotelDto>, DaoError> {
        let hotels = hotel::Entity::find()
            .order_by_asc(hotel::Column::Id)
            .find_with_related(room::Entity)
            .all(&self.db)
            .await?;
        debug!("Retrieved {} hotels", hotels.len());
        Ok(hotels
            .into_iter()
            .map(|(hotel, rooms)| hotel_to_dto(hotel, rooms))
            .collect())
    }

    #[instrument(skip(self, data))]
    async fn update(&self, key: i32, data: HotelDto) -> Result<HotelDto, DaoError> {
        trace!("Entering HotelDao::update for ID {}", key);
        validate(&data)?;

        let txn = self.db.begin().await?;
        let Some(existing) = hotel::Entity::find_by_id(key).one(&txn).await? else {
            warn!("Hotel with ID {} not found for update", key);
            return Err(DaoError::not_found("Hotel", key));
        };

        let mut active: hotel::ActiveModel = existing.into();
        active.hotel_name = Set(data.hotel_name);
        active.hotel_address = Set(data.hotel_address);
        active.hotel_type = Set(data.hotel_type.into());
        let updated = active.update(&txn).await?;
        let rooms = rooms_of_hotel(&txn, key).await?;

        txn.commit().await?;
        info!("Hotel with ID {} updated", key);
        Ok(hotel_to_dto(updated, rooms))
    }

    /// Removes the hotel and every room that belongs to it: rooms first, then
    /// the hotel row, in one transaction.
    #[instrument(skip(self))]
    async fn delete(&self, key: i32) -> Result<(), DaoError> {
        let txn = self.db.begin().await?;
        if hotel::Entity::find_by_id(key).count(&txn).await? == 0 {
            warn!("Hotel with ID {} not found for deletion", key);
            return Err(DaoError::not_found("Hotel", key));
        }

        let rooms = room::Entity::delete_many()
            .filter(room::Column::HotelId.eq(key))
            .exec(&txn)
            .await?;
        debug!("Deleted {} rooms of hotel {}", rooms.rows_affected, key);

        hotel::Entity::delete_by_id(key).exec(&txn).await?;
        txn.commit().await?;

        info!("Hotel with ID {} deleted together with {} rooms", key, rooms.rows_affected);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn validate_key(&self, key: i32) -> Result<bool, DaoError> {
        Ok(hotel::Entity::find_by_id(key).count(&self.db).await? > 0)
    }
}
