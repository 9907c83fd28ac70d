use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

/// Category of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum RoomType {
    #[sea_orm(string_value = "SINGLE")]
    Single,
    #[sea_orm(string_value = "DOUBLE")]
    Double,
    #[sea_orm(string_value = "SUITE")]
    Suite,
}

/// A room of a hotel. `room_number` is the number on the door and is unique
/// within its hotel; `id` is the generated surrogate key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_number: i32,
    #[sea_orm(column_type = "Decimal(Some((16, 2)))")]
    pub room_price: Decimal,
    pub room_type: RoomType,
    /// Back-reference to the owning hotel. Never rewritten after insert.
    pub hotel_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<common::RoomType> for RoomType {
    fn from(value: common::RoomType) -> Self {
        match value {
            common::RoomType::Single => Self::Single,
            common::RoomType::Double => Self::Double,
            common::RoomType::Suite => Self::Suite,
        }
    }
}

impl From<RoomType> for common::RoomType {
    fn from(value: RoomType) -> Self {
        match value {
            RoomType::Single => Self::Single,
            RoomType::Double => Self::Double,
            RoomType::Suite => Self::Suite,
        }
    }
}
