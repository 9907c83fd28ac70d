use sea_orm::entity::prelude::*;

/// Category of a hotel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
pub enum HotelType {
    #[sea_orm(string_value = "LUXURY")]
    Luxury,
    #[sea_orm(string_value = "STANDARD")]
    Standard,
    #[sea_orm(string_value = "BUDGET")]
    Budget,
}

/// A hotel. Owns its rooms: removing a hotel removes every room that points at it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "hotel")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_name: String,
    pub hotel_address: String,
    pub hotel_type: HotelType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room::Entity")]
    Room,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<common::HotelType> for HotelType {
    fn from(value: common::HotelType) -> Self {
        match value {
            common::HotelType::Luxury => Self::Luxury,
            common::HotelType::Standard => Self::Standard,
            common::HotelType::Budget => Self::Budget,
        }
    }
}

impl From<HotelType> for common::HotelType {
    fn from(value: HotelType) -> Self {
        match value {
            HotelType::Luxury => Self::Luxury,
            HotelType::Standard => Self::Standard,
            HotelType::Budget => Self::Budget,
        }
    }
}
