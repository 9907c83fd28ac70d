use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(string(Hotel::HotelName))
                    .col(string(Hotel::HotelAddress))
                    .col(string_len(Hotel::HotelType, 10))
                    .to_owned(),
            )
            .await?;

        // Rooms are removed explicitly before their hotel, so the reference restricts.
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::RoomNumber))
                    .col(decimal_len(Room::RoomPrice, 16, 2))
                    .col(string_len(Room::RoomType, 10))
                    .col(integer(Room::HotelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_room_hotel_room_number")
                    .table(Room::Table)
                    .col(Room::HotelId)
                    .col(Room::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string(Book::Title))
                    .col(string(Book::Author))
                    .col(string(Book::Publisher))
                    .col(integer(Book::YearPublished))
                    .col(string_len(Book::Genre, 12))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Hotel {
    Table,
    Id,
    HotelName,
    HotelAddress,
    HotelType,
}

#[derive(DeriveIden)]
enum Room {
    Table,
    Id,
    RoomNumber,
    RoomPrice,
    RoomType,
    HotelId,
}

#[derive(DeriveIden)]
enum Book {
    Table,
    Id,
    Title,
    Author,
    Publisher,
    YearPublished,
    Genre,
}
