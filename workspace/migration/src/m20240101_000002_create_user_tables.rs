use crate::entity_iden::EntityIden;
use model::entities::prelude::*;
use model::entities::{role, user, user_role};
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::table())
                    .if_not_exists()
                    .col(string_len(User::column(user::Column::Username), 25).primary_key())
                    .col(string(User::column(user::Column::Password)))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Role::table())
                    .if_not_exists()
                    .col(string_len(Role::column(role::Column::RoleName), 25).primary_key())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRole::table())
                    .if_not_exists()
                    .col(string_len(UserRole::column(user_role::Column::Username), 25))
                    .col(string_len(UserRole::column(user_role::Column::RoleName), 25))
                    .primary_key(
                        Index::create()
                            .name("pk_user_roles")
                            .col(UserRole::column(user_role::Column::Username))
                            .col(UserRole::column(user_role::Column::RoleName)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_roles_user")
                            .from(UserRole::table(), UserRole::column(user_role::Column::Username))
                            .to(User::table(), User::column(user::Column::Username))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_roles_role")
                            .from(UserRole::table(), UserRole::column(user_role::Column::RoleName))
                            .to(Role::table(), Role::column(role::Column::RoleName))
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRole::table()).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Role::table()).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(User::table()).to_owned())
            .await?;

        Ok(())
    }
}
