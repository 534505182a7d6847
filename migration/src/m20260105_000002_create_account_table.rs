use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000001_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Account::Table)
                    .if_not_exists()
                    .col(pk_auto(Account::Id))
                    .col(string(Account::FirstName))
                    .col(string(Account::LastName))
                    .col(string_uniq(Account::Email))
                    .col(string(Account::Password))
                    .col(string(Account::Role))
                    .col(string_null(Account::Position))
                    .col(string_null(Account::Phone))
                    .col(string_null(Account::PhotoUrl))
                    .col(integer_null(Account::TeamId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_account_team_id")
                            .from(Account::Table, Account::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Account::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Account {
    Table,
    Id,
    FirstName,
    LastName,
    Email,
    Password,
    Role,
    Position,
    Phone,
    PhotoUrl,
    TeamId,
}
