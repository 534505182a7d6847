use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_account_table::Account, m20260105_000003_create_event_table::Event,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Availability::Table)
                    .if_not_exists()
                    .col(pk_auto(Availability::Id))
                    .col(integer(Availability::EventId))
                    .col(integer(Availability::PlayerId))
                    .col(string(Availability::Status))
                    .col(text_null(Availability::Comment))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_event_id")
                            .from(Availability::Table, Availability::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_availability_player_id")
                            .from(Availability::Table, Availability::PlayerId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Availability::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Availability {
    Table,
    Id,
    EventId,
    PlayerId,
    Status,
    Comment,
}
