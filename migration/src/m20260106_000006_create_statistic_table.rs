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
                    .table(Statistic::Table)
                    .if_not_exists()
                    .col(pk_auto(Statistic::Id))
                    .col(integer(Statistic::EventId))
                    .col(integer(Statistic::PlayerId))
                    .col(integer(Statistic::Goals).default(0))
                    .col(integer(Statistic::YellowCards).default(0))
                    .col(integer(Statistic::RedCards).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistic_event_id")
                            .from(Statistic::Table, Statistic::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_statistic_player_id")
                            .from(Statistic::Table, Statistic::PlayerId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_statistic_event_player")
                    .table(Statistic::Table)
                    .col(Statistic::EventId)
                    .col(Statistic::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Statistic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Statistic {
    Table,
    Id,
    EventId,
    PlayerId,
    Goals,
    YellowCards,
    RedCards,
}
