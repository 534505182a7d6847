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
                    .table(CallUp::Table)
                    .if_not_exists()
                    .col(pk_auto(CallUp::Id))
                    .col(integer(CallUp::EventId))
                    .col(integer(CallUp::PlayerId))
                    .col(boolean(CallUp::Starter).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_call_up_event_id")
                            .from(CallUp::Table, CallUp::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_call_up_player_id")
                            .from(CallUp::Table, CallUp::PlayerId)
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
                    .name("idx_call_up_event_player")
                    .table(CallUp::Table)
                    .col(CallUp::EventId)
                    .col(CallUp::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CallUp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CallUp {
    Table,
    Id,
    EventId,
    PlayerId,
    Starter,
}
