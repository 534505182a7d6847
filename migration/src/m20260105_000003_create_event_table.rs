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
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(integer(Event::TeamId))
                    .col(string(Event::EventType))
                    .col(date(Event::Date))
                    .col(time(Event::Time))
                    .col(string_null(Event::Location))
                    .col(text_null(Event::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_team_id")
                            .from(Event::Table, Event::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    TeamId,
    EventType,
    Date,
    Time,
    Location,
    Description,
}
