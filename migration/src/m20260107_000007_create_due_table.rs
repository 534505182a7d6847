use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Due::Table)
                    .if_not_exists()
                    .col(pk_auto(Due::Id))
                    .col(integer(Due::PlayerId))
                    .col(string(Due::Concept))
                    .col(double(Due::Amount))
                    .col(string(Due::Status))
                    .col(date_null(Due::PaymentDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_due_player_id")
                            .from(Due::Table, Due::PlayerId)
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
            .drop_table(Table::drop().table(Due::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Due {
    Table,
    Id,
    PlayerId,
    Concept,
    Amount,
    Status,
    PaymentDate,
}
