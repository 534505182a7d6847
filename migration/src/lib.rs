pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_team_table;
mod m20260105_000002_create_account_table;
mod m20260105_000003_create_event_table;
mod m20260106_000004_create_call_up_table;
mod m20260106_000005_create_availability_table;
mod m20260106_000006_create_statistic_table;
mod m20260107_000007_create_due_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_team_table::Migration),
            Box::new(m20260105_000002_create_account_table::Migration),
            Box::new(m20260105_000003_create_event_table::Migration),
            Box::new(m20260106_000004_create_call_up_table::Migration),
            Box::new(m20260106_000005_create_availability_table::Migration),
            Box::new(m20260106_000006_create_statistic_table::Migration),
            Box::new(m20260107_000007_create_due_table::Migration),
        ]
    }
}
