//! Shared helper utilities for factory methods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, IntoActiveModel};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team together with its manager.
///
/// The manager account is attached to the team and recorded as the
/// team's `manager_id`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((team, manager))` - Created team and manager account
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_manager(
    db: &DatabaseConnection,
) -> Result<(entity::team::Model, entity::account::Model), DbErr> {
    let team = crate::factory::team::create_team(db).await?;
    let manager = crate::factory::account::AccountFactory::new(db)
        .manager()
        .team(team.id)
        .build()
        .await?;

    let mut active = team.into_active_model();
    active.manager_id = ActiveValue::Set(Some(manager.id));
    let team = active.update(db).await?;

    Ok((team, manager))
}
