//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Listing queries take an `EffectiveScope` and apply it as a SQL condition, so rows the
//! caller may not see are never fetched or counted.

pub mod account;
pub mod availability;
pub mod call_up;
pub mod due;
pub mod event;
pub mod statistic;
pub mod team;

#[cfg(test)]
mod test;

use sea_orm::{ColumnTrait, Condition};

use crate::server::access::scope::EffectiveScope;

/// Builds the condition restricting a listing to `scope`.
///
/// # Arguments
/// - `scope` - Effective scope computed for the caller
/// - `team` - Column holding the owning team id, possibly on a joined table
/// - `account` - Column holding the owning account id
fn scope_condition(
    scope: EffectiveScope,
    team: impl ColumnTrait,
    account: impl ColumnTrait,
) -> Condition {
    match scope {
        EffectiveScope::Unrestricted => Condition::all(),
        EffectiveScope::Team(team_id) => Condition::all().add(team.eq(team_id)),
        EffectiveScope::Account(account_id) => Condition::all().add(account.eq(account_id)),
    }
}

/// Builds the condition restricting a listing of team-owned rows to `scope`.
///
/// Team-owned rows are personal to nobody, so an account scope matches nothing.
fn team_scope_condition(scope: EffectiveScope, team: impl ColumnTrait) -> Condition {
    match scope {
        EffectiveScope::Unrestricted => Condition::all(),
        EffectiveScope::Team(team_id) => Condition::all().add(team.eq(team_id)),
        EffectiveScope::Account(_) => Condition::any(),
    }
}
