//! Narrowing of listing queries to what the caller may see.
//!
//! The effective scope is computed before any query runs and is turned into a
//! SQL condition by the repositories, so totals and page counts never include
//! rows outside it.

use entity::sea_orm_active_enums::Role;

use crate::server::{
    access::{ownership::Target, table::Resource},
    error::auth::AuthError,
    model::account::Account,
};

/// Scope a caller asked for when listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequestedScope {
    /// Only rows belonging to this team.
    pub team_id: Option<i32>,
}

impl RequestedScope {
    pub fn team(team_id: Option<i32>) -> Self {
        Self { team_id }
    }
}

/// Scope a listing query is actually run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectiveScope {
    /// No narrowing.
    Unrestricted,
    /// Rows owned by one team.
    Team(i32),
    /// Rows personal to one account.
    Account(i32),
}

impl EffectiveScope {
    /// Whether `target` would appear in a listing run with this scope.
    pub fn includes(&self, target: &Target<'_>) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::Team(team_id) => target.owning_team() == Some(*team_id),
            Self::Account(account_id) => target.owning_account() == Some(*account_id),
        }
    }

    /// Team restriction, if the scope has one.
    pub fn team_id(&self) -> Option<i32> {
        match self {
            Self::Team(team_id) => Some(*team_id),
            _ => None,
        }
    }
}

/// Computes the effective scope for `caller` listing `resource`.
///
/// Administrators get what they asked for. Managers and Members are narrowed to
/// their own team and are refused when they explicitly ask for another team.
/// Members cannot list accounts at all and only see their own dues.
///
/// # Returns
/// - `Ok(EffectiveScope)` - Scope to run the listing with
/// - `Err(AuthError::Forbidden)` - The caller may not list with this scope
pub fn scope_query(
    caller: &Account,
    resource: Resource,
    requested: RequestedScope,
) -> Result<EffectiveScope, AuthError> {
    match caller.role {
        Role::Administrator => Ok(requested
            .team_id
            .map(EffectiveScope::Team)
            .unwrap_or(EffectiveScope::Unrestricted)),
        Role::Manager => own_team(caller.team_id, requested, "manager has no team"),
        Role::Member => match resource {
            Resource::Account => Err(AuthError::Forbidden(
                "members can only view their own account".to_string(),
            )),
            Resource::Due => Ok(EffectiveScope::Account(caller.id)),
            _ => own_team(caller.team_id, requested, "member has no team"),
        },
    }
}

fn own_team(
    team_id: Option<i32>,
    requested: RequestedScope,
    no_team_reason: &str,
) -> Result<EffectiveScope, AuthError> {
    let Some(team_id) = team_id else {
        return Err(AuthError::Forbidden(no_team_reason.to_string()));
    };

    match requested.team_id {
        Some(requested_team) if requested_team != team_id => {
            Err(AuthError::Forbidden("not your team".to_string()))
        }
        _ => Ok(EffectiveScope::Team(team_id)),
    }
}
