//! Target-level access decisions.
//!
//! `check_access` is pure: it looks only at the resolved caller and the already
//! loaded target, never at the database, so the same inputs always produce the
//! same decision.

use entity::sea_orm_active_enums::Role;

use crate::server::{
    access::table::OperationKind,
    error::auth::AuthError,
    model::{account::Account, event::Event, team::Team},
};

/// Entity an operation is aimed at, resolved far enough to know its owning team.
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    Account(&'a Account),
    Team(&'a Team),
    Event(&'a Event),
    /// Record attached to an event for a single player: call-up, availability
    /// or statistic. Access follows the event's team.
    EventEntry { event: &'a Event, player_id: i32 },
    /// Record owned by a single player, such as a due. Access follows the
    /// player's team.
    PlayerEntry { player: &'a Account },
}

impl Target<'_> {
    /// Team the target belongs to, if any.
    pub fn owning_team(&self) -> Option<i32> {
        match self {
            Self::Account(account) => account.team_id,
            Self::Team(team) => Some(team.id),
            Self::Event(event) => Some(event.team_id),
            Self::EventEntry { event, .. } => Some(event.team_id),
            Self::PlayerEntry { player } => player.team_id,
        }
    }

    /// Account the target is personal to, if any.
    pub fn owning_account(&self) -> Option<i32> {
        match self {
            Self::Account(account) => Some(account.id),
            Self::EventEntry { player_id, .. } => Some(*player_id),
            Self::PlayerEntry { player } => Some(player.id),
            Self::Team(_) | Self::Event(_) => None,
        }
    }
}

/// Decides whether `caller` may perform `kind` on `target`.
///
/// Administrators are always allowed. Managers are allowed on anything owned by
/// their own team, except that deleting a Manager or Administrator account is
/// reserved to Administrators. Members may act on their own account and their
/// own entries, and may read the team they belong to and its events.
///
/// # Returns
/// - `Ok(())` - Access allowed
/// - `Err(AuthError::Forbidden)` - Access denied, with the reason
pub fn check_access(
    caller: &Account,
    target: &Target<'_>,
    kind: OperationKind,
) -> Result<(), AuthError> {
    match caller.role {
        Role::Administrator => Ok(()),
        Role::Manager => check_manager(caller, target, kind),
        Role::Member => check_member(caller, target, kind),
    }
}

fn check_manager(
    caller: &Account,
    target: &Target<'_>,
    kind: OperationKind,
) -> Result<(), AuthError> {
    if kind == OperationKind::Delete {
        if let Target::Account(account) = target {
            if !account.is_member() {
                return Err(denied(
                    "only administrators can delete manager or administrator accounts",
                ));
            }
        }
    }

    let Some(own_team) = caller.team_id else {
        return Err(denied("manager has no team"));
    };

    same_team(own_team, target)
}

fn check_member(caller: &Account, target: &Target<'_>, kind: OperationKind) -> Result<(), AuthError> {
    match target {
        Target::Account(account) => {
            if account.id != caller.id {
                return Err(denied("can only view yourself"));
            }

            Ok(())
        }
        Target::PlayerEntry { player } => {
            if player.id != caller.id {
                return Err(denied("can only access your own records"));
            }

            Ok(())
        }
        Target::Team(_) | Target::Event(_) => {
            if !kind.is_read() {
                return Err(denied("members have read-only access to teams and events"));
            }

            member_team(caller, target)
        }
        Target::EventEntry { player_id, .. } => {
            member_team(caller, target)?;

            if !kind.is_read() && *player_id != caller.id {
                return Err(denied("can only change your own entries"));
            }

            Ok(())
        }
    }
}

fn member_team(caller: &Account, target: &Target<'_>) -> Result<(), AuthError> {
    let Some(own_team) = caller.team_id else {
        return Err(denied("member has no team"));
    };

    same_team(own_team, target)
}

fn same_team(own_team: i32, target: &Target<'_>) -> Result<(), AuthError> {
    match target.owning_team() {
        None => Err(denied("target has no team")),
        Some(team_id) if team_id != own_team => Err(denied("not your team")),
        Some(_) => Ok(()),
    }
}

fn denied(reason: &str) -> AuthError {
    AuthError::Forbidden(reason.to_string())
}
