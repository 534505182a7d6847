use super::*;

/// Tests administrators get the requested scope unchanged.
///
/// Expected: Unrestricted without a team, Team(id) with one
#[test]
fn administrator_scope_is_requested_scope() {
    let admin = administrator(1);

    assert_eq!(
        scope_query(&admin, Resource::Account, RequestedScope::default()),
        Ok(EffectiveScope::Unrestricted)
    );
    assert_eq!(
        scope_query(&admin, Resource::Event, RequestedScope::team(Some(9))),
        Ok(EffectiveScope::Team(9))
    );
}

/// Tests managers are narrowed to their own team.
///
/// Verifies that a manager listing without a scope, or explicitly naming
/// their own team, gets the same team scope.
///
/// Expected: Ok(Team(7))
#[test]
fn manager_scope_is_own_team() {
    let coach = manager(1, Some(7));

    assert_eq!(
        scope_query(&coach, Resource::Account, RequestedScope::default()),
        Ok(EffectiveScope::Team(7))
    );
    assert_eq!(
        scope_query(&coach, Resource::Event, RequestedScope::team(Some(7))),
        Ok(EffectiveScope::Team(7))
    );
}

/// Tests a manager naming another team is refused rather than given an empty set.
///
/// Expected: Err(Forbidden("not your team"))
#[test]
fn manager_other_team_is_forbidden() {
    let coach = manager(1, Some(7));

    assert_forbidden(
        scope_query(&coach, Resource::Account, RequestedScope::team(Some(9))),
        "not your team",
    );
}

/// Tests a manager without a team cannot list anything.
///
/// Expected: Err(Forbidden("manager has no team"))
#[test]
fn manager_without_team_is_forbidden() {
    let coach = manager(1, None);

    assert_forbidden(
        scope_query(&coach, Resource::Event, RequestedScope::default()),
        "manager has no team",
    );
}

/// Tests members cannot list accounts.
///
/// Expected: Err(Forbidden)
#[test]
fn member_account_listing_is_forbidden() {
    let player = member(1, Some(7));

    assert_forbidden(
        scope_query(&player, Resource::Account, RequestedScope::default()),
        "members can only view their own account",
    );
}

/// Tests members list events of their own team only.
///
/// Expected: Ok(Team(7)), Forbidden for other teams and for team-less members
#[test]
fn member_event_listing_is_own_team() {
    let player = member(1, Some(7));
    let drifter = member(2, None);

    assert_eq!(
        scope_query(&player, Resource::Event, RequestedScope::default()),
        Ok(EffectiveScope::Team(7))
    );
    assert_forbidden(
        scope_query(&player, Resource::Event, RequestedScope::team(Some(9))),
        "not your team",
    );
    assert_forbidden(
        scope_query(&drifter, Resource::Event, RequestedScope::default()),
        "member has no team",
    );
}

/// Tests members only see their own dues.
///
/// Expected: Ok(Account(member id))
#[test]
fn member_due_listing_is_personal() {
    let player = member(1, Some(7));

    assert_eq!(
        scope_query(&player, Resource::Due, RequestedScope::default()),
        Ok(EffectiveScope::Account(1))
    );
}

/// Tests computing a scope twice gives the same result.
///
/// Expected: equal results for every role
#[test]
fn scope_query_is_idempotent() {
    let callers = [administrator(1), manager(2, Some(7)), member(3, Some(7))];

    for caller in &callers {
        for resource in [Resource::Account, Resource::Event, Resource::Due] {
            let requested = RequestedScope::team(Some(7));

            assert_eq!(
                scope_query(caller, resource, requested),
                scope_query(caller, resource, requested)
            );
        }
    }
}

/// Tests which targets fall inside a scope.
///
/// Expected: team scope includes own-team events only, account scope
/// includes the owner's records only
#[test]
fn includes_matches_owning_team_and_account() {
    let player = member(1, Some(7));
    let teammate = member(2, Some(7));
    let own_event = event(3, 7);
    let other_event = event(4, 9);

    assert!(EffectiveScope::Unrestricted.includes(&Target::Event(&other_event)));
    assert!(EffectiveScope::Team(7).includes(&Target::Event(&own_event)));
    assert!(!EffectiveScope::Team(7).includes(&Target::Event(&other_event)));
    assert!(EffectiveScope::Account(1).includes(&Target::PlayerEntry { player: &player }));
    assert!(!EffectiveScope::Account(1).includes(&Target::PlayerEntry { player: &teammate }));
}
