use super::*;

/// Tests a manager listing accounts without a scope.
///
/// Expected: Ok(Team(7))
#[test]
fn manager_lists_accounts_of_own_team() -> Result<(), AppError> {
    let coach = manager(1, Some(7));

    let scope = Access::new(&coach).authorize_list(Resource::Account, RequestedScope::default())?;

    assert_eq!(scope, EffectiveScope::Team(7));

    Ok(())
}

/// Tests a member deleting a teammate.
///
/// Expected: Err(Forbidden) although both share a team
#[test]
fn member_cannot_delete_teammate() {
    let player = member(1, Some(7));
    let teammate = member(2, Some(7));

    let result =
        Access::new(&player).authorize_delete(Resource::Account, Target::Account(&teammate));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));
}

/// Tests a manager deleting an administrator.
///
/// Expected: Err(Forbidden)
#[test]
fn manager_cannot_delete_administrator() {
    let coach = manager(1, Some(7));
    let admin = administrator(2);

    let result = Access::new(&coach).authorize_delete(Resource::Account, Target::Account(&admin));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(ref reason)))
            if reason == "only administrators can delete manager or administrator accounts"
    ));
}

/// Tests an administrator deleting any account.
///
/// Expected: Ok(()) for members, managers and administrators
#[test]
fn administrator_deletes_any_account() {
    let admin = administrator(1);
    let access = Access::new(&admin);

    for target in [member(2, Some(7)), manager(3, Some(9)), administrator(4)] {
        assert!(access
            .authorize_delete(Resource::Account, Target::Account(&target))
            .is_ok());
    }
}

/// Tests a team-less member reading an event.
///
/// Expected: Err(Forbidden("member has no team"))
#[test]
fn teamless_member_cannot_read_event() {
    let drifter = member(1, None);
    let event = event(3, 7);

    let result = Access::new(&drifter).authorize_read(Resource::Event, Target::Event(&event));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(ref reason))) if reason == "member has no team"
    ));
}

/// Tests a manager founding a team.
///
/// Verifies that the manager becomes the team's manager and that a manager
/// who already leads a team is refused.
///
/// Expected: manager_id set to the caller, Err(Forbidden) for the second team
#[test]
fn manager_founds_one_team() -> Result<(), AppError> {
    use crate::server::model::team::CreateTeamParam;

    let founder = manager(1, None);
    let param = CreateTeamParam {
        name: "Juniors".to_string(),
        category: TeamCategory::Under16,
        manager_id: Some(42),
    };

    let param = Access::new(&founder).authorize_team_create(param)?;
    assert_eq!(param.manager_id, Some(1));

    let leader = manager(2, Some(7));
    assert!(Access::new(&leader).authorize_team_create(param).is_err());

    Ok(())
}
