use super::*;

/// Tests call-ups are scoped through their event's team.
///
/// Verifies that a team scope returns call-ups of the team's events only and
/// an account scope returns only the player's own call-ups.
///
/// Expected: Ok with the scoped call-ups
#[tokio::test]
async fn scopes_through_event_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    let own_event = factory::create_event(db, own.id).await?;
    let other_event = factory::create_event(db, other.id).await?;
    let player = factory::account::AccountFactory::new(db)
        .team(own.id)
        .build()
        .await?;
    let teammate = factory::account::AccountFactory::new(db)
        .team(own.id)
        .build()
        .await?;
    let stranger = factory::account::AccountFactory::new(db)
        .team(other.id)
        .build()
        .await?;

    let repo = CallUpRepository::new(db);
    for (event_id, player_id) in [
        (own_event.id, player.id),
        (own_event.id, teammate.id),
        (other_event.id, stranger.id),
    ] {
        repo.create(CreateCallUpParam {
            event_id,
            player_id,
            starter: false,
        })
        .await?;
    }

    let team_call_ups = repo
        .get_all(EffectiveScope::Team(own.id), CallUpFilter::default())
        .await?;
    assert_eq!(team_call_ups.len(), 2);
    assert!(team_call_ups.iter().all(|c| c.event_id == own_event.id));

    let own_call_ups = repo
        .get_all(EffectiveScope::Account(player.id), CallUpFilter::default())
        .await?;
    assert_eq!(own_call_ups.len(), 1);
    assert_eq!(own_call_ups[0].player_id, player.id);

    assert!(repo.exists(own_event.id, teammate.id).await?);
    assert!(!repo.exists(other_event.id, teammate.id).await?);

    Ok(())
}
