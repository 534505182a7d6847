use super::*;

fn due(player_id: i32, status: DueStatus) -> CreateDueParam {
    CreateDueParam {
        player_id,
        concept: "Season fee".to_string(),
        amount: 120.0,
        status,
        payment_date: None,
    }
}

/// Tests dues are scoped through the player's team.
///
/// Expected: Ok with dues of the scoped team's players only
#[tokio::test]
async fn team_scope_follows_player_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    let player = factory::account::AccountFactory::new(db)
        .team(own.id)
        .build()
        .await?;
    let stranger = factory::account::AccountFactory::new(db)
        .team(other.id)
        .build()
        .await?;

    let repo = DueRepository::new(db);
    repo.create(due(player.id, DueStatus::Pending)).await?;
    repo.create(due(player.id, DueStatus::Paid)).await?;
    repo.create(due(stranger.id, DueStatus::Pending)).await?;

    let dues = repo
        .get_all(EffectiveScope::Team(own.id), DueFilter::default())
        .await?;
    assert_eq!(dues.len(), 2);
    assert!(dues.iter().all(|d| d.player_id == player.id));

    let pending = repo
        .get_all(
            EffectiveScope::Team(own.id),
            DueFilter {
                status: Some(DueStatus::Pending),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(pending.len(), 1);

    Ok(())
}

/// Tests an account scope returns only the player's own dues.
///
/// Expected: Ok with the teammate's due only
#[tokio::test]
async fn account_scope_is_personal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let player = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;
    let teammate = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;

    let repo = DueRepository::new(db);
    repo.create(due(player.id, DueStatus::Pending)).await?;
    let own = repo.create(due(teammate.id, DueStatus::Pending)).await?;

    let dues = repo
        .get_all(EffectiveScope::Account(teammate.id), DueFilter::default())
        .await?;

    assert_eq!(dues.len(), 1);
    assert_eq!(dues[0].id, own.id);

    Ok(())
}
