use super::*;

/// Tests saving twice for the same event and player.
///
/// Verifies that the second save overwrites the counters of the existing row
/// instead of inserting another one.
///
/// Expected: Ok with one row holding the second counters
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let event = factory::create_event(db, team.id).await?;
    let player = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;

    let repo = StatisticRepository::new(db);
    let first = repo
        .save(SaveStatisticParam {
            event_id: event.id,
            player_id: player.id,
            goals: 1,
            yellow_cards: 0,
            red_cards: 0,
        })
        .await?;
    let second = repo
        .save(SaveStatisticParam {
            event_id: event.id,
            player_id: player.id,
            goals: 2,
            yellow_cards: 1,
            red_cards: 0,
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.goals, 2);
    assert_eq!(second.yellow_cards, 1);

    let all = repo
        .get_all(EffectiveScope::Unrestricted, StatisticFilter::default())
        .await?;
    assert_eq!(all.len(), 1);

    Ok(())
}
