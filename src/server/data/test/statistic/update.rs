use super::*;

/// Tests a partial counter update keeps other counters.
///
/// Expected: Ok with new red cards and unchanged goals
#[tokio::test]
async fn updates_only_provided_counters() -> Result<(), DbErr> {
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
    let statistic = repo
        .save(SaveStatisticParam {
            event_id: event.id,
            player_id: player.id,
            goals: 3,
            yellow_cards: 0,
            red_cards: 0,
        })
        .await?;

    let updated = repo
        .update(
            statistic.id,
            UpdateStatisticParam {
                red_cards: Some(1),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.goals, 3);
    assert_eq!(updated.red_cards, 1);

    Ok(())
}
