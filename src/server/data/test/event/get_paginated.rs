use super::*;

/// Tests a team scope returns only that team's events.
///
/// Expected: Ok with the two events of the scoped team
#[tokio::test]
async fn team_scope_excludes_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_team(db).await?;
    let other = factory::create_team(db).await?;
    factory::create_event(db, own.id).await?;
    factory::create_event(db, own.id).await?;
    factory::create_event(db, other.id).await?;

    let page = EventRepository::new(db)
        .get_paginated(
            EffectiveScope::Team(own.id),
            EventFilter::default(),
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 2);
    assert!(page.items.iter().all(|e| e.team_id == own.id));

    Ok(())
}

/// Tests filtering events by type and start date.
///
/// Expected: Ok with only the later match
#[tokio::test]
async fn filters_by_type_and_from_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    factory::event::EventFactory::new(db, team.id)
        .event_type(EventType::Match)
        .date(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap())
        .build()
        .await?;
    let later = factory::event::EventFactory::new(db, team.id)
        .event_type(EventType::Match)
        .date(NaiveDate::from_ymd_opt(2026, 2, 10).unwrap())
        .build()
        .await?;
    factory::event::EventFactory::new(db, team.id)
        .event_type(EventType::Training)
        .date(NaiveDate::from_ymd_opt(2026, 2, 12).unwrap())
        .build()
        .await?;

    let page = EventRepository::new(db)
        .get_paginated(
            EffectiveScope::Unrestricted,
            EventFilter {
                event_type: Some(EventType::Match),
                from: NaiveDate::from_ymd_opt(2026, 2, 1),
                ..Default::default()
            },
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, later.id);

    Ok(())
}

/// Tests the calendar order of an event listing.
///
/// Verifies that events come out by date and then by kick-off time, earliest
/// first, regardless of insertion order.
///
/// Expected: Ok with the events in chronological order
#[tokio::test]
async fn orders_by_date_then_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let march_evening = factory::event::EventFactory::new(db, team.id)
        .date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        .time(NaiveTime::from_hms_opt(19, 0, 0).unwrap())
        .build()
        .await?;
    let april = factory::event::EventFactory::new(db, team.id)
        .date(NaiveDate::from_ymd_opt(2026, 4, 2).unwrap())
        .build()
        .await?;
    let march_morning = factory::event::EventFactory::new(db, team.id)
        .date(NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
        .time(NaiveTime::from_hms_opt(10, 0, 0).unwrap())
        .build()
        .await?;

    let page = EventRepository::new(db)
        .get_paginated(
            EffectiveScope::Team(team.id),
            EventFilter::default(),
            PageParam::new(0, 10),
        )
        .await?;

    let ids: Vec<i32> = page.items.iter().map(|event| event.id).collect();
    assert_eq!(ids, vec![march_morning.id, march_evening.id, april.id]);

    Ok(())
}
