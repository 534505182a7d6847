use super::*;

/// Tests a team scope returns only that team.
///
/// Expected: Ok with a single team and a total of one
#[tokio::test]
async fn team_scope_returns_own_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own = factory::create_team(db).await?;
    factory::create_team(db).await?;
    factory::create_team(db).await?;

    let page = TeamRepository::new(db)
        .get_paginated(
            EffectiveScope::Team(own.id),
            TeamFilter::default(),
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, own.id);

    Ok(())
}

/// Tests an account scope never matches team rows.
///
/// Expected: Ok with no teams
#[tokio::test]
async fn account_scope_matches_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;

    let page = TeamRepository::new(db)
        .get_paginated(
            EffectiveScope::Account(team.id),
            TeamFilter::default(),
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 0);
    assert!(page.items.is_empty());

    Ok(())
}

/// Tests filtering teams by name fragment.
///
/// Expected: Ok with only the matching team
#[tokio::test]
async fn filters_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::team::TeamFactory::new(db)
        .name("Alevín A")
        .build()
        .await?;
    factory::team::TeamFactory::new(db)
        .name("Senior B")
        .build()
        .await?;

    let page = TeamRepository::new(db)
        .get_paginated(
            EffectiveScope::Unrestricted,
            TeamFilter {
                name: Some("Senior".to_string()),
                ..Default::default()
            },
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].name, "Senior B");

    Ok(())
}
