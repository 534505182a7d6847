use super::*;

/// Tests a team scope excludes accounts of other teams.
///
/// Verifies that the total and the page only count accounts of the scoped
/// team, so pagination leaks nothing about other teams.
///
/// Expected: Ok with only team 7's accounts
#[tokio::test]
async fn team_scope_excludes_other_teams() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let own_team = factory::create_team(db).await?;
    let other_team = factory::create_team(db).await?;
    for _ in 0..3 {
        factory::account::AccountFactory::new(db)
            .team(own_team.id)
            .build()
            .await?;
    }
    for _ in 0..2 {
        factory::account::AccountFactory::new(db)
            .team(other_team.id)
            .build()
            .await?;
    }
    factory::account::AccountFactory::new(db)
        .administrator()
        .build()
        .await?;

    let page = AccountRepository::new(db)
        .get_paginated(
            EffectiveScope::Team(own_team.id),
            AccountFilter::default(),
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 3);
    assert!(page.items.iter().all(|a| a.team_id == Some(own_team.id)));

    Ok(())
}

/// Tests an unrestricted scope with pagination.
///
/// Expected: Ok with two items on the first page and three pages in total
#[tokio::test]
async fn paginates_unrestricted_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::create_account(db).await?;
    }

    let repo = AccountRepository::new(db);
    let page = repo
        .get_paginated(
            EffectiveScope::Unrestricted,
            AccountFilter::default(),
            PageParam::new(0, 2),
        )
        .await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);

    let last = repo
        .get_paginated(
            EffectiveScope::Unrestricted,
            AccountFilter::default(),
            PageParam::new(2, 2),
        )
        .await?;

    assert_eq!(last.items.len(), 1);

    Ok(())
}

/// Tests filters combine with the scope.
///
/// Expected: Ok with only the manager of the scoped team
#[tokio::test]
async fn applies_role_filter_within_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, manager) = factory::helpers::create_team_with_manager(db).await?;
    factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;
    factory::helpers::create_team_with_manager(db).await?;

    let page = AccountRepository::new(db)
        .get_paginated(
            EffectiveScope::Team(team.id),
            AccountFilter {
                role: Some(Role::Manager),
                ..Default::default()
            },
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, manager.id);

    Ok(())
}
