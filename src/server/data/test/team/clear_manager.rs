use super::*;

/// Tests clearing the manager reference of a managed team.
///
/// Expected: Ok and the team no longer names a manager
#[tokio::test]
async fn clears_manager_reference() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, manager) = factory::helpers::create_team_with_manager(db).await?;
    let repo = TeamRepository::new(db);

    assert_eq!(repo.find_by_manager(manager.id).await?.map(|t| t.id), Some(team.id));

    repo.clear_manager(manager.id).await?;

    let team = repo.find_by_id(team.id).await?.unwrap();
    assert!(team.manager_id.is_none());
    assert!(repo.find_by_manager(manager.id).await?.is_none());

    Ok(())
}
