use super::*;

use entity::sea_orm_active_enums::TeamCategory;

use crate::server::{
    data::account::AccountRepository,
    model::{
        page::PageParam,
        team::{CreateTeamParam, TeamFilter},
    },
    service::team::TeamService,
};

/// Tests a manager without a team founding one.
///
/// Verifies that the manager is recorded as the team's manager and joins it.
///
/// Expected: Ok with manager_id set and the manager affiliated
#[tokio::test]
async fn manager_founds_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let manager = caller(
        factory::account::AccountFactory::new(db)
            .manager()
            .build()
            .await?,
    );

    let team = TeamService::new(db)
        .create(
            &Access::new(&manager),
            CreateTeamParam {
                name: "Cadete A".to_string(),
                category: TeamCategory::Under16,
                manager_id: None,
            },
        )
        .await?;

    assert_eq!(team.manager_id, Some(manager.id));

    let manager = AccountRepository::new(db)
        .find_by_id(manager.id)
        .await?
        .unwrap();
    assert_eq!(manager.team_id, Some(team.id));

    Ok(())
}

/// Tests a member listing teams.
///
/// Expected: Ok with only the member's own team
#[tokio::test]
async fn member_lists_own_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    factory::create_team(db).await?;
    let member = caller(
        factory::account::AccountFactory::new(db)
            .team(team.id)
            .build()
            .await?,
    );

    let page = TeamService::new(db)
        .get_paginated(
            &Access::new(&member),
            TeamFilter::default(),
            PageParam::new(0, 10),
        )
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, team.id);

    Ok(())
}

/// Tests a manager deleting their own team.
///
/// Expected: Err(Forbidden), team deletion is reserved to administrators
#[tokio::test]
async fn manager_cannot_delete_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, manager) = factory::helpers::create_team_with_manager(db).await?;
    let manager = caller(manager);

    let result = TeamService::new(db)
        .delete(&Access::new(&manager), team.id)
        .await;

    assert!(is_forbidden(&result.unwrap_err()));

    Ok(())
}

/// Tests an administrator deleting a team.
///
/// Verifies that the team's accounts survive without a team affiliation.
///
/// Expected: Ok and the member's team cleared
#[tokio::test]
async fn administrator_deletes_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let member = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;
    let admin = caller(
        factory::account::AccountFactory::new(db)
            .administrator()
            .build()
            .await?,
    );

    TeamService::new(db)
        .delete(&Access::new(&admin), team.id)
        .await?;

    let member = AccountRepository::new(db)
        .find_by_id(member.id)
        .await?
        .unwrap();
    assert!(member.team_id.is_none());

    Ok(())
}
