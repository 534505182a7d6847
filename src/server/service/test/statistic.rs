use super::*;

use crate::server::{model::statistic::SaveStatisticParam, service::statistic::StatisticService};

fn line(event_id: i32, player_id: i32, goals: i32) -> SaveStatisticParam {
    SaveStatisticParam {
        event_id,
        player_id,
        goals,
        yellow_cards: 0,
        red_cards: 0,
    }
}

/// Tests a manager recording statistics for a player of another team.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_player_outside_event_team() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, manager) = factory::helpers::create_team_with_manager(db).await?;
    let event = factory::create_event(db, team.id).await?;
    let other = factory::create_team(db).await?;
    let stranger = factory::account::AccountFactory::new(db)
        .team(other.id)
        .build()
        .await?;
    let manager = caller(manager);

    let result = StatisticService::new(db)
        .save(&Access::new(&manager), line(event.id, stranger.id, 1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a manager recording negative goals.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_negative_counts() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, manager) = factory::helpers::create_team_with_manager(db).await?;
    let event = factory::create_event(db, team.id).await?;
    let player = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;
    let manager = caller(manager);

    let result = StatisticService::new(db)
        .save(&Access::new(&manager), line(event.id, player.id, -1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a member recording their own statistics.
///
/// Expected: Err(Forbidden), statistics are recorded by staff
#[tokio::test]
async fn member_cannot_record_statistics() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let event = factory::create_event(db, team.id).await?;
    let member = caller(
        factory::account::AccountFactory::new(db)
            .team(team.id)
            .build()
            .await?,
    );

    let result = StatisticService::new(db)
        .save(&Access::new(&member), line(event.id, member.id, 3))
        .await;

    assert!(is_forbidden(&result.unwrap_err()));

    Ok(())
}

/// Tests saving twice for the same player and event.
///
/// Expected: Ok with the same row holding the second values
#[tokio::test]
async fn save_replaces_existing_line() -> Result<(), AppError> {
    let test = TestBuilder::new().with_club_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (team, manager) = factory::helpers::create_team_with_manager(db).await?;
    let event = factory::create_event(db, team.id).await?;
    let player = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;
    let manager = caller(manager);
    let service = StatisticService::new(db);
    let access = Access::new(&manager);

    let first = service.save(&access, line(event.id, player.id, 1)).await?;
    let second = service.save(&access, line(event.id, player.id, 2)).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.goals, 2);

    Ok(())
}
