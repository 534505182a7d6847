use super::*;

use entity::sea_orm_active_enums::AvailabilityStatus;

use crate::server::{
    model::availability::{AvailabilityFilter, CreateAvailabilityParam, UpdateAvailabilityParam},
    service::availability::AvailabilityService,
};

fn answer(event_id: i32, player_id: i32) -> CreateAvailabilityParam {
    CreateAvailabilityParam {
        event_id,
        player_id,
        status: AvailabilityStatus::Attending,
        comment: None,
    }
}

/// Tests a member answering for themselves.
///
/// Expected: Ok with the member as player
#[tokio::test]
async fn member_answers_for_self() -> Result<(), AppError> {
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

    let availability = AvailabilityService::new(db)
        .create(&Access::new(&member), answer(event.id, member.id))
        .await?;

    assert_eq!(availability.player_id, member.id);
    assert_eq!(availability.status, AvailabilityStatus::Attending);

    Ok(())
}

/// Tests a member answering for a teammate.
///
/// Expected: Err(Forbidden)
#[tokio::test]
async fn member_cannot_answer_for_teammate() -> Result<(), AppError> {
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
    let teammate = factory::account::AccountFactory::new(db)
        .team(team.id)
        .build()
        .await?;

    let result = AvailabilityService::new(db)
        .create(&Access::new(&member), answer(event.id, teammate.id))
        .await;

    assert!(is_forbidden(&result.unwrap_err()));

    Ok(())
}

/// Tests answering twice for the same event.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn second_answer_conflicts() -> Result<(), AppError> {
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
    let service = AvailabilityService::new(db);
    let access = Access::new(&member);

    service.create(&access, answer(event.id, member.id)).await?;
    let result = service.create(&access, answer(event.id, member.id)).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests a member changing their answer and listing the team's answers.
///
/// Verifies that a member sees teammates' answers but only changes their own.
///
/// Expected: Ok for the update, both answers listed
#[tokio::test]
async fn member_updates_own_answer_and_lists_team() -> Result<(), AppError> {
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
    let teammate = caller(
        factory::account::AccountFactory::new(db)
            .team(team.id)
            .build()
            .await?,
    );
    let service = AvailabilityService::new(db);

    let own = service
        .create(&Access::new(&member), answer(event.id, member.id))
        .await?;
    let theirs = service
        .create(&Access::new(&teammate), answer(event.id, teammate.id))
        .await?;

    let updated = service
        .update(
            &Access::new(&member),
            own.id,
            UpdateAvailabilityParam {
                status: AvailabilityStatus::Unsure,
                comment: Some("late shift".to_string()),
            },
        )
        .await?;
    assert_eq!(updated.status, AvailabilityStatus::Unsure);

    let result = service
        .update(
            &Access::new(&member),
            theirs.id,
            UpdateAvailabilityParam {
                status: AvailabilityStatus::NotAttending,
                comment: None,
            },
        )
        .await;
    assert!(is_forbidden(&result.unwrap_err()));

    let listed = service
        .get_all(
            &Access::new(&member),
            AvailabilityFilter {
                event_id: Some(event.id),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(listed.len(), 2);

    Ok(())
}
