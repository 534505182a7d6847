use super::*;

/// Tests a denied read is reported as forbidden by default.
///
/// Expected: Err(AuthError::Forbidden)
#[test]
fn reports_forbidden_without_masking() {
    let player = member(1, Some(7));
    let event = event(3, 9);

    let result = Access::new(&player).authorize_read(Resource::Event, Target::Event(&event));

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));
}

/// Tests masking hides targets outside the caller's listing scope.
///
/// Verifies that with masking enabled a member reading another team's event
/// or a teammate's account is told the target does not exist.
///
/// Expected: Err(AppError::NotFound)
#[test]
fn masks_targets_outside_listing_scope() {
    let player = member(1, Some(7));
    let teammate = member(2, Some(7));
    let event = event(3, 9);
    let access = Access::new(&player).mask_forbidden_reads(true);

    let result = access.authorize_read(Resource::Event, Target::Event(&event));
    assert!(matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Event not found"));

    let result = access.authorize_read(Resource::Account, Target::Account(&teammate));
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

/// Tests masking keeps reads inside the caller's scope unchanged.
///
/// Expected: Ok(()) for an own-team event
#[test]
fn allows_visible_reads_with_masking() {
    let player = member(1, Some(7));
    let event = event(3, 7);

    let result = Access::new(&player)
        .mask_forbidden_reads(true)
        .authorize_read(Resource::Event, Target::Event(&event));

    assert!(result.is_ok());
}

/// Tests masking leaves denied writes as forbidden.
///
/// Verifies that a member changing a teammate's availability is refused
/// with Forbidden even when masking is enabled.
///
/// Expected: Err(AuthError::Forbidden)
#[test]
fn keeps_forbidden_for_writes() {
    let player = member(1, Some(7));
    let teammate = member(2, Some(7));
    let event = event(3, 7);

    let result = Access::new(&player).mask_forbidden_reads(true).authorize_update(
            Resource::Availability,
            Target::EventEntry {
                event: &event,
                player_id: teammate.id,
            },
        );

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::Forbidden(_)))
    ));
}
