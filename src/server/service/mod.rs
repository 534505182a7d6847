//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Authorization**: Every operation receives the caller's `Access` and passes its
//!   entry point before touching the database beyond loading the target
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod account;
pub mod auth;
pub mod availability;
pub mod call_up;
pub mod due;
pub mod event;
pub mod statistic;
pub mod team;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{account::AccountRepository, event::EventRepository},
    error::AppError,
    model::{account::Account, event::Event},
};

/// Loads an event or fails with `NotFound`.
async fn require_event(db: &DatabaseConnection, event_id: i32) -> Result<Event, AppError> {
    EventRepository::new(db)
        .find_by_id(event_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))
}

/// Loads an account or fails with `NotFound` naming it as a player.
async fn require_player(db: &DatabaseConnection, player_id: i32) -> Result<Account, AppError> {
    AccountRepository::new(db)
        .find_by_id(player_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Player not found".to_string()))
}

/// Ensures a player belongs to the team of the event they are attached to.
async fn require_event_player(
    db: &DatabaseConnection,
    event: &Event,
    player_id: i32,
) -> Result<Account, AppError> {
    let player = require_player(db, player_id).await?;

    if player.team_id != Some(event.team_id) {
        return Err(AppError::BadRequest(
            "player does not belong to the event's team".to_string(),
        ));
    }

    Ok(player)
}
