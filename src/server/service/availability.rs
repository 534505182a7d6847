//! Availability service for business logic.
//!
//! Players answer for events of their own team. Members may only answer for
//! themselves; Managers may record answers for any player of their team.

use sea_orm::DatabaseConnection;

use crate::server::{
    access::{ownership::Target, scope::RequestedScope, table::Resource, Access},
    data::availability::AvailabilityRepository,
    error::AppError,
    model::availability::{
        Availability, AvailabilityFilter, CreateAvailabilityParam, UpdateAvailabilityParam,
    },
    service::{require_event, require_event_player},
};

pub struct AvailabilityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<Availability, AppError> {
        let availability = self.require(id).await?;
        let event = require_event(self.db, availability.event_id).await?;

        access.authorize_read(
            Resource::Availability,
            Target::EventEntry {
                event: &event,
                player_id: availability.player_id,
            },
        )?;

        Ok(availability)
    }

    pub async fn get_all(
        &self,
        access: &Access<'_>,
        filter: AvailabilityFilter,
    ) -> Result<Vec<Availability>, AppError> {
        let scope = access.authorize_list(Resource::Availability, RequestedScope::default())?;

        Ok(AvailabilityRepository::new(self.db)
            .get_all(scope, filter)
            .await?)
    }

    /// Records a player's answer for an event.
    ///
    /// # Returns
    /// - `Ok(Availability)` - The created answer
    /// - `Err(AppError::NotFound)` - Event or player does not exist
    /// - `Err(AppError::BadRequest)` - Player is not on the event's team
    /// - `Err(AppError::Conflict)` - The player already answered
    /// - `Err(AuthError::Forbidden)` - The caller may not answer for this player
    pub async fn create(
        &self,
        access: &Access<'_>,
        param: CreateAvailabilityParam,
    ) -> Result<Availability, AppError> {
        let event = require_event(self.db, param.event_id).await?;

        access.authorize_create(
            Resource::Availability,
            Target::EventEntry {
                event: &event,
                player_id: param.player_id,
            },
        )?;

        require_event_player(self.db, &event, param.player_id).await?;

        let repo = AvailabilityRepository::new(self.db);
        if repo.exists(param.event_id, param.player_id).await? {
            return Err(AppError::Conflict(
                "availability already recorded for this player and event".to_string(),
            ));
        }

        let availability = repo.create(param).await?;

        tracing::info!(
            "Account {} recorded availability of player {} for event {}",
            access.caller().id,
            availability.player_id,
            availability.event_id
        );

        Ok(availability)
    }

    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        param: UpdateAvailabilityParam,
    ) -> Result<Availability, AppError> {
        let availability = self.require(id).await?;
        let event = require_event(self.db, availability.event_id).await?;

        access.authorize_update(
            Resource::Availability,
            Target::EventEntry {
                event: &event,
                player_id: availability.player_id,
            },
        )?;

        Ok(AvailabilityRepository::new(self.db)
            .update(id, param)
            .await?)
    }

    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let availability = self.require(id).await?;
        let event = require_event(self.db, availability.event_id).await?;

        access.authorize_delete(
            Resource::Availability,
            Target::EventEntry {
                event: &event,
                player_id: availability.player_id,
            },
        )?;

        AvailabilityRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted availability {}", access.caller().id, id);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Availability, AppError> {
        AvailabilityRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Availability not found".to_string()))
    }
}
