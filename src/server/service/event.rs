//! Event service for business logic.
//!
//! Every decision about an event is made against the team that owns it.

use sea_orm::DatabaseConnection;

use crate::server::{
    access::{ownership::Target, scope::RequestedScope, table::Resource, Access},
    data::{event::EventRepository, team::TeamRepository},
    error::AppError,
    model::{
        event::{CreateEventParam, Event, EventFilter, UpdateEventParam},
        page::{PageParam, Paginated},
    },
    service::require_event,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<Event, AppError> {
        let event = require_event(self.db, id).await?;

        access.authorize_read(Resource::Event, Target::Event(&event))?;

        Ok(event)
    }

    /// Lists events visible to the caller in calendar order.
    pub async fn get_paginated(
        &self,
        access: &Access<'_>,
        filter: EventFilter,
        page: PageParam,
    ) -> Result<Paginated<Event>, AppError> {
        let scope = access.authorize_list(Resource::Event, RequestedScope::team(filter.team_id))?;

        Ok(EventRepository::new(self.db)
            .get_paginated(scope, filter, page)
            .await?)
    }

    /// Schedules an event for a team.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::NotFound)` - The team does not exist
    /// - `Err(AuthError::Forbidden)` - The caller does not manage the team
    pub async fn create(
        &self,
        access: &Access<'_>,
        param: CreateEventParam,
    ) -> Result<Event, AppError> {
        let team = TeamRepository::new(self.db)
            .find_by_id(param.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))?;

        access.authorize_create(Resource::Event, Target::Team(&team))?;

        let event = EventRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Account {} scheduled event {} for team {}",
            access.caller().id,
            event.id,
            event.team_id
        );

        Ok(event)
    }

    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        param: UpdateEventParam,
    ) -> Result<Event, AppError> {
        let event = require_event(self.db, id).await?;

        access.authorize_update(Resource::Event, Target::Event(&event))?;

        let event = EventRepository::new(self.db).update(id, param).await?;

        tracing::info!("Account {} updated event {}", access.caller().id, id);

        Ok(event)
    }

    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let event = require_event(self.db, id).await?;

        access.authorize_delete(Resource::Event, Target::Event(&event))?;

        EventRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted event {}", access.caller().id, id);

        Ok(())
    }
}
