//! Event data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::team_scope_condition,
    model::{
        event::{CreateEventParam, Event, EventFilter, UpdateEventParam},
        page::{PageParam, Paginated},
    },
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateEventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            team_id: ActiveValue::Set(param.team_id),
            event_type: ActiveValue::Set(param.event_type),
            date: ActiveValue::Set(param.date),
            time: ActiveValue::Set(param.time),
            location: ActiveValue::Set(param.location),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets one page of events within `scope` matching `filter`.
    ///
    /// Events are ordered by date, then time, earliest first.
    ///
    /// # Returns
    /// - `Ok(Paginated<Event>)` - Requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        scope: EffectiveScope,
        filter: EventFilter,
        page: PageParam,
    ) -> Result<Paginated<Event>, DbErr> {
        let mut query = entity::prelude::Event::find()
            .filter(team_scope_condition(scope, entity::event::Column::TeamId));

        if let Some(team_id) = filter.team_id {
            query = query.filter(entity::event::Column::TeamId.eq(team_id));
        }
        if let Some(event_type) = filter.event_type {
            query = query.filter(entity::event::Column::EventType.eq(event_type));
        }
        if let Some(date) = filter.date {
            query = query.filter(entity::event::Column::Date.eq(date));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::event::Column::Date.gte(from));
        }
        if let Some(location) = filter.location {
            query = query.filter(entity::event::Column::Location.contains(&location));
        }

        let paginator = query
            .order_by_asc(entity::event::Column::Date)
            .order_by_asc(entity::event::Column::Time)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;
        let events = entities.into_iter().map(Event::from_entity).collect();

        Ok(Paginated::new(events, total, page))
    }

    /// Applies a partial update to an event. The owning team never changes.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(DbErr::RecordNotFound)` - No event with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, param: UpdateEventParam) -> Result<Event, DbErr> {
        let event = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Event {} not found", id)))?;

        let mut active_model: entity::event::ActiveModel = event.into();

        if let Some(event_type) = param.event_type {
            active_model.event_type = ActiveValue::Set(event_type);
        }
        if let Some(date) = param.date {
            active_model.date = ActiveValue::Set(date);
        }
        if let Some(time) = param.time {
            active_model.time = ActiveValue::Set(time);
        }
        if let Some(location) = param.location {
            active_model.location = ActiveValue::Set(Some(location));
        }
        if let Some(description) = param.description {
            active_model.description = ActiveValue::Set(Some(description));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Event::from_entity(entity))
    }

    /// Deletes an event together with its call-ups, availability and statistics.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
