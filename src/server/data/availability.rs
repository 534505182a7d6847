//! Availability data repository for database operations.
//!
//! Availability is scoped through the event it answers: listings join the event
//! table and filter on its team.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::scope_condition,
    model::availability::{
        Availability, AvailabilityFilter, CreateAvailabilityParam, UpdateAvailabilityParam,
    },
};

pub struct AvailabilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAvailabilityParam) -> Result<Availability, DbErr> {
        let entity = entity::availability::ActiveModel {
            event_id: ActiveValue::Set(param.event_id),
            player_id: ActiveValue::Set(param.player_id),
            status: ActiveValue::Set(param.status),
            comment: ActiveValue::Set(param.comment),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Availability::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Availability>, DbErr> {
        let entity = entity::prelude::Availability::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Availability::from_entity))
    }

    /// Checks whether a player already answered for an event.
    pub async fn exists(&self, event_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::Availability::find()
            .filter(entity::availability::Column::EventId.eq(event_id))
            .filter(entity::availability::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Gets all availability answers within `scope` matching `filter`.
    pub async fn get_all(
        &self,
        scope: EffectiveScope,
        filter: AvailabilityFilter,
    ) -> Result<Vec<Availability>, DbErr> {
        let mut query = entity::prelude::Availability::find()
            .join(
                JoinType::InnerJoin,
                entity::availability::Relation::Event.def(),
            )
            .filter(scope_condition(
                scope,
                entity::event::Column::TeamId,
                entity::availability::Column::PlayerId,
            ));

        if let Some(event_id) = filter.event_id {
            query = query.filter(entity::availability::Column::EventId.eq(event_id));
        }
        if let Some(player_id) = filter.player_id {
            query = query.filter(entity::availability::Column::PlayerId.eq(player_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::availability::Column::Status.eq(status));
        }

        let entities = query
            .order_by_asc(entity::availability::Column::EventId)
            .order_by_asc(entity::availability::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Availability::from_entity).collect())
    }

    /// Replaces the status and comment of an answer.
    ///
    /// # Returns
    /// - `Ok(Availability)` - The updated answer
    /// - `Err(DbErr::RecordNotFound)` - No answer with that id
    pub async fn update(
        &self,
        id: i32,
        param: UpdateAvailabilityParam,
    ) -> Result<Availability, DbErr> {
        let availability = entity::prelude::Availability::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Availability {} not found",
                id
            )))?;

        let mut active_model: entity::availability::ActiveModel = availability.into();
        active_model.status = ActiveValue::Set(param.status);
        active_model.comment = ActiveValue::Set(param.comment);

        let entity = active_model.update(self.db).await?;

        Ok(Availability::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Availability::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
