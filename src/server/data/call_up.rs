//! Call-up data repository for database operations.
//!
//! Call-ups are scoped through the event they belong to: listings join the event
//! table and filter on its team.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::scope_condition,
    model::call_up::{CallUp, CallUpFilter, CreateCallUpParam},
};

pub struct CallUpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CallUpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateCallUpParam) -> Result<CallUp, DbErr> {
        let entity = entity::call_up::ActiveModel {
            event_id: ActiveValue::Set(param.event_id),
            player_id: ActiveValue::Set(param.player_id),
            starter: ActiveValue::Set(param.starter),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(CallUp::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<CallUp>, DbErr> {
        let entity = entity::prelude::CallUp::find_by_id(id).one(self.db).await?;

        Ok(entity.map(CallUp::from_entity))
    }

    /// Checks whether a player is already called up for an event.
    pub async fn exists(&self, event_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let entity = entity::prelude::CallUp::find()
            .filter(entity::call_up::Column::EventId.eq(event_id))
            .filter(entity::call_up::Column::PlayerId.eq(player_id))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Gets all call-ups within `scope` matching `filter`.
    ///
    /// # Returns
    /// - `Ok(Vec<CallUp>)` - Matching call-ups ordered by event, starters first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(
        &self,
        scope: EffectiveScope,
        filter: CallUpFilter,
    ) -> Result<Vec<CallUp>, DbErr> {
        let mut query = entity::prelude::CallUp::find()
            .join(JoinType::InnerJoin, entity::call_up::Relation::Event.def())
            .filter(scope_condition(
                scope,
                entity::event::Column::TeamId,
                entity::call_up::Column::PlayerId,
            ));

        if let Some(event_id) = filter.event_id {
            query = query.filter(entity::call_up::Column::EventId.eq(event_id));
        }
        if let Some(player_id) = filter.player_id {
            query = query.filter(entity::call_up::Column::PlayerId.eq(player_id));
        }
        if let Some(starter) = filter.starter {
            query = query.filter(entity::call_up::Column::Starter.eq(starter));
        }

        let entities = query
            .order_by_asc(entity::call_up::Column::EventId)
            .order_by_desc(entity::call_up::Column::Starter)
            .order_by_asc(entity::call_up::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(CallUp::from_entity).collect())
    }

    /// Changes whether a called-up player starts.
    ///
    /// # Returns
    /// - `Ok(CallUp)` - The updated call-up
    /// - `Err(DbErr::RecordNotFound)` - No call-up with that id
    pub async fn set_starter(&self, id: i32, starter: bool) -> Result<CallUp, DbErr> {
        let call_up = entity::prelude::CallUp::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Call-up {} not found", id)))?;

        let mut active_model: entity::call_up::ActiveModel = call_up.into();
        active_model.starter = ActiveValue::Set(starter);

        let entity = active_model.update(self.db).await?;

        Ok(CallUp::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CallUp::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
