//! Due data repository for database operations.
//!
//! Dues are scoped through the player they are charged to: listings join the
//! account table and filter on the player's team.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::scope_condition,
    model::due::{CreateDueParam, Due, DueFilter, UpdateDueParam},
};

pub struct DueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateDueParam) -> Result<Due, DbErr> {
        let entity = entity::due::ActiveModel {
            player_id: ActiveValue::Set(param.player_id),
            concept: ActiveValue::Set(param.concept),
            amount: ActiveValue::Set(param.amount),
            status: ActiveValue::Set(param.status),
            payment_date: ActiveValue::Set(param.payment_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Due::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Due>, DbErr> {
        let entity = entity::prelude::Due::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Due::from_entity))
    }

    /// Gets all dues within `scope` matching `filter`, newest first.
    pub async fn get_all(&self, scope: EffectiveScope, filter: DueFilter) -> Result<Vec<Due>, DbErr> {
        let mut query = entity::prelude::Due::find()
            .join(JoinType::InnerJoin, entity::due::Relation::Player.def())
            .filter(scope_condition(
                scope,
                entity::account::Column::TeamId,
                entity::due::Column::PlayerId,
            ));

        if let Some(player_id) = filter.player_id {
            query = query.filter(entity::due::Column::PlayerId.eq(player_id));
        }
        if let Some(status) = filter.status {
            query = query.filter(entity::due::Column::Status.eq(status));
        }

        let entities = query
            .order_by_desc(entity::due::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Due::from_entity).collect())
    }

    /// Applies a partial update to a due.
    ///
    /// # Returns
    /// - `Ok(Due)` - The updated due
    /// - `Err(DbErr::RecordNotFound)` - No due with that id
    pub async fn update(&self, id: i32, param: UpdateDueParam) -> Result<Due, DbErr> {
        let due = entity::prelude::Due::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Due {} not found", id)))?;

        let mut active_model: entity::due::ActiveModel = due.into();

        if let Some(concept) = param.concept {
            active_model.concept = ActiveValue::Set(concept);
        }
        if let Some(amount) = param.amount {
            active_model.amount = ActiveValue::Set(amount);
        }
        if let Some(status) = param.status {
            active_model.status = ActiveValue::Set(status);
        }
        if let Some(payment_date) = param.payment_date {
            active_model.payment_date = ActiveValue::Set(Some(payment_date));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Due::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Due::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
