//! Statistic data repository for database operations.
//!
//! Statistics are unique per (event, player). `save` updates the existing row for
//! the pair when there is one and inserts otherwise.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::scope_condition,
    model::statistic::{SaveStatisticParam, Statistic, StatisticFilter, UpdateStatisticParam},
};

pub struct StatisticRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or overwrites the statistics of a player for an event.
    ///
    /// # Returns
    /// - `Ok(Statistic)` - The stored statistics
    /// - `Err(DbErr)` - Database error during lookup, insert or update
    pub async fn save(&self, param: SaveStatisticParam) -> Result<Statistic, DbErr> {
        let existing = entity::prelude::Statistic::find()
            .filter(entity::statistic::Column::EventId.eq(param.event_id))
            .filter(entity::statistic::Column::PlayerId.eq(param.player_id))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(statistic) => {
                let mut active_model: entity::statistic::ActiveModel = statistic.into();
                active_model.goals = ActiveValue::Set(param.goals);
                active_model.yellow_cards = ActiveValue::Set(param.yellow_cards);
                active_model.red_cards = ActiveValue::Set(param.red_cards);

                active_model.update(self.db).await?
            }
            None => {
                entity::statistic::ActiveModel {
                    event_id: ActiveValue::Set(param.event_id),
                    player_id: ActiveValue::Set(param.player_id),
                    goals: ActiveValue::Set(param.goals),
                    yellow_cards: ActiveValue::Set(param.yellow_cards),
                    red_cards: ActiveValue::Set(param.red_cards),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        Ok(Statistic::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Statistic>, DbErr> {
        let entity = entity::prelude::Statistic::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Statistic::from_entity))
    }

    /// Gets all statistics within `scope` matching `filter`.
    pub async fn get_all(
        &self,
        scope: EffectiveScope,
        filter: StatisticFilter,
    ) -> Result<Vec<Statistic>, DbErr> {
        let mut query = entity::prelude::Statistic::find()
            .join(JoinType::InnerJoin, entity::statistic::Relation::Event.def())
            .filter(scope_condition(
                scope,
                entity::event::Column::TeamId,
                entity::statistic::Column::PlayerId,
            ));

        if let Some(event_id) = filter.event_id {
            query = query.filter(entity::statistic::Column::EventId.eq(event_id));
        }
        if let Some(player_id) = filter.player_id {
            query = query.filter(entity::statistic::Column::PlayerId.eq(player_id));
        }

        let entities = query
            .order_by_asc(entity::statistic::Column::EventId)
            .order_by_desc(entity::statistic::Column::Goals)
            .order_by_asc(entity::statistic::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Statistic::from_entity).collect())
    }

    /// Applies a partial update to the counters of a statistic row.
    ///
    /// # Returns
    /// - `Ok(Statistic)` - The updated statistics
    /// - `Err(DbErr::RecordNotFound)` - No statistic with that id
    pub async fn update(&self, id: i32, param: UpdateStatisticParam) -> Result<Statistic, DbErr> {
        let statistic = entity::prelude::Statistic::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Statistic {} not found", id)))?;

        let mut active_model: entity::statistic::ActiveModel = statistic.into();

        if let Some(goals) = param.goals {
            active_model.goals = ActiveValue::Set(goals);
        }
        if let Some(yellow_cards) = param.yellow_cards {
            active_model.yellow_cards = ActiveValue::Set(yellow_cards);
        }
        if let Some(red_cards) = param.red_cards {
            active_model.red_cards = ActiveValue::Set(red_cards);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Statistic::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Statistic::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
