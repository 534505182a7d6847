//! Statistic service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    access::{ownership::Target, scope::RequestedScope, table::Resource, Access},
    data::statistic::StatisticRepository,
    error::AppError,
    model::statistic::{SaveStatisticParam, Statistic, StatisticFilter, UpdateStatisticParam},
    service::{require_event, require_event_player},
    util::validate,
};

pub struct StatisticService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatisticService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<Statistic, AppError> {
        let statistic = self.require(id).await?;
        let event = require_event(self.db, statistic.event_id).await?;

        access.authorize_read(
            Resource::Statistic,
            Target::EventEntry {
                event: &event,
                player_id: statistic.player_id,
            },
        )?;

        Ok(statistic)
    }

    pub async fn get_all(
        &self,
        access: &Access<'_>,
        filter: StatisticFilter,
    ) -> Result<Vec<Statistic>, AppError> {
        let scope = access.authorize_list(Resource::Statistic, RequestedScope::default())?;

        Ok(StatisticRepository::new(self.db)
            .get_all(scope, filter)
            .await?)
    }

    /// Records a player's statistics for an event, overwriting earlier ones.
    ///
    /// # Returns
    /// - `Ok(Statistic)` - The stored statistics
    /// - `Err(AppError::BadRequest)` - Negative counter or player not on the event's team
    /// - `Err(AppError::NotFound)` - Event or player does not exist
    /// - `Err(AuthError::Forbidden)` - The caller does not manage the event's team
    pub async fn save(
        &self,
        access: &Access<'_>,
        param: SaveStatisticParam,
    ) -> Result<Statistic, AppError> {
        let event = require_event(self.db, param.event_id).await?;

        access.authorize_create(
            Resource::Statistic,
            Target::EventEntry {
                event: &event,
                player_id: param.player_id,
            },
        )?;

        validate::non_negative("goals", param.goals)?;
        validate::non_negative("yellow_cards", param.yellow_cards)?;
        validate::non_negative("red_cards", param.red_cards)?;
        require_event_player(self.db, &event, param.player_id).await?;

        let statistic = StatisticRepository::new(self.db).save(param).await?;

        tracing::info!(
            "Account {} saved statistics of player {} for event {}",
            access.caller().id,
            statistic.player_id,
            statistic.event_id
        );

        Ok(statistic)
    }

    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        param: UpdateStatisticParam,
    ) -> Result<Statistic, AppError> {
        let statistic = self.require(id).await?;
        let event = require_event(self.db, statistic.event_id).await?;

        access.authorize_update(
            Resource::Statistic,
            Target::EventEntry {
                event: &event,
                player_id: statistic.player_id,
            },
        )?;

        for (field, value) in [
            ("goals", param.goals),
            ("yellow_cards", param.yellow_cards),
            ("red_cards", param.red_cards),
        ] {
            if let Some(value) = value {
                validate::non_negative(field, value)?;
            }
        }

        Ok(StatisticRepository::new(self.db)
            .update(id, param)
            .await?)
    }

    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let statistic = self.require(id).await?;
        let event = require_event(self.db, statistic.event_id).await?;

        access.authorize_delete(
            Resource::Statistic,
            Target::EventEntry {
                event: &event,
                player_id: statistic.player_id,
            },
        )?;

        StatisticRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted statistic {}", access.caller().id, id);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Statistic, AppError> {
        StatisticRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Statistic not found".to_string()))
    }
}
