//! Due service for business logic.
//!
//! Dues are authorized against the player they are charged to. Members see
//! only their own dues and never change them.

use sea_orm::DatabaseConnection;

use crate::server::{
    access::{ownership::Target, scope::RequestedScope, table::Resource, Access},
    data::due::DueRepository,
    error::AppError,
    model::due::{CreateDueParam, Due, DueFilter, UpdateDueParam},
    service::require_player,
    util::validate,
};

pub struct DueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<Due, AppError> {
        let due = self.require(id).await?;
        let player = require_player(self.db, due.player_id).await?;

        access.authorize_read(Resource::Due, Target::PlayerEntry { player: &player })?;

        Ok(due)
    }

    pub async fn get_all(&self, access: &Access<'_>, filter: DueFilter) -> Result<Vec<Due>, AppError> {
        let scope = access.authorize_list(Resource::Due, RequestedScope::default())?;

        Ok(DueRepository::new(self.db).get_all(scope, filter).await?)
    }

    /// Charges a due to a player.
    ///
    /// # Returns
    /// - `Ok(Due)` - The created due
    /// - `Err(AppError::BadRequest)` - Empty concept or negative amount
    /// - `Err(AppError::NotFound)` - The player does not exist
    /// - `Err(AuthError::Forbidden)` - The caller does not manage the player's team
    pub async fn create(&self, access: &Access<'_>, param: CreateDueParam) -> Result<Due, AppError> {
        let player = require_player(self.db, param.player_id).await?;

        access.authorize_create(Resource::Due, Target::PlayerEntry { player: &player })?;

        validate::non_empty("concept", &param.concept)?;
        validate::amount(param.amount)?;

        let due = DueRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Account {} charged due {} to player {}",
            access.caller().id,
            due.id,
            due.player_id
        );

        Ok(due)
    }

    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        param: UpdateDueParam,
    ) -> Result<Due, AppError> {
        let due = self.require(id).await?;
        let player = require_player(self.db, due.player_id).await?;

        access.authorize_update(Resource::Due, Target::PlayerEntry { player: &player })?;

        if let Some(concept) = &param.concept {
            validate::non_empty("concept", concept)?;
        }
        if let Some(amount) = param.amount {
            validate::amount(amount)?;
        }

        Ok(DueRepository::new(self.db).update(id, param).await?)
    }

    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let due = self.require(id).await?;
        let player = require_player(self.db, due.player_id).await?;

        access.authorize_delete(Resource::Due, Target::PlayerEntry { player: &player })?;

        DueRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted due {}", access.caller().id, id);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Due, AppError> {
        DueRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Due not found".to_string()))
    }
}
