//! Call-up service for business logic.
//!
//! Call-ups are authorized against the event they belong to.

use sea_orm::DatabaseConnection;

use crate::server::{
    access::{ownership::Target, scope::RequestedScope, table::Resource, Access},
    data::call_up::CallUpRepository,
    error::AppError,
    model::call_up::{CallUp, CallUpFilter, CreateCallUpParam},
    service::{require_event, require_event_player},
};

pub struct CallUpService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CallUpService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<CallUp, AppError> {
        let call_up = self.require(id).await?;
        let event = require_event(self.db, call_up.event_id).await?;

        access.authorize_read(
            Resource::CallUp,
            Target::EventEntry {
                event: &event,
                player_id: call_up.player_id,
            },
        )?;

        Ok(call_up)
    }

    pub async fn get_all(
        &self,
        access: &Access<'_>,
        filter: CallUpFilter,
    ) -> Result<Vec<CallUp>, AppError> {
        let scope = access.authorize_list(Resource::CallUp, RequestedScope::default())?;

        Ok(CallUpRepository::new(self.db).get_all(scope, filter).await?)
    }

    /// Calls a player up for an event of their team.
    ///
    /// # Returns
    /// - `Ok(CallUp)` - The created call-up
    /// - `Err(AppError::NotFound)` - Event or player does not exist
    /// - `Err(AppError::BadRequest)` - Player is not on the event's team
    /// - `Err(AppError::Conflict)` - Player already called up
    /// - `Err(AuthError::Forbidden)` - The caller does not manage the event's team
    pub async fn create(
        &self,
        access: &Access<'_>,
        param: CreateCallUpParam,
    ) -> Result<CallUp, AppError> {
        let event = require_event(self.db, param.event_id).await?;

        access.authorize_create(
            Resource::CallUp,
            Target::EventEntry {
                event: &event,
                player_id: param.player_id,
            },
        )?;

        require_event_player(self.db, &event, param.player_id).await?;

        let repo = CallUpRepository::new(self.db);
        if repo.exists(param.event_id, param.player_id).await? {
            return Err(AppError::Conflict(
                "player is already called up for this event".to_string(),
            ));
        }

        let call_up = repo.create(param).await?;

        tracing::info!(
            "Account {} called up player {} for event {}",
            access.caller().id,
            call_up.player_id,
            call_up.event_id
        );

        Ok(call_up)
    }

    /// Changes whether a called-up player starts.
    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        starter: bool,
    ) -> Result<CallUp, AppError> {
        let call_up = self.require(id).await?;
        let event = require_event(self.db, call_up.event_id).await?;

        access.authorize_update(
            Resource::CallUp,
            Target::EventEntry {
                event: &event,
                player_id: call_up.player_id,
            },
        )?;

        Ok(CallUpRepository::new(self.db).set_starter(id, starter).await?)
    }

    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let call_up = self.require(id).await?;
        let event = require_event(self.db, call_up.event_id).await?;

        access.authorize_delete(
            Resource::CallUp,
            Target::EventEntry {
                event: &event,
                player_id: call_up.player_id,
            },
        )?;

        CallUpRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted call-up {}", access.caller().id, id);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<CallUp, AppError> {
        CallUpRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Call-up not found".to_string()))
    }
}
