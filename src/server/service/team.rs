//! Team service for business logic.

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    access::{ownership::Target, scope::RequestedScope, table::Resource, Access},
    data::{account::AccountRepository, team::TeamRepository},
    error::AppError,
    model::{
        account::Account,
        page::{PageParam, Paginated},
        team::{CreateTeamParam, Team, TeamFilter, UpdateTeamParam},
    },
    util::validate,
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<Team, AppError> {
        let team = self.require(id).await?;

        access.authorize_read(Resource::Team, Target::Team(&team))?;

        Ok(team)
    }

    /// Lists teams visible to the caller. Managers and Members see only their own.
    pub async fn get_paginated(
        &self,
        access: &Access<'_>,
        filter: TeamFilter,
        page: PageParam,
    ) -> Result<Paginated<Team>, AppError> {
        let scope = access.authorize_list(Resource::Team, RequestedScope::default())?;

        Ok(TeamRepository::new(self.db)
            .get_paginated(scope, filter, page)
            .await?)
    }

    /// Lists the accounts affiliated with a team.
    ///
    /// Follows account listing rules: Members are refused and Managers may only
    /// list their own team.
    pub async fn get_members(&self, access: &Access<'_>, id: i32) -> Result<Vec<Account>, AppError> {
        let team = self.require(id).await?;

        access.authorize_list(Resource::Account, RequestedScope::team(Some(team.id)))?;

        Ok(AccountRepository::new(self.db).find_by_team(team.id).await?)
    }

    /// Creates a team.
    ///
    /// A Manager founding a team becomes its manager and joins it. An
    /// Administrator may name an existing Manager without a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(AppError::BadRequest)` - Empty name or the named manager cannot lead a team
    /// - `Err(AppError::NotFound)` - The named manager does not exist
    /// - `Err(AuthError::Forbidden)` - The caller may not create this team
    pub async fn create(&self, access: &Access<'_>, param: CreateTeamParam) -> Result<Team, AppError> {
        let param = access.authorize_team_create(param)?;
        validate::non_empty("name", &param.name)?;

        let account_repo = AccountRepository::new(self.db);

        // Founding managers are checked by `authorize_team_create`.
        if let Some(manager_id) = param.manager_id.filter(|_| !access.caller().is_manager()) {
            let manager = account_repo
                .find_by_id(manager_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Manager not found".to_string()))?;

            if manager.role != Role::Manager {
                return Err(AppError::BadRequest(
                    "manager_id must reference a manager account".to_string(),
                ));
            }
            if manager.team_id.is_some() {
                return Err(AppError::BadRequest(
                    "manager already has a team".to_string(),
                ));
            }
        }

        let team = TeamRepository::new(self.db).create(param).await?;

        if let Some(manager_id) = team.manager_id {
            account_repo.set_team(manager_id, Some(team.id)).await?;
        }

        tracing::info!(
            "Account {} created team {} ({})",
            access.caller().id,
            team.id,
            team.name
        );

        Ok(team)
    }

    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        param: UpdateTeamParam,
    ) -> Result<Team, AppError> {
        let team = self.require(id).await?;

        access.authorize_update(Resource::Team, Target::Team(&team))?;

        if let Some(name) = &param.name {
            validate::non_empty("name", name)?;
        }

        let team = TeamRepository::new(self.db).update(id, param).await?;

        tracing::info!("Account {} updated team {}", access.caller().id, id);

        Ok(team)
    }

    /// Deletes a team. Its events go with it and its accounts lose their team.
    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let team = self.require(id).await?;

        access.authorize_delete(Resource::Team, Target::Team(&team))?;

        TeamRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted team {}", access.caller().id, id);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }
}
