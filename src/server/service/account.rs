//! Account service for business logic.
//!
//! This module provides the `AccountService` for account management. Every operation
//! takes the caller's `Access` and authorizes against the loaded target before
//! changing anything.

use entity::sea_orm_active_enums::Role;
use sea_orm::DatabaseConnection;

use crate::server::{
    access::{
        ownership::Target,
        scope::RequestedScope,
        table::Resource,
        Access,
    },
    data::{account::AccountRepository, team::TeamRepository},
    error::AppError,
    model::{
        account::{Account, AccountFilter, CreateAccountParam, UpdateAccountParam},
        page::{PageParam, Paginated},
        team::Team,
    },
    service::auth::{create_account, validate_new_account},
    util::validate,
};

pub struct AccountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an account the caller may see.
    ///
    /// # Returns
    /// - `Ok(Account)` - The account
    /// - `Err(AppError::NotFound)` - No such account
    /// - `Err(AuthError::Forbidden)` - The caller may not see it
    pub async fn get_by_id(&self, access: &Access<'_>, id: i32) -> Result<Account, AppError> {
        let account = self.require(id).await?;

        access.authorize_read(Resource::Account, Target::Account(&account))?;

        Ok(account)
    }

    /// Lists accounts visible to the caller.
    ///
    /// The `team_id` filter is passed through the scope filter, so a Manager asking
    /// for another team is refused rather than given an empty page.
    pub async fn get_paginated(
        &self,
        access: &Access<'_>,
        filter: AccountFilter,
        page: PageParam,
    ) -> Result<Paginated<Account>, AppError> {
        let scope =
            access.authorize_list(Resource::Account, RequestedScope::team(filter.team_id))?;

        Ok(AccountRepository::new(self.db)
            .get_paginated(scope, filter, page)
            .await?)
    }

    /// Creates an account on behalf of a Manager or Administrator.
    ///
    /// Accounts created by a Manager are always Members of the Manager's team,
    /// whatever the payload says. A Manager created with a team becomes that
    /// team's manager.
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(AppError::BadRequest)` - Invalid field, or the team already has a manager
    /// - `Err(AppError::NotFound)` - The requested team does not exist
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AuthError::Forbidden)` - The caller may not create accounts
    pub async fn create(
        &self,
        access: &Access<'_>,
        param: CreateAccountParam,
    ) -> Result<Account, AppError> {
        let param = access.authorize_account_create(param)?;
        validate_new_account(&param)?;

        let managed_team = match param.team_id {
            Some(team_id) if param.role == Role::Manager => {
                Some(self.require_unmanaged_team(team_id, None).await?.id)
            }
            Some(team_id) => {
                self.require_team(team_id).await?;
                None
            }
            None => None,
        };

        let account = create_account(self.db, param).await?;

        if let Some(team_id) = managed_team {
            TeamRepository::new(self.db)
                .set_manager(team_id, account.id)
                .await?;
        }

        tracing::info!(
            "Account {} created account {} with role {}",
            access.caller().id,
            account.id,
            account.role.as_str()
        );

        Ok(account)
    }

    /// Applies a partial update to an account.
    ///
    /// Members may only update themselves and Managers only accounts of their
    /// team. Role and team changes are reserved to Administrators and keep the
    /// team's manager reference in step: an account that stops managing a team
    /// releases it, and a Manager placed on a team takes it over if it is free.
    /// Administrators never keep a team.
    ///
    /// # Returns
    /// - `Ok(Account)` - The updated account
    /// - `Err(AppError::BadRequest)` - Invalid field, `team_id` combined with
    ///   `clear_team`, or the target team already has another manager
    /// - `Err(AppError::NotFound)` - Account or team does not exist
    /// - `Err(AppError::Conflict)` - Email already registered
    /// - `Err(AuthError::Forbidden)` - The caller may not make this change
    pub async fn update(
        &self,
        access: &Access<'_>,
        id: i32,
        mut param: UpdateAccountParam,
    ) -> Result<Account, AppError> {
        let account = self.require(id).await?;

        access.authorize_account_update(&account, &param)?;

        if param.clear_team && param.team_id.is_some() {
            return Err(AppError::BadRequest(
                "team_id and clear_team cannot be combined".to_string(),
            ));
        }
        if let Some(first_name) = &param.first_name {
            validate::non_empty("first_name", first_name)?;
        }
        if let Some(last_name) = &param.last_name {
            validate::non_empty("last_name", last_name)?;
        }
        if let Some(phone) = &param.phone {
            validate::phone(phone)?;
        }
        if let Some(email) = &param.email {
            validate::email(email)?;

            if *email != account.email
                && AccountRepository::new(self.db).email_exists(email).await?
            {
                return Err(AppError::Conflict(format!(
                    "Email {} is already registered",
                    email
                )));
            }
        }

        if param.resulting_role(&account) == Role::Administrator {
            param.team_id = None;
            param.clear_team = account.team_id.is_some();
        }

        let role = param.resulting_role(&account);
        let team_id = param.resulting_team(&account);
        let team_changes = team_id != account.team_id;
        let releases_team =
            account.role == Role::Manager && (role != Role::Manager || team_changes);
        let takes_team =
            role == Role::Manager && (account.role != Role::Manager || team_changes);

        let managed_team = match team_id {
            Some(team_id) if takes_team => {
                Some(self.require_unmanaged_team(team_id, Some(id)).await?.id)
            }
            Some(team_id) if team_changes => {
                self.require_team(team_id).await?;
                None
            }
            _ => None,
        };

        let updated = AccountRepository::new(self.db).update(id, param).await?;

        let team_repo = TeamRepository::new(self.db);
        if releases_team {
            team_repo.clear_manager(id).await?;
        }
        if let Some(team_id) = managed_team {
            team_repo.set_manager(team_id, id).await?;
        }

        tracing::info!("Account {} updated account {}", access.caller().id, id);

        Ok(updated)
    }

    /// Changes the caller's own password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Current password wrong or new password too short
    pub async fn change_password(
        &self,
        access: &Access<'_>,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let caller = access.caller();

        access.authorize_update(Resource::Account, Target::Account(caller))?;

        if !bcrypt::verify(current_password, &caller.password_hash)? {
            return Err(AppError::BadRequest(
                "current password is incorrect".to_string(),
            ));
        }
        validate::password(new_password)?;

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
        AccountRepository::new(self.db)
            .update_password(caller.id, password_hash)
            .await?;

        tracing::info!("Account {} changed their password", caller.id);

        Ok(())
    }

    /// Deletes an account.
    ///
    /// Managers may only delete Members of their own team. Any team managed by
    /// the deleted account is left without a manager.
    pub async fn delete(&self, access: &Access<'_>, id: i32) -> Result<(), AppError> {
        let account = self.require(id).await?;

        access.authorize_delete(Resource::Account, Target::Account(&account))?;

        TeamRepository::new(self.db).clear_manager(id).await?;
        AccountRepository::new(self.db).delete(id).await?;

        tracing::info!("Account {} deleted account {}", access.caller().id, id);

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<Account, AppError> {
        AccountRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))
    }

    async fn require_team(&self, team_id: i32) -> Result<Team, AppError> {
        TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Team not found".to_string()))
    }

    /// Loads a team that has no manager other than `account_id`.
    async fn require_unmanaged_team(
        &self,
        team_id: i32,
        account_id: Option<i32>,
    ) -> Result<Team, AppError> {
        let team = self.require_team(team_id).await?;

        match team.manager_id {
            Some(manager_id) if Some(manager_id) != account_id => Err(AppError::BadRequest(
                "team already has a manager".to_string(),
            )),
            _ => Ok(team),
        }
    }
}
