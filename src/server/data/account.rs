//! Account data repository for database operations.
//!
//! This module provides the `AccountRepository` for managing account records. It handles
//! creation, lookups by id and email, scoped paginated listings, partial updates and
//! deletion, converting between entity models and domain models at the boundary.

use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::scope_condition,
    model::{
        account::{Account, AccountFilter, CreateAccountParam, UpdateAccountParam},
        page::{PageParam, Paginated},
    },
};

/// Repository providing database operations for account management.
pub struct AccountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccountRepository<'a> {
    /// Creates a new AccountRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AccountRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new account.
    ///
    /// The plain-text password in `param` is ignored; `password_hash` is stored instead.
    ///
    /// # Arguments
    /// - `param` - Account fields
    /// - `password_hash` - bcrypt hash of the account password
    ///
    /// # Returns
    /// - `Ok(Account)` - The created account
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(
        &self,
        param: CreateAccountParam,
        password_hash: String,
    ) -> Result<Account, DbErr> {
        let entity = entity::account::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(param.role),
            position: ActiveValue::Set(param.position),
            phone: ActiveValue::Set(param.phone),
            photo_url: ActiveValue::Set(param.photo_url),
            team_id: ActiveValue::Set(param.team_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Account::from_entity(entity))
    }

    /// Finds an account by id.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Finds an account by its login email.
    ///
    /// # Returns
    /// - `Ok(Some(Account))` - Account found
    /// - `Ok(None)` - No account with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DbErr> {
        let entity = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(Account::from_entity))
    }

    /// Checks whether an email is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any administrator accounts exist.
    ///
    /// Used at startup to decide whether the configured bootstrap administrator
    /// must be created.
    pub async fn administrator_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Account::find()
            .filter(entity::account::Column::Role.eq(Role::Administrator))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets all accounts affiliated with a team, ordered by name.
    pub async fn find_by_team(&self, team_id: i32) -> Result<Vec<Account>, DbErr> {
        let entities = entity::prelude::Account::find()
            .filter(entity::account::Column::TeamId.eq(team_id))
            .order_by_asc(entity::account::Column::LastName)
            .order_by_asc(entity::account::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    /// Gets one page of accounts within `scope` matching `filter`.
    ///
    /// Accounts are ordered by last name, then first name. The total counts only
    /// accounts inside the scope.
    ///
    /// # Arguments
    /// - `scope` - Effective scope for the caller
    /// - `filter` - Optional filters, combined with AND
    /// - `page` - Page to fetch
    ///
    /// # Returns
    /// - `Ok(Paginated<Account>)` - Requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        scope: EffectiveScope,
        filter: AccountFilter,
        page: PageParam,
    ) -> Result<Paginated<Account>, DbErr> {
        let mut query = entity::prelude::Account::find().filter(scope_condition(
            scope,
            entity::account::Column::TeamId,
            entity::account::Column::Id,
        ));

        if let Some(team_id) = filter.team_id {
            query = query.filter(entity::account::Column::TeamId.eq(team_id));
        }
        if let Some(role) = filter.role {
            query = query.filter(entity::account::Column::Role.eq(role));
        }
        if let Some(last_name) = filter.last_name {
            query = query.filter(entity::account::Column::LastName.contains(&last_name));
        }
        if let Some(position) = filter.position {
            query = query.filter(entity::account::Column::Position.eq(position));
        }
        if let Some(email) = filter.email {
            query = query.filter(entity::account::Column::Email.eq(email));
        }

        let paginator = query
            .order_by_asc(entity::account::Column::LastName)
            .order_by_asc(entity::account::Column::FirstName)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;
        let accounts = entities.into_iter().map(Account::from_entity).collect();

        Ok(Paginated::new(accounts, total, page))
    }

    /// Applies a partial update to an account.
    ///
    /// # Returns
    /// - `Ok(Account)` - The updated account
    /// - `Err(DbErr::RecordNotFound)` - No account with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, param: UpdateAccountParam) -> Result<Account, DbErr> {
        let account = entity::prelude::Account::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Account {} not found", id)))?;

        let mut active_model: entity::account::ActiveModel = account.into();

        if let Some(first_name) = param.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = param.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = param.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(role) = param.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(position) = param.position {
            active_model.position = ActiveValue::Set(Some(position));
        }
        if let Some(phone) = param.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(photo_url) = param.photo_url {
            active_model.photo_url = ActiveValue::Set(Some(photo_url));
        }
        if param.clear_team {
            active_model.team_id = ActiveValue::Set(None);
        } else if let Some(team_id) = param.team_id {
            active_model.team_id = ActiveValue::Set(Some(team_id));
        }

        let entity = active_model.update(self.db).await?;

        Ok(Account::from_entity(entity))
    }

    /// Replaces the stored password hash.
    pub async fn update_password(&self, id: i32, password_hash: String) -> Result<(), DbErr> {
        entity::account::ActiveModel {
            id: ActiveValue::Unchanged(id),
            password: ActiveValue::Set(password_hash),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Sets or clears the team affiliation of an account.
    pub async fn set_team(&self, id: i32, team_id: Option<i32>) -> Result<(), DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::Id.eq(id))
            .col_expr(
                entity::account::Column::TeamId,
                sea_orm::sea_query::Expr::value(team_id),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes an account.
    ///
    /// Dues, call-ups, availability and statistics of the account are removed by
    /// cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Account deleted
    /// - `Ok(false)` - No account with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Account::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
