//! Team data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    access::scope::EffectiveScope,
    data::team_scope_condition,
    model::{
        page::{PageParam, Paginated},
        team::{CreateTeamParam, Team, TeamFilter, UpdateTeamParam},
    },
};

pub struct TeamRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The created team
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateTeamParam) -> Result<Team, DbErr> {
        let entity = entity::team::ActiveModel {
            name: ActiveValue::Set(param.name),
            category: ActiveValue::Set(param.category),
            manager_id: ActiveValue::Set(param.manager_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Team::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Finds the team managed by an account, if any.
    pub async fn find_by_manager(&self, account_id: i32) -> Result<Option<Team>, DbErr> {
        let entity = entity::prelude::Team::find()
            .filter(entity::team::Column::ManagerId.eq(account_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Team::from_entity))
    }

    /// Gets one page of teams within `scope` matching `filter`, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Paginated<Team>)` - Requested page and total count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        scope: EffectiveScope,
        filter: TeamFilter,
        page: PageParam,
    ) -> Result<Paginated<Team>, DbErr> {
        let mut query = entity::prelude::Team::find()
            .filter(team_scope_condition(scope, entity::team::Column::Id));

        if let Some(name) = filter.name {
            query = query.filter(entity::team::Column::Name.contains(&name));
        }
        if let Some(category) = filter.category {
            query = query.filter(entity::team::Column::Category.eq(category));
        }

        let paginator = query
            .order_by_asc(entity::team::Column::Name)
            .paginate(self.db, page.per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page.page).await?;
        let teams = entities.into_iter().map(Team::from_entity).collect();

        Ok(Paginated::new(teams, total, page))
    }

    /// Applies a partial update to a team.
    ///
    /// # Returns
    /// - `Ok(Team)` - The updated team
    /// - `Err(DbErr::RecordNotFound)` - No team with that id
    /// - `Err(DbErr)` - Other database error
    pub async fn update(&self, id: i32, param: UpdateTeamParam) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Team {} not found", id)))?;

        let mut active_model: entity::team::ActiveModel = team.into();

        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(category) = param.category {
            active_model.category = ActiveValue::Set(category);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Team::from_entity(entity))
    }

    /// Points a team at its manager account.
    pub async fn set_manager(&self, id: i32, manager_id: i32) -> Result<(), DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::Unchanged(id),
            manager_id: ActiveValue::Set(Some(manager_id)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Clears `manager_id` on any team managed by `account_id`.
    ///
    /// Called when an account is deleted, leaves its team or stops being a
    /// Manager, since the manager reference has no foreign key.
    pub async fn clear_manager(&self, account_id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .filter(entity::team::Column::ManagerId.eq(account_id))
            .col_expr(
                entity::team::Column::ManagerId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes a team.
    ///
    /// Events of the team are removed by cascade and its accounts lose their
    /// team affiliation.
    ///
    /// # Returns
    /// - `Ok(true)` - Team deleted
    /// - `Ok(false)` - No team with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        entity::prelude::Account::update_many()
            .filter(entity::account::Column::TeamId.eq(id))
            .col_expr(
                entity::account::Column::TeamId,
                sea_orm::sea_query::Expr::value(Option::<i32>::None),
            )
            .exec(self.db)
            .await?;

        let result = entity::prelude::Team::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
