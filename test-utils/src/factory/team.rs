//! Team factory for creating test team entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::TeamCategory;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teams with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let team = TeamFactory::new(&db)
///     .name("Seniors")
///     .category(TeamCategory::Senior)
///     .build()
///     .await?;
/// ```
pub struct TeamFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: TeamCategory,
    manager_id: Option<i32>,
}

impl<'a> TeamFactory<'a> {
    /// Creates a new TeamFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Team {id}"`
    /// - category: `Senior`
    /// - manager_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Team {}", next_id()),
            category: TeamCategory::Senior,
            manager_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: TeamCategory) -> Self {
        self.category = category;
        self
    }

    pub fn manager_id(mut self, manager_id: i32) -> Self {
        self.manager_id = Some(manager_id);
        self
    }

    /// Builds and inserts the team entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::team::Model)` - Created team entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            manager_id: ActiveValue::Set(self.manager_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team with default values.
///
/// Shorthand for `TeamFactory::new(db).build().await`.
pub async fn create_team(db: &DatabaseConnection) -> Result<entity::team::Model, DbErr> {
    TeamFactory::new(db).build().await
}
