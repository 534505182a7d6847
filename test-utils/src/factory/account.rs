//! Account factory for creating test account entities.
//!
//! Accounts default to the Member role with no team. Passwords are hashed
//! with a low bcrypt cost to keep tests fast while still verifying with
//! `bcrypt::verify`.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::{Position, Role};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain-text password given to every factory-built account.
pub const DEFAULT_PASSWORD: &str = "secret-password";

const TEST_BCRYPT_COST: u32 = 4;

/// Factory for creating test accounts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::account::AccountFactory;
///
/// let manager = AccountFactory::new(&db)
///     .email("coach@club.test")
///     .manager()
///     .team(team.id)
///     .build()
///     .await?;
/// ```
pub struct AccountFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email: String,
    password: String,
    role: Role,
    position: Option<Position>,
    team_id: Option<i32>,
}

impl<'a> AccountFactory<'a> {
    /// Creates a new AccountFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"Player"`, last_name: `"Number {id}"`
    /// - email: `"account{id}@club.test"`
    /// - password: `DEFAULT_PASSWORD`
    /// - role: `Member`, no position, no team
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: "Player".to_string(),
            last_name: format!("Number {}", id),
            email: format!("account{}@club.test", id),
            password: DEFAULT_PASSWORD.to_string(),
            role: Role::Member,
            position: None,
            team_id: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Shorthand for `.role(Role::Manager)`.
    pub fn manager(self) -> Self {
        self.role(Role::Manager)
    }

    /// Shorthand for `.role(Role::Administrator)`.
    pub fn administrator(self) -> Self {
        self.role(Role::Administrator)
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn team(mut self, team_id: i32) -> Self {
        self.team_id = Some(team_id);
        self
    }

    /// Builds and inserts the account entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::account::Model)` - Created account entity
    /// - `Err(DbErr)` - Database error during insert, or the password could not be hashed
    pub async fn build(self) -> Result<entity::account::Model, DbErr> {
        let password = bcrypt::hash(&self.password, TEST_BCRYPT_COST)
            .map_err(|e| DbErr::Custom(e.to_string()))?;

        entity::account::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(password),
            role: ActiveValue::Set(self.role),
            position: ActiveValue::Set(self.position),
            phone: ActiveValue::Set(None),
            photo_url: ActiveValue::Set(None),
            team_id: ActiveValue::Set(self.team_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a team-less Member with default values.
///
/// Shorthand for `AccountFactory::new(db).build().await`.
pub async fn create_account(db: &DatabaseConnection) -> Result<entity::account::Model, DbErr> {
    AccountFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_member_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let account = create_account(db).await?;

        assert_eq!(account.role, Role::Member);
        assert!(account.team_id.is_none());
        assert!(account.email.ends_with("@club.test"));
        assert!(bcrypt::verify(DEFAULT_PASSWORD, &account.password).unwrap());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_accounts() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_account(db).await?;
        let second = create_account(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.email, second.email);

        Ok(())
    }

    #[tokio::test]
    async fn creates_manager_on_team() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_account_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let team = crate::factory::team::create_team(db).await?;
        let manager = AccountFactory::new(db)
            .manager()
            .team(team.id)
            .build()
            .await?;

        assert_eq!(manager.role, Role::Manager);
        assert_eq!(manager.team_id, Some(team.id));

        Ok(())
    }
}
