//! Login, registration and administrator bootstrap.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::BootstrapAdmin,
    data::account::AccountRepository,
    error::{auth::AuthError, AppError},
    middleware::token::TokenKeys,
    model::{
        account::{Account, CreateAccountParam},
        auth::{IssuedToken, LoginParam, RegisterParam},
    },
    util::validate,
};

use entity::sea_orm_active_enums::Role;

/// Service issuing access tokens for email and password credentials.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenKeys) -> Self {
        Self { db, tokens }
    }

    /// Verifies credentials and issues a token.
    ///
    /// An unknown email and a wrong password fail the same way so the response
    /// does not reveal which emails are registered.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token and the logged in account
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AppError)` - Database, hashing or signing failure
    pub async fn login(&self, param: LoginParam) -> Result<IssuedToken, AppError> {
        let Some(account) = AccountRepository::new(self.db)
            .find_by_email(&param.email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(&param.password, &account.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("Account {} logged in", account.id);

        self.issue(account)
    }

    /// Registers a team-less Member and issues a token for it.
    ///
    /// # Returns
    /// - `Ok(IssuedToken)` - Token and the new account
    /// - `Err(AppError::BadRequest)` - Invalid field
    /// - `Err(AppError::Conflict)` - Email already registered
    pub async fn register(&self, param: RegisterParam) -> Result<IssuedToken, AppError> {
        let param = param.into_create_param();
        validate_new_account(&param)?;

        let account = create_account(self.db, param).await?;

        tracing::info!("Registered account {} as member", account.id);

        self.issue(account)
    }

    fn issue(&self, account: Account) -> Result<IssuedToken, AppError> {
        let token = self.tokens.issue(&account)?;

        Ok(IssuedToken { token, account })
    }
}

/// Creates the configured administrator unless an administrator already exists.
///
/// # Returns
/// - `Ok(Some(Account))` - Administrator created
/// - `Ok(None)` - An administrator already existed
/// - `Err(AppError)` - Invalid credentials, duplicate email or database failure
pub async fn bootstrap_administrator(
    db: &DatabaseConnection,
    admin: &BootstrapAdmin,
) -> Result<Option<Account>, AppError> {
    if AccountRepository::new(db).administrator_exists().await? {
        return Ok(None);
    }

    let param = CreateAccountParam {
        first_name: "Club".to_string(),
        last_name: "Administrator".to_string(),
        email: admin.email.clone(),
        password: admin.password.clone(),
        role: Role::Administrator,
        position: None,
        phone: None,
        photo_url: None,
        team_id: None,
    };
    validate_new_account(&param)?;

    Ok(Some(create_account(db, param).await?))
}

/// Validates the fields every new account must satisfy.
pub(super) fn validate_new_account(param: &CreateAccountParam) -> Result<(), AppError> {
    validate::non_empty("first_name", &param.first_name)?;
    validate::non_empty("last_name", &param.last_name)?;
    validate::email(&param.email)?;
    validate::password(&param.password)?;
    if let Some(phone) = &param.phone {
        validate::phone(phone)?;
    }

    Ok(())
}

/// Hashes the password and inserts the account, rejecting duplicate emails.
pub(super) async fn create_account(
    db: &DatabaseConnection,
    param: CreateAccountParam,
) -> Result<Account, AppError> {
    let repo = AccountRepository::new(db);

    if repo.email_exists(&param.email).await? {
        return Err(AppError::Conflict(format!(
            "Email {} is already registered",
            param.email
        )));
    }

    let password_hash = bcrypt::hash(&param.password, bcrypt::DEFAULT_COST)?;

    Ok(repo.create(param, password_hash).await?)
}
