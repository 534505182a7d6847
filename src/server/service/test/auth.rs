use super::*;

use entity::sea_orm_active_enums::Role;

use crate::server::{
    config::BootstrapAdmin,
    middleware::token::TokenKeys,
    model::auth::{LoginParam, RegisterParam},
    service::auth::{bootstrap_administrator, AuthService},
};

fn keys() -> TokenKeys {
    TokenKeys::new("test-secret", 1)
}

/// Tests logging in with the factory password.
///
/// Expected: Ok with a token that verifies to the account's email
#[tokio::test]
async fn login_issues_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let keys = keys();

    let issued = AuthService::new(db, &keys)
        .login(LoginParam {
            email: account.email.clone(),
            password: factory::account::DEFAULT_PASSWORD.to_string(),
        })
        .await?;

    assert_eq!(issued.account.id, account.id);
    assert_eq!(keys.verify(&issued.token)?.sub, account.email);

    Ok(())
}

/// Tests logging in with a wrong password or unknown email.
///
/// Expected: Err(AuthError::InvalidCredentials) in both cases
#[tokio::test]
async fn login_rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = factory::create_account(db).await?;
    let keys = keys();
    let service = AuthService::new(db, &keys);

    for (email, password) in [
        (account.email.as_str(), "not-the-password"),
        ("ghost@club.test", factory::account::DEFAULT_PASSWORD),
    ] {
        let result = service
            .login(LoginParam {
                email: email.to_string(),
                password: password.to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));
    }

    Ok(())
}

/// Tests self-registration.
///
/// Verifies that the new account is a team-less member and a second
/// registration with the same email is refused.
///
/// Expected: Ok(Member without team), then Err(Conflict)
#[tokio::test]
async fn register_creates_teamless_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keys = keys();
    let service = AuthService::new(db, &keys);
    let param = RegisterParam {
        first_name: "Iker".to_string(),
        last_name: "Sanz".to_string(),
        email: "iker@club.test".to_string(),
        password: "secret-password".to_string(),
        position: None,
        phone: Some("600111222".to_string()),
    };

    let issued = service.register(param.clone()).await?;
    assert_eq!(issued.account.role, Role::Member);
    assert!(issued.account.team_id.is_none());

    let result = service.register(param).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests registration with a short password.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn register_rejects_short_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keys = keys();
    let result = AuthService::new(db, &keys)
        .register(RegisterParam {
            first_name: "Iker".to_string(),
            last_name: "Sanz".to_string(),
            email: "iker@club.test".to_string(),
            password: "123".to_string(),
            position: None,
            phone: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests the startup administrator bootstrap.
///
/// Verifies that the administrator is created once and a second run does
/// nothing.
///
/// Expected: Ok(Some(admin)) then Ok(None)
#[tokio::test]
async fn bootstraps_administrator_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = BootstrapAdmin {
        email: "admin@club.test".to_string(),
        password: "admin-password".to_string(),
    };

    let created = bootstrap_administrator(db, &admin).await?;
    let created = created.expect("administrator should be created");
    assert_eq!(created.role, Role::Administrator);
    assert!(created.team_id.is_none());

    assert!(bootstrap_administrator(db, &admin).await?.is_none());

    Ok(())
}
