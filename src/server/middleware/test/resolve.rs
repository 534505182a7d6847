use super::*;

use entity::sea_orm_active_enums::Role;

use crate::server::data::account::AccountRepository;

/// Tests resolving a request with a valid token.
///
/// Verifies that the caller is read from storage rather than from the token,
/// so a role change after issuing takes effect immediately.
///
/// Expected: Ok(Account) carrying the stored role
#[tokio::test]
async fn resolves_stored_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_account(db).await?;
    let keys = keys();
    let token = keys.issue(&Account::from_entity(entity.clone()))?;

    AccountRepository::new(db)
        .update(
            entity.id,
            crate::server::model::account::UpdateAccountParam {
                role: Some(Role::Manager),
                ..Default::default()
            },
        )
        .await?;

    let headers = bearer(&token);
    let caller = AuthGuard::new(db, &keys, &headers).resolve().await?;

    assert_eq!(caller.id, entity.id);
    assert_eq!(caller.role, Role::Manager);

    Ok(())
}

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::Unauthenticated)
#[tokio::test]
async fn missing_header_is_unauthenticated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keys = keys();
    let headers = HeaderMap::new();
    let result = AuthGuard::new(db, &keys, &headers).resolve().await;

    assert!(is_unauthenticated(&result));

    Ok(())
}

/// Tests Authorization headers that do not carry a bearer token.
///
/// Expected: Err(AuthError::Unauthenticated) for each header
#[tokio::test]
async fn non_bearer_header_is_unauthenticated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let keys = keys();
    for value in ["Basic dXNlcjpwYXNz", "Bearer ", "Bearer    ", "token"] {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static(value));

        let result = AuthGuard::new(db, &keys, &headers).resolve().await;

        assert!(is_unauthenticated(&result), "header {:?}", value);
    }

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::Unauthenticated)
#[tokio::test]
async fn foreign_signature_is_unauthenticated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = Account::from_entity(factory::create_account(db).await?);
    let token = TokenKeys::new("some-other-secret", 1).issue(&account)?;

    let keys = keys();
    let headers = bearer(&token);
    let result = AuthGuard::new(db, &keys, &headers).resolve().await;

    assert!(is_unauthenticated(&result));

    Ok(())
}

/// Tests a valid token whose account was deleted afterwards.
///
/// Expected: Err(AuthError::IdentityNotFound) naming the email
#[tokio::test]
async fn deleted_account_is_identity_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_account_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let account = Account::from_entity(factory::create_account(db).await?);
    let keys = keys();
    let token = keys.issue(&account)?;

    AccountRepository::new(db).delete(account.id).await?;

    let headers = bearer(&token);
    let result = AuthGuard::new(db, &keys, &headers).resolve().await;

    match result {
        Err(AppError::AuthErr(AuthError::IdentityNotFound(email))) => {
            assert_eq!(email, account.email)
        }
        other => panic!("expected IdentityNotFound, got {:?}", other),
    }

    Ok(())
}
