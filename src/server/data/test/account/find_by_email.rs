use super::*;

/// Tests finding an existing account by email.
///
/// Expected: Ok(Some(Account))
#[tokio::test]
async fn finds_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::account::AccountFactory::new(db)
        .email("keeper@club.test")
        .build()
        .await?;

    let account = AccountRepository::new(db)
        .find_by_email("keeper@club.test")
        .await?;

    assert!(account.is_some());
    assert_eq!(account.unwrap().id, entity.id);

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_account(db).await?;

    let account = AccountRepository::new(db)
        .find_by_email("nobody@club.test")
        .await?;

    assert!(account.is_none());

    Ok(())
}
