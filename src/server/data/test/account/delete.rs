use super::*;

/// Tests deleting an existing account.
///
/// Expected: Ok(true) and the account is gone
#[tokio::test]
async fn deletes_existing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::create_account(db).await?;
    let repo = AccountRepository::new(db);

    assert!(repo.delete(entity.id).await?);
    assert!(repo.find_by_id(entity.id).await?.is_none());

    Ok(())
}

/// Tests deleting an account that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_club_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!AccountRepository::new(db).delete(999).await?);

    Ok(())
}
