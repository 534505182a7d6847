use super::*;

/// Tests a partial update only touches provided fields.
///
/// Expected: Ok with new phone and unchanged names
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let entity = factory::account::AccountFactory::new(db)
        .first_name("Luis")
        .last_name("Pérez")
        .build()
        .await?;

    let account = AccountRepository::new(db)
        .update(
            entity.id,
            UpdateAccountParam {
                phone: Some("611222333".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(account.phone.as_deref(), Some("611222333"));
    assert_eq!(account.first_name, "Luis");
    assert_eq!(account.last_name, "Pérez");

    Ok(())
}

/// Tests updating an account that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccountRepository::new(db)
        .update(999, UpdateAccountParam::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
