use super::*;

fn param(email: &str, team_id: Option<i32>) -> CreateAccountParam {
    CreateAccountParam {
        first_name: "Ana".to_string(),
        last_name: "García".to_string(),
        email: email.to_string(),
        password: "plain-text".to_string(),
        role: Role::Member,
        position: None,
        phone: Some("600111222".to_string()),
        photo_url: None,
        team_id,
    }
}

/// Tests creating an account stores the given hash.
///
/// Verifies that the plain-text password in the parameters is not stored and
/// the provided hash is used instead.
///
/// Expected: Ok with the account and its hash
#[tokio::test]
async fn stores_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let team = factory::create_team(db).await?;
    let repo = AccountRepository::new(db);

    let account = repo
        .create(param("ana@club.test", Some(team.id)), "hashed".to_string())
        .await?;

    assert_eq!(account.email, "ana@club.test");
    assert_eq!(account.password_hash, "hashed");
    assert_eq!(account.team_id, Some(team.id));
    assert_eq!(account.role, Role::Member);

    Ok(())
}

/// Tests creating two accounts with the same email.
///
/// Expected: Err(DbErr) from the unique constraint
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_account_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AccountRepository::new(db);
    repo.create(param("dup@club.test", None), "hashed".to_string())
        .await?;

    let result = repo
        .create(param("dup@club.test", None), "hashed".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
