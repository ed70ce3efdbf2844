use super::*;

/// Expected: Ok(false) on an empty table
#[tokio::test]
async fn returns_false_when_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).any_exists().await?;

    assert!(!result);

    Ok(())
}

/// Expected: Ok(true) once a user exists
#[tokio::test]
async fn returns_true_when_user_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let result = UserRepository::new(db).any_exists().await?;

    assert!(result);

    Ok(())
}
