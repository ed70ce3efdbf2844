use super::*;

/// Tests creating a new user.
///
/// Expected: Ok with an assigned id and the given username
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
        })
        .await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "alice");

    Ok(())
}

/// Tests that usernames are unique.
///
/// Expected: Err on the second insert of the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "alice".to_string(),
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "alice".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
