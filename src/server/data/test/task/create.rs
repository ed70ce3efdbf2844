use super::*;

/// Tests creating a task for an existing user.
///
/// Expected: Ok with the stored fields
#[tokio::test]
async fn creates_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let task = TaskRepository::new(db)
        .create(CreateTaskParams {
            title: "Write docs".to_string(),
            is_completed: true,
            user_id: owner.id,
        })
        .await?;

    assert!(task.id > 0);
    assert_eq!(task.title, "Write docs");
    assert!(task.is_completed);
    assert_eq!(task.user_id, owner.id);

    Ok(())
}

/// Tests the owner foreign key.
///
/// Expected: Err and no row inserted
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TaskRepository::new(db)
        .create(CreateTaskParams {
            title: "Orphan".to_string(),
            is_completed: false,
            user_id: 999,
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::TaskItem::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting the owner removes their tasks.
///
/// Expected: Ok with the task table empty afterwards
#[tokio::test]
async fn cascades_on_owner_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_task(db, owner.id).await?;
    factory::create_task(db, owner.id).await?;

    owner.delete(db).await?;

    assert_eq!(entity::prelude::TaskItem::find().count(db).await?, 0);

    Ok(())
}
