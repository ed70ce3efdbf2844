use super::*;

/// Tests that every task is paired with its owner.
///
/// Expected: Ok with tasks in id order
#[tokio::test]
async fn pairs_tasks_with_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let t1 = factory::create_task(db, bob.id).await?;
    let t2 = factory::create_task(db, alice.id).await?;

    let tasks = TaskRepository::new(db).get_all_with_owner().await?;

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].task.id, t1.id);
    assert_eq!(tasks[0].owner.id, bob.id);
    assert_eq!(tasks[0].owner.username, bob.username);
    assert_eq!(tasks[1].task.id, t2.id);
    assert_eq!(tasks[1].owner.id, alice.id);

    Ok(())
}

/// Expected: Ok(empty) when there are no tasks
#[tokio::test]
async fn returns_empty_without_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let tasks = TaskRepository::new(db).get_all_with_owner().await?;

    assert!(tasks.is_empty());

    Ok(())
}
