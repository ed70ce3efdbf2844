use super::*;

/// Tests that each user is returned with only the tasks they own.
///
/// Expected: Ok with users in id order, tasks grouped per owner
#[tokio::test]
async fn groups_tasks_by_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;

    let a1 = factory::create_task(db, alice.id).await?;
    let b1 = factory::create_task(db, bob.id).await?;
    let a2 = factory::create_task(db, alice.id).await?;

    let users = UserRepository::new(db).get_all_with_tasks().await?;

    assert_eq!(users.len(), 3);

    assert_eq!(users[0].user.id, alice.id);
    let alice_tasks: Vec<i32> = users[0].tasks.iter().map(|t| t.id).collect();
    assert_eq!(alice_tasks, vec![a1.id, a2.id]);

    assert_eq!(users[1].user.id, bob.id);
    assert_eq!(users[1].tasks.len(), 1);
    assert_eq!(users[1].tasks[0].id, b1.id);

    assert_eq!(users[2].user.id, carol.id);
    assert!(users[2].tasks.is_empty());

    Ok(())
}

/// Expected: Ok(empty) when there are no users
#[tokio::test]
async fn returns_empty_without_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = UserRepository::new(db).get_all_with_tasks().await?;

    assert!(users.is_empty());

    Ok(())
}
