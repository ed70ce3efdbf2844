use super::*;

/// Tests loading a user's tasks and the comments on each task.
///
/// Comments written by other users on the owner's tasks are included; comments the
/// owner wrote on someone else's task are not.
///
/// Expected: Ok(Some) with the ownership tree
#[tokio::test]
async fn loads_tasks_and_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let task1 = factory::create_task(db, owner.id).await?;
    let task2 = factory::create_task(db, owner.id).await?;
    let foreign_task = factory::create_task(db, other.id).await?;

    let c1 = factory::create_comment(db, task1.id, other.id).await?;
    let c2 = factory::create_comment(db, task1.id, owner.id).await?;
    factory::create_comment(db, foreign_task.id, owner.id).await?;

    let detail = UserRepository::new(db)
        .get_detail_by_id(owner.id)
        .await?
        .unwrap();

    assert_eq!(detail.user.id, owner.id);
    assert_eq!(detail.tasks.len(), 2);

    assert_eq!(detail.tasks[0].task.id, task1.id);
    let comment_ids: Vec<i32> = detail.tasks[0].comments.iter().map(|c| c.id).collect();
    assert_eq!(comment_ids, vec![c1.id, c2.id]);

    assert_eq!(detail.tasks[1].task.id, task2.id);
    assert!(detail.tasks[1].comments.is_empty());

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let detail = UserRepository::new(db).get_detail_by_id(999).await?;

    assert!(detail.is_none());

    Ok(())
}

/// Expected: Ok(Some) with an empty task list
#[tokio::test]
async fn returns_user_without_tasks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let detail = UserRepository::new(db)
        .get_detail_by_id(user.id)
        .await?
        .unwrap();

    assert_eq!(detail.user.username, user.username);
    assert!(detail.tasks.is_empty());

    Ok(())
}
