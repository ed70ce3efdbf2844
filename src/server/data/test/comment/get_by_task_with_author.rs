use super::*;

/// Tests that only the task's comments are returned, each with its author.
///
/// Expected: Ok with comments in id order
#[tokio::test]
async fn returns_task_comments_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, task) = factory::helpers::create_task_with_owner(db).await?;
    let other_task = factory::create_task(db, owner.id).await?;
    let commenter = factory::create_user(db).await?;

    let c1 = factory::create_comment(db, task.id, commenter.id).await?;
    let c2 = factory::create_comment(db, task.id, owner.id).await?;
    factory::create_comment(db, other_task.id, commenter.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_task_with_author(task.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].comment.id, c1.id);
    assert_eq!(comments[0].author.id, commenter.id);
    assert_eq!(comments[0].author.username, commenter.username);
    assert_eq!(comments[1].comment.id, c2.id);
    assert_eq!(comments[1].author.id, owner.id);

    Ok(())
}

/// Expected: Ok(empty) for an unknown task
#[tokio::test]
async fn returns_empty_for_unknown_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let comments = CommentRepository::new(db).get_by_task_with_author(999).await?;

    assert!(comments.is_empty());

    Ok(())
}
