use super::*;

/// Tests creating a comment with an explicit timestamp.
///
/// Expected: Ok with every field stored as given
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, task) = factory::helpers::create_task_with_owner(db).await?;
    let created_at = Utc::now() - Duration::days(3);

    let comment = CommentRepository::new(db)
        .create(CreateCommentParams {
            created_at,
            ..params(task.id, owner.id, "First")
        })
        .await?;

    assert!(comment.id > 0);
    assert_eq!(comment.body, "First");
    assert_eq!(comment.created_at.timestamp(), created_at.timestamp());
    assert_eq!(comment.task_item_id, task.id);
    assert_eq!(comment.author_id, owner.id);

    Ok(())
}

/// Tests the task and author foreign keys.
///
/// Expected: Err for an unknown task and for an unknown author
#[tokio::test]
async fn fails_for_unknown_task_or_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, task) = factory::helpers::create_task_with_owner(db).await?;
    let repo = CommentRepository::new(db);

    assert!(repo.create(params(999, owner.id, "x")).await.is_err());
    assert!(repo.create(params(task.id, 999, "x")).await.is_err());
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests that deleting a task removes its comments.
///
/// Expected: Ok with the comment table empty afterwards
#[tokio::test]
async fn cascades_on_task_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task, _) = factory::helpers::create_comment_with_dependencies(db).await?;

    task.delete(db).await?;

    assert_eq!(entity::prelude::Comment::find().count(db).await?, 0);

    Ok(())
}

/// Tests that an author with comments cannot be deleted.
///
/// Expected: Err on delete, author row still present
#[tokio::test]
async fn restricts_author_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_owner(db).await?;
    let author = factory::create_user(db).await?;
    factory::create_comment(db, task.id, author.id).await?;

    let result = author.clone().delete(db).await;

    assert!(result.is_err());
    assert!(entity::prelude::User::find_by_id(author.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}
