use super::*;

/// Tests a batch larger than one INSERT chunk.
///
/// Expected: Ok with every row inserted
#[tokio::test]
async fn inserts_across_chunks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, task) = factory::helpers::create_task_with_owner(db).await?;
    let batch: Vec<_> = (0..450)
        .map(|i| params(task.id, owner.id, &format!("Comment {}", i)))
        .collect();

    let inserted = CommentRepository::new(db).create_many(batch).await?;

    assert_eq!(inserted, 450);
    assert_eq!(entity::prelude::Comment::find().count(db).await?, 450);

    Ok(())
}

/// Expected: Ok(0) and no query error for an empty batch
#[tokio::test]
async fn accepts_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inserted = CommentRepository::new(db).create_many(Vec::new()).await?;

    assert_eq!(inserted, 0);

    Ok(())
}
