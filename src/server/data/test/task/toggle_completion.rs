use super::*;

/// Tests flipping the flag and persisting it.
///
/// Expected: Ok(Some) with the flag inverted in the response and the row
#[tokio::test]
async fn flips_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, task) = factory::helpers::create_task_with_owner(db).await?;
    assert!(!task.is_completed);

    let toggled = TaskRepository::new(db)
        .toggle_completion(task.id)
        .await?
        .unwrap();

    assert!(toggled.is_completed);

    let stored = entity::prelude::TaskItem::find_by_id(task.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_completed);

    Ok(())
}

/// Tests that toggling twice restores the original value.
///
/// Expected: Ok with the flag back to its starting value
#[tokio::test]
async fn toggling_twice_restores_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let task = factory::task_item::TaskItemFactory::new(db, owner.id)
        .completed(true)
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    repo.toggle_completion(task.id).await?;
    let restored = repo.toggle_completion(task.id).await?.unwrap();

    assert!(restored.is_completed);
    assert_eq!(restored.title, task.title);

    Ok(())
}

/// Expected: Ok(None) for an unknown id
#[tokio::test]
async fn returns_none_for_unknown_task() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_task_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TaskRepository::new(db).toggle_completion(999).await?;

    assert!(result.is_none());

    Ok(())
}
