use super::*;

/// Tests that each pair is written in both directions with one timestamp.
///
/// Expected: Ok(2) with (a, b) and (b, a) sharing `since`
#[tokio::test]
async fn writes_both_directions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    let since = Utc::now();

    let inserted = FriendshipRepository::new(db)
        .create_mutual_many(&[MutualFriendshipParams {
            user_id: a.id,
            friend_id: b.id,
            since,
        }])
        .await?;

    assert_eq!(inserted, 2);

    let forward = entity::prelude::Friendship::find_by_id((a.id, b.id))
        .one(db)
        .await?
        .unwrap();
    let back = entity::prelude::Friendship::find_by_id((b.id, a.id))
        .one(db)
        .await?
        .unwrap();
    assert_eq!(forward.since, back.since);

    Ok(())
}

/// Tests a batch larger than one INSERT chunk.
///
/// Expected: Ok with two rows per pair
#[tokio::test]
async fn inserts_across_chunks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut ids = Vec::new();
    for _ in 0..20 {
        ids.push(factory::create_user(db).await?.id);
    }

    let since = Utc::now();
    let pairs: Vec<_> = ids
        .iter()
        .enumerate()
        .flat_map(|(i, &a)| {
            ids[i + 1..].iter().map(move |&b| MutualFriendshipParams {
                user_id: a,
                friend_id: b,
                since,
            })
        })
        .collect();
    assert_eq!(pairs.len(), 190);

    let inserted = FriendshipRepository::new(db)
        .create_mutual_many(&pairs)
        .await?;

    assert_eq!(inserted, 380);
    assert_eq!(entity::prelude::Friendship::find().count(db).await?, 380);

    Ok(())
}

/// Expected: Err and nothing written when a pair names the same user twice
#[tokio::test]
async fn rejects_self_friendship() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;

    let result = FriendshipRepository::new(db)
        .create_mutual_many(&[MutualFriendshipParams {
            user_id: a.id,
            friend_id: a.id,
            since: Utc::now(),
        }])
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::Friendship::find().count(db).await?, 0);

    Ok(())
}

/// Expected: Err for a pair that already exists
#[tokio::test]
async fn rejects_duplicate_pair() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_mutual_friendship(db, a.id, b.id).await?;

    let result = FriendshipRepository::new(db)
        .create_mutual_many(&[MutualFriendshipParams {
            user_id: b.id,
            friend_id: a.id,
            since: Utc::now(),
        }])
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests that deleting either user removes both directed rows.
///
/// Expected: Ok with the friendship table empty afterwards
#[tokio::test]
async fn cascades_on_user_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::create_user(db).await?;
    let b = factory::create_user(db).await?;
    factory::create_mutual_friendship(db, a.id, b.id).await?;

    b.delete(db).await?;

    assert_eq!(entity::prelude::Friendship::find().count(db).await?, 0);

    Ok(())
}
