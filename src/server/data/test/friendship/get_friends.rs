use super::*;

/// Tests that friends come from the user's outgoing rows only.
///
/// Expected: Ok with friends in id order, excluding unrelated users
#[tokio::test]
async fn returns_friends_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let carol = factory::create_user(db).await?;
    let dave = factory::create_user(db).await?;

    factory::create_mutual_friendship(db, alice.id, carol.id).await?;
    factory::create_mutual_friendship(db, bob.id, alice.id).await?;
    factory::create_mutual_friendship(db, carol.id, dave.id).await?;

    let friends = FriendshipRepository::new(db).get_friends(alice.id).await?;

    let ids: Vec<i32> = friends.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![bob.id, carol.id]);

    Ok(())
}

/// Tests that a one-directional edge only counts for its source user.
///
/// Expected: Ok with the friend on the source side, empty on the target side
#[tokio::test]
async fn follows_edge_direction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    factory::friendship::create_edge(db, alice.id, bob.id, Utc::now()).await?;

    let repo = FriendshipRepository::new(db);

    assert_eq!(repo.get_friends(alice.id).await?.len(), 1);
    assert!(repo.get_friends(bob.id).await?.is_empty());

    Ok(())
}

/// Expected: Ok(empty) for a user without friends and for an unknown id
#[tokio::test]
async fn returns_empty_without_friends() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let loner = factory::create_user(db).await?;
    let repo = FriendshipRepository::new(db);

    assert!(repo.get_friends(loner.id).await?.is_empty());
    assert!(repo.get_friends(999).await?.is_empty());

    Ok(())
}
