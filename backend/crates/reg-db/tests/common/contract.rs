//! Behaviour every `RecordStore` must share, run against each backend.

use crate::common::{candidate, fake_credential};

use reg_core::{NewUser, UserFilter, UserLookup};
use reg_db::{RecordStore, StoreError};

use std::collections::HashSet;
use std::sync::Arc;

pub async fn distinct_identities_are_all_created_and_found(store: &dyn RecordStore) {
    let identities = ["alice@example.com", "bob@example.com", "carol@example.org"];

    for identity in identities {
        store.create(candidate(identity)).await.unwrap();
    }

    for identity in identities {
        let found = store
            .find_one(&UserLookup::by_identity(identity))
            .await
            .unwrap();
        assert_eq!(found.map(|r| r.identity), Some(identity.to_string()));
    }

    let all = store.find_many(&UserFilter::All).await.unwrap();
    assert_eq!(all.len(), identities.len());
}

pub async fn duplicate_identity_is_rejected_without_write(store: &dyn RecordStore) {
    store.create(candidate("dup@example.com")).await.unwrap();

    let result = store.create(candidate("DUP@Example.com")).await;

    assert!(matches!(result, Err(StoreError::DuplicateIdentity { .. })));
    let all = store.find_many(&UserFilter::All).await.unwrap();
    assert_eq!(all.len(), 1);
}

pub async fn differently_cased_candidates_share_one_record(store: &dyn RecordStore) {
    let first = NewUser::new("Casing@Example.com", fake_credential("first"));
    let second = NewUser::new("casing@example.com", fake_credential("second"));

    let created = store.create(first).await.unwrap();
    let result = store.create(second).await;

    assert_eq!(created.identity, "casing@example.com");
    assert!(matches!(result, Err(StoreError::DuplicateIdentity { .. })));
    let all = store.find_many(&UserFilter::All).await.unwrap();
    assert_eq!(all.len(), 1);
}

pub async fn created_record_round_trips(store: &dyn RecordStore) {
    let created = store.create(candidate("round@example.com")).await.unwrap();

    let by_identity = store
        .find_one(&UserLookup::by_identity("round@example.com"))
        .await
        .unwrap()
        .expect("record should be found by identity");
    let by_id = store
        .find_one(&UserLookup::by_id(created.id.clone()))
        .await
        .unwrap()
        .expect("record should be found by id");

    assert_eq!(by_identity, created);
    assert_eq!(by_id, created);
    assert!(!created.id.as_str().is_empty());
}

pub async fn missing_record_is_none_not_error(store: &dyn RecordStore) {
    let result = store
        .find_one(&UserLookup::by_identity("ghost@example.com"))
        .await
        .unwrap();
    assert!(result.is_none());

    let many = store
        .find_many(&UserFilter::Matching(UserLookup::by_identity(
            "ghost@example.com",
        )))
        .await
        .unwrap();
    assert!(many.is_empty());
}

pub async fn find_many_all_preserves_insertion_order(store: &dyn RecordStore) {
    let identities = ["z@example.com", "a@example.com", "m@example.com"];
    for identity in identities {
        store.create(candidate(identity)).await.unwrap();
    }

    let all = store.find_many(&UserFilter::All).await.unwrap();
    let order: Vec<&str> = all.iter().map(|r| r.identity.as_str()).collect();

    assert_eq!(order, identities);
}

pub async fn ids_are_unique(store: &dyn RecordStore) {
    for n in 0..25 {
        store
            .create(candidate(&format!("user{}@example.com", n)))
            .await
            .unwrap();
    }

    let all = store.find_many(&UserFilter::All).await.unwrap();
    let ids: HashSet<_> = all.iter().map(|r| r.id.clone()).collect();

    assert_eq!(ids.len(), 25);
}

pub async fn concurrent_creates_of_same_identity_exactly_one_succeeds(store: Arc<dyn RecordStore>) {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.create(candidate("race@example.com")).await })
        })
        .collect();

    let mut successes = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(StoreError::DuplicateIdentity { .. }) => duplicates += 1,
            Err(e) => panic!("unexpected store error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.find_many(&UserFilter::All).await.unwrap().len(), 1);
}

pub async fn operations_after_close_are_unavailable(store: &dyn RecordStore) {
    store.close().await.unwrap();

    let create = store.create(candidate("late@example.com")).await;
    let find = store.find_one(&UserLookup::by_identity("late@example.com")).await;

    assert!(matches!(create, Err(StoreError::Unavailable { .. })));
    assert!(matches!(find, Err(StoreError::Unavailable { .. })));
}
