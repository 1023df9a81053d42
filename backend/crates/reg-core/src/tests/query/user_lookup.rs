use crate::{HashedCredential, RecordId, UserLookup, UserRecord};

use chrono::Utc;

fn record(identity: &str) -> UserRecord {
    UserRecord {
        id: RecordId::generate(),
        identity: identity.to_string(),
        credential: HashedCredential::from_phc("$argon2id$x"),
        created_at: Utc::now(),
    }
}

#[test]
fn test_by_identity_normalizes_case() {
    assert_eq!(
        UserLookup::by_identity("USER@Example.COM"),
        UserLookup::Identity("user@example.com".to_string())
    );
}

#[test]
fn test_identity_lookup_matches_only_same_identity() {
    let lookup = UserLookup::by_identity("a@example.com");

    assert!(lookup.matches(&record("a@example.com")));
    assert!(!lookup.matches(&record("b@example.com")));
}

#[test]
fn test_id_lookup_matches_only_same_id() {
    let target = record("a@example.com");
    let other = record("a@example.com");

    let lookup = UserLookup::by_id(target.id.clone());

    assert!(lookup.matches(&target));
    assert!(!lookup.matches(&other));
}
