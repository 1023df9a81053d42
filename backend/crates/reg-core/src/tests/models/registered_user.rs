use crate::{HashedCredential, RecordId, UserRecord};

use chrono::Utc;

fn sample_record() -> UserRecord {
    UserRecord {
        id: RecordId::generate(),
        identity: "user@example.com".to_string(),
        credential: HashedCredential::from_phc("$argon2id$secret-digest"),
        created_at: Utc::now(),
    }
}

#[test]
fn test_sanitize_keeps_id_username_and_created_at() {
    let record = sample_record();

    let user = record.sanitize();

    assert_eq!(user.id, record.id);
    assert_eq!(user.username, record.identity);
    assert_eq!(user.created_at, record.created_at);
}

#[test]
fn test_serialized_registered_user_has_no_credential() {
    let record = sample_record();

    let json = serde_json::to_value(record.sanitize()).unwrap();

    assert!(json.get("createdAt").is_some());
    assert!(json.get("username").is_some());
    assert!(json.get("password").is_none());
    assert!(!json.to_string().contains("secret-digest"));
}
