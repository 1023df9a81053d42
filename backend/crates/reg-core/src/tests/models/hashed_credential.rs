use crate::HashedCredential;

#[test]
fn test_debug_output_is_redacted() {
    let credential = HashedCredential::from_phc("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA");

    let debug = format!("{:?}", credential);

    assert!(!debug.contains("argon2id"));
    assert!(debug.contains("redacted"));
}

#[test]
fn test_as_str_returns_phc_string() {
    let credential = HashedCredential::from_phc("$argon2id$abc");

    assert_eq!(credential.as_str(), "$argon2id$abc");
}
