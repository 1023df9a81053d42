use crate::{HashedCredential, NewUser};

fn credential() -> HashedCredential {
    HashedCredential::from_phc("$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA")
}

#[test]
fn test_new_user_lower_cases_identity() {
    let candidate = NewUser::new("Signup@Example.COM", credential());

    assert_eq!(candidate.identity(), "signup@example.com");
}

#[test]
fn test_differently_cased_identities_normalize_to_the_same_candidate() {
    let first = NewUser::new("Signup@Example.com", credential());
    let second = NewUser::new("signup@example.com", credential());

    assert_eq!(first, second);
}

#[test]
fn test_into_parts_returns_identity_and_credential() {
    let (identity, hashed) = NewUser::new("parts@example.com", credential()).into_parts();

    assert_eq!(identity, "parts@example.com");
    assert_eq!(hashed, credential());
}
