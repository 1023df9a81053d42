use reg_core::{HashedCredential, NewUser};

/// A PHC-shaped credential. The stores never inspect it.
pub fn fake_credential(seed: &str) -> HashedCredential {
    HashedCredential::from_phc(format!("$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ${}", seed))
}

/// Candidate with a normalized identity and a fake hashed credential
pub fn candidate(identity: &str) -> NewUser {
    NewUser::new(identity, fake_credential(identity))
}
