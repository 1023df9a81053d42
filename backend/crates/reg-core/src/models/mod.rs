pub mod hashed_credential;
pub mod new_user;
pub mod record_id;
pub mod registered_user;
pub mod user_record;
