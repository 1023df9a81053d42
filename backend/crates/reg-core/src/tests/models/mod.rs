mod hashed_credential;
mod new_user;
mod record_id;
mod registered_user;
