pub mod error;
pub mod models;
pub mod query;


pub use error::{CoreError, Result};
pub use models::hashed_credential::HashedCredential;
pub use models::new_user::{NewUser, normalize_identity};
pub use models::record_id::RecordId;
pub use models::registered_user::RegisteredUser;
pub use models::user_record::UserRecord;
pub use query::user_filter::UserFilter;
pub use query::user_lookup::UserLookup;
