#![allow(dead_code)]

pub mod contract;
pub mod fixtures;
pub mod test_db;

pub use fixtures::{candidate, fake_credential};
pub use test_db::{create_test_pool, create_test_store};
