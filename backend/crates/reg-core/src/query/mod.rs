pub mod user_filter;
pub mod user_lookup;
