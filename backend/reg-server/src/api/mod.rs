pub mod error;
pub mod register;
pub mod register_response;
pub mod registration_body;
