use reg_core::RegisteredUser;

use serde::Serialize;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// 201 body for a completed registration
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user: RegisteredUser,
}

impl From<RegisteredUser> for RegisterResponse {
    fn from(user: RegisteredUser) -> Self {
        Self {
            success: true,
            message: REGISTERED_MESSAGE.to_string(),
            user,
        }
    }
}
