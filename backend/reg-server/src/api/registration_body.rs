//! Accepts the registration body as JSON or as an HTML form post.

use crate::ApiError;

use reg_auth::RegistrationRequest;

use std::panic::Location;

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use error_location::ErrorLocation;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

pub struct RegistrationBody(pub RegistrationRequest);

impl<S> FromRequest<S> for RegistrationBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE));

        let request = if is_form {
            Form::<RegistrationRequest>::from_request(req, state)
                .await
                .map(|Form(request)| request)
                .map_err(|rejection| bad_request(rejection.body_text()))?
        } else {
            Json::<RegistrationRequest>::from_request(req, state)
                .await
                .map(|Json(request)| request)
                .map_err(|rejection| bad_request(rejection.body_text()))?
        };

        Ok(Self(request))
    }
}

#[track_caller]
fn bad_request(message: String) -> ApiError {
    ApiError::BadRequest {
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}
