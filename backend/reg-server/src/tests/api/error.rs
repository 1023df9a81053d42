use crate::ApiError;
use crate::api::error::{INTERNAL_ERROR_MESSAGE, USER_EXISTS_MESSAGE, WEAK_PASSWORD_MESSAGE};

use reg_auth::RegistrationError;
use reg_db::StoreError;

use std::cell::Cell;
use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

thread_local! {
    static ERROR_RECORDS: Cell<usize> = const { Cell::new(0) };
}

/// Counts error-level records emitted on the current thread.
struct ErrorCounter;

impl log::Log for ErrorCounter {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if record.level() == log::Level::Error {
            ERROR_RECORDS.with(|count| count.set(count.get() + 1));
        }
    }

    fn flush(&self) {}
}

static ERROR_COUNTER: ErrorCounter = ErrorCounter;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_code_and_field() {
    let error = ApiError::Validation {
        code: "INVALID_EMAIL",
        message: "Please enter a valid email address".into(),
        field: Some("username".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "INVALID_EMAIL");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let error = ApiError::Conflict {
        message: USER_EXISTS_MESSAGE.into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "USER_EXISTS");
    assert_eq!(json["error"]["message"], USER_EXISTS_MESSAGE);
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: INTERNAL_ERROR_MESSAGE.into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_weak_credential_maps_to_weak_password() {
    let error = ApiError::from(RegistrationError::weak_credential());

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "WEAK_PASSWORD");
    assert_eq!(json["error"]["message"], WEAK_PASSWORD_MESSAGE);
    assert_eq!(json["error"]["field"], "password");
}

#[tokio::test]
async fn test_missing_field_names_the_field() {
    let error = ApiError::from(RegistrationError::missing_field("username"));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "MISSING_FIELD");
    assert_eq!(json["error"]["field"], "username");
}

#[tokio::test]
async fn test_duplicate_identity_maps_to_conflict() {
    let error = ApiError::from(RegistrationError::duplicate_identity("a@example.com"));

    let (status, _json) = body_json(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_store_failure_hides_details() {
    let error = ApiError::from(RegistrationError::from(StoreError::corrupt(
        "/var/lib/reg/db.json is not a valid user store",
    )));

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["message"], INTERNAL_ERROR_MESSAGE);
    assert!(!json.to_string().contains("/var/lib/reg"));
}

#[test]
fn test_internal_failure_is_not_logged_again_on_the_response_path() {
    let _ = log::set_logger(&ERROR_COUNTER);
    log::set_max_level(log::LevelFilter::Trace);
    let before = ERROR_RECORDS.with(Cell::get);

    let response =
        ApiError::from(RegistrationError::from(StoreError::unavailable("pool closed")))
            .into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ERROR_RECORDS.with(Cell::get), before);
}
