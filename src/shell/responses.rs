// Maps service outcomes onto HTTP responses.
//
// A failure body is the plain text message so the console client can show it
// as is.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::core::outcome::Outcome;

pub fn respond<T: Serialize>(
    outcome: Outcome<T>,
    success: StatusCode,
    failure: StatusCode,
) -> Response {
    match outcome {
        Outcome::Success(value) => (success, Json(value)).into_response(),
        Outcome::Failure(message) => (failure, message).into_response(),
    }
}

/// 201 with a `Location` pointing at the new resource.
pub fn created<T: Serialize>(outcome: Outcome<T>, location: impl FnOnce(&T) -> String) -> Response {
    match outcome {
        Outcome::Success(value) => {
            let headers = [(header::LOCATION, location(&value))];
            (StatusCode::CREATED, headers, Json(value)).into_response()
        }
        Outcome::Failure(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    }
}

pub fn no_content(outcome: Outcome) -> Response {
    match outcome {
        Outcome::Success(()) => StatusCode::NO_CONTENT.into_response(),
        Outcome::Failure(message) => (StatusCode::BAD_REQUEST, message).into_response(),
    }
}

pub fn unprocessable() -> Response {
    StatusCode::UNPROCESSABLE_ENTITY.into_response()
}
