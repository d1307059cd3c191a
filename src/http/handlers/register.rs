//! User registration handler.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::http::state::AppState;
use crate::store::{NewAccount, StoreError};
use crate::validation::{validate, Field, RegisterRequest, ValidationOutcome};

/// Response body for the missing-fields case. Kept verbatim for client
/// compatibility.
pub const INVALID_PARAMS_MSG: &str =
    "Invalid parameters provided. Please provide valid parameters.";

/// Handle `POST /api/auth/register`.
///
/// The body is validated before any store access; no partial registration
/// happens on failure. The status mapping is part of the public contract:
/// missing fields and malformed email/phone/password answer 422, while a
/// too-short name answers 400.
///
/// # Parameters
///
/// - `state` - Application state containing the account store
/// - `body` - Registration request body
///
/// # Returns
///
/// Returns 201 with the created account on success, 409 if the email is
/// already registered, otherwise the validation error response.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> impl IntoResponse {
    match validate(&body) {
        ValidationOutcome::MissingFields => {
            (StatusCode::UNPROCESSABLE_ENTITY, Json(INVALID_PARAMS_MSG)).into_response()
        }
        ValidationOutcome::InvalidFormat(field) => {
            tracing::debug!("registration rejected: invalid {field}");
            (status_for_invalid(field), Json(format!("Invalid {field} provided."))).into_response()
        }
        ValidationOutcome::Valid => match state.accounts.create_account(NewAccount::from(&body)) {
            Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
            Err(StoreError::DuplicateEmail(email)) => {
                tracing::warn!("registration conflict for {email}");
                (StatusCode::CONFLICT, Json(format!("Account {email} already exists.")))
                    .into_response()
            }
        },
    }
}

/// Status code for a present-but-malformed field. The name field answers 400
/// while every other format failure answers 422; the split is preserved from
/// the original contract rather than unified.
const fn status_for_invalid(field: Field) -> StatusCode {
    match field {
        Field::Name => StatusCode::BAD_REQUEST,
        Field::Email | Field::Password | Field::PhoneNumber => StatusCode::UNPROCESSABLE_ENTITY,
    }
}
