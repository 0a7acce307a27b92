// Service-level failures and their conversion into outcomes.
//
// Responsibilities
// - Classify validation, referential, persistence and cancellation failures.
// - Log every failure once, at the service boundary, before it becomes an
//   `Outcome::Failure` carrying the `Display` text.

use std::future::Future;

use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use crate::shared::core::errors::StoreError;
use crate::shared::core::outcome::Outcome;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} id = {id} is invalid, ids must be greater than 0")]
    InvalidId { entity: &'static str, id: i64 },

    #[error("{0} cannot be blank")]
    Blank(&'static str),

    #[error("In order to update there must be at least one field provided")]
    NothingToUpdate,

    #[error("{entity} with id = {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Start time must come before end time")]
    InvalidInterval,

    #[error("There was an error accessing the database")]
    Store(#[from] StoreError),

    #[error("Cancelled")]
    Cancelled,
}

/// Converts a service result into an outcome, logging the failure.
pub fn log_failure<T>(operation: &'static str, result: Result<T, ServiceError>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::ok(value),
        Err(ServiceError::Store(source)) => {
            error!(operation, error = %source, "persistence failure");
            Outcome::fail(ServiceError::Store(source).to_string())
        }
        Err(ServiceError::Cancelled) => {
            warn!(operation, "operation cancelled");
            Outcome::fail(ServiceError::Cancelled.to_string())
        }
        Err(err) => {
            error!(operation, error = %err, "operation rejected");
            Outcome::fail(err.to_string())
        }
    }
}

/// Awaits a store call unless `cancel` fires first.
pub async fn guarded<T>(
    cancel: &CancellationToken,
    call: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, ServiceError> {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ServiceError::Cancelled),
        result = call => result.map_err(ServiceError::from),
    }
}

pub fn require_id(entity: &'static str, id: i64) -> Result<(), ServiceError> {
    if crate::shared::core::validation::is_valid_numeric_input(id) {
        Ok(())
    } else {
        Err(ServiceError::InvalidId { entity, id })
    }
}
