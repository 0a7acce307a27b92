// Success/failure contract returned by every service and client operation.
//
// Purpose
// - Carry either a value or a human readable failure message across layers
//   (service -> HTTP -> remote client -> console) without unwinding.
//
// Responsibilities
// - Make an inconsistent instance unrepresentable: a success has no message,
//   a failure has no value.
// - Only hand out the value once success is confirmed.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(String),
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Outcome::Success(value)
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Outcome::Failure(message.into())
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success payload, or `None` when this is a failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure message, or `None` when this is a success.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(message) => Outcome::Failure(message),
        }
    }

    /// Drops the payload, keeping only success or failure.
    pub fn discard(self) -> Outcome {
        self.map(|_| ())
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(message) => Err(message),
        }
    }
}

impl Outcome {
    pub fn success() -> Self {
        Outcome::Success(())
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(err.to_string()),
        }
    }
}
