// Shared shift fixtures for unit tests.

use chrono::NaiveDateTime;

use crate::modules::shifts::core::dto::CreateShiftRequest;
use crate::modules::shifts::core::shift::NewShift;
use crate::shared::core::validation::DATE_FORMAT;

/// Parses a console formatted timestamp such as `01-01-2024 08:00`.
pub fn at(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, DATE_FORMAT)
        .expect("fixture timestamp must be valid")
}

pub fn new_shift(worker_id: i64) -> NewShift {
    NewShift {
        worker_id,
        start_time: at("01-01-2024 08:00"),
        end_time: at("01-01-2024 16:00"),
    }
}

pub fn create_shift_request(worker_id: i64, start: &str, end: &str) -> CreateShiftRequest {
    CreateShiftRequest {
        worker_id,
        start_time: at(start),
        end_time: at(end),
    }
}

/// The eight hour shift of 01-01-2024, 08:00 to 16:00.
pub fn day_shift_request(worker_id: i64) -> CreateShiftRequest {
    create_shift_request(worker_id, "01-01-2024 08:00", "01-01-2024 16:00")
}
