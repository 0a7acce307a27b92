// Turns raw console input into validated requests.
//
// Every builder returns a failure outcome with a corrective message instead
// of a request the API would reject, so bad input never reaches the network.

use chrono::NaiveDateTime;

use crate::modules::shifts::core::dto::{CreateShiftRequest, UpdateShiftRequest};
use crate::modules::workers::core::dto::{CreateWorkerRequest, UpdateWorkerRequest};
use crate::shared::core::outcome::Outcome;
use crate::shared::core::validation::{
    is_valid_date_string, is_valid_end_time, is_valid_input_string, is_valid_numeric_input,
};

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn build_id(value: i64, entity: &str) -> Outcome<i64> {
    if is_valid_numeric_input(value) {
        Outcome::ok(value)
    } else {
        Outcome::fail(format!("{entity} id must be greater than 0"))
    }
}

pub fn build_date_time(input: &str, format: &str) -> Outcome<NaiveDateTime> {
    let input = input.trim();
    if !is_valid_date_string(input, format) {
        return Outcome::fail(format!("Invalid date, date must match format: {format}"));
    }
    NaiveDateTime::parse_from_str(input, format).into()
}

pub fn build_create_worker_request(
    name: &str,
    department: &str,
    email: Option<String>,
    phone: Option<String>,
) -> Outcome<CreateWorkerRequest> {
    if !is_valid_input_string(Some(name)) {
        return Outcome::fail("Worker name must be provided");
    }
    if !is_valid_input_string(Some(department)) {
        return Outcome::fail("Worker department must be provided");
    }
    Outcome::ok(CreateWorkerRequest {
        name: name.trim().to_string(),
        department: department.trim().to_string(),
        email: trimmed(email),
        phone: trimmed(phone),
    })
}

pub fn build_update_worker_request(
    name: Option<String>,
    department: Option<String>,
    email: Option<String>,
    phone: Option<String>,
) -> Outcome<UpdateWorkerRequest> {
    let request = UpdateWorkerRequest {
        name: trimmed(name),
        department: trimmed(department),
        email: trimmed(email),
        phone: trimmed(phone),
    };
    if request == UpdateWorkerRequest::default() {
        return Outcome::fail("In order to update there must be at least one field provided");
    }
    Outcome::ok(request)
}

fn check_shift(worker_id: i64, start: NaiveDateTime, end: NaiveDateTime) -> Outcome {
    if !is_valid_numeric_input(worker_id) {
        return Outcome::fail("Worker id must be greater than 0");
    }
    if !is_valid_end_time(start, end) {
        return Outcome::fail("End time must come after start time");
    }
    Outcome::success()
}

pub fn build_create_shift_request(
    worker_id: i64,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
) -> Outcome<CreateShiftRequest> {
    check_shift(worker_id, start_time, end_time).map(|()| CreateShiftRequest {
        worker_id,
        start_time,
        end_time,
    })
}

pub fn build_update_shift_request(
    worker_id: i64,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
) -> Outcome<UpdateShiftRequest> {
    check_shift(worker_id, start_time, end_time).map(|()| UpdateShiftRequest {
        worker_id,
        start_time,
        end_time,
    })
}
