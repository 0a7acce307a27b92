// Transport shapes for the shift endpoints.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::shift::Shift;
use crate::modules::workers::core::worker::Worker;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShiftRequest {
    pub worker_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateShiftRequest {
    pub worker_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Read projection of a shift joined with its worker at response time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftResponse {
    pub id: i64,
    pub worker_id: i64,
    pub worker_name: String,
    pub worker_department: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(with = "duration_seconds")]
    pub duration: TimeDelta,
}

impl ShiftResponse {
    pub fn project(shift: &Shift, worker: &Worker) -> Self {
        Self {
            id: shift.id,
            worker_id: worker.id,
            worker_name: worker.name.clone(),
            worker_department: worker.department.clone(),
            start_time: shift.start_time,
            end_time: shift.end_time,
            duration: shift.duration(),
        }
    }
}

mod duration_seconds {
    use chrono::TimeDelta;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &TimeDelta, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(duration.num_seconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TimeDelta, D::Error> {
        let seconds = i64::deserialize(deserializer)?;
        TimeDelta::try_seconds(seconds)
            .ok_or_else(|| serde::de::Error::custom("duration out of range"))
    }
}
