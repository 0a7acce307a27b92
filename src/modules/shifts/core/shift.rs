// Shift entity. Duration is derived, never stored.

use chrono::{NaiveDateTime, TimeDelta};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shift {
    pub id: i64,
    pub worker_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
    pub worker_id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl Shift {
    pub fn duration(&self) -> TimeDelta {
        self.end_time - self.start_time
    }
}
