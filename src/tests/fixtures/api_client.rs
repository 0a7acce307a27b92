// In-process stand-in for the remote API, recording every call it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::console::client::ApiClient;
use crate::modules::shifts::core::dto::{CreateShiftRequest, ShiftResponse, UpdateShiftRequest};
use crate::modules::workers::core::dto::{CreateWorkerRequest, UpdateWorkerRequest, WorkerResponse};
use crate::shared::core::outcome::Outcome;

#[derive(Default)]
pub struct FakeApiClient {
    pub workers: Vec<WorkerResponse>,
    pub shifts: Vec<ShiftResponse>,
    /// When set, every call fails with this message.
    pub failure: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeApiClient {
    pub fn with(workers: Vec<WorkerResponse>, shifts: Vec<ShiftResponse>) -> Self {
        Self {
            workers,
            shifts,
            ..Self::default()
        }
    }

    pub fn with_workers(workers: Vec<WorkerResponse>) -> Self {
        Self::with(workers, Vec::new())
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn answer<T>(&self, call: String, value: impl FnOnce() -> Outcome<T>) -> Outcome<T> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some(message) => Outcome::fail(message.clone()),
            None => value(),
        }
    }

    fn not_found<T>(entity: &str, id: i64) -> Outcome<T> {
        Outcome::fail(format!("API returned: 404: {entity} with id = {id} not found"))
    }

    fn worker(&self, id: i64) -> Option<&WorkerResponse> {
        self.workers.iter().find(|w| w.id == id)
    }

    fn shift(&self, id: i64) -> Option<&ShiftResponse> {
        self.shifts.iter().find(|s| s.id == id)
    }
}

#[async_trait]
impl ApiClient for FakeApiClient {
    async fn create_worker(&self, request: &CreateWorkerRequest) -> Outcome<WorkerResponse> {
        self.answer(format!("create_worker {}", request.name), || {
            Outcome::ok(WorkerResponse {
                id: self.workers.len() as i64 + 1,
                name: request.name.clone(),
                department: request.department.clone(),
                email: request.email.clone(),
                phone: request.phone.clone(),
            })
        })
    }

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Outcome<WorkerResponse> {
        self.answer(format!("update_worker {id}"), || match self.worker(id) {
            Some(worker) => Outcome::ok(WorkerResponse {
                name: request.name.clone().unwrap_or_else(|| worker.name.clone()),
                department: request
                    .department
                    .clone()
                    .unwrap_or_else(|| worker.department.clone()),
                email: request.email.clone().or_else(|| worker.email.clone()),
                phone: request.phone.clone().or_else(|| worker.phone.clone()),
                id,
            }),
            None => Self::not_found("Worker", id),
        })
    }

    async fn delete_worker(&self, id: i64) -> Outcome {
        self.answer(format!("delete_worker {id}"), Outcome::success)
    }

    async fn get_worker_by_id(&self, id: i64) -> Outcome<WorkerResponse> {
        self.answer(format!("get_worker_by_id {id}"), || match self.worker(id) {
            Some(worker) => Outcome::ok(worker.clone()),
            None => Self::not_found("Worker", id),
        })
    }

    async fn get_workers(&self, name: Option<&str>) -> Outcome<Vec<WorkerResponse>> {
        self.answer(format!("get_workers {}", name.unwrap_or("*")), || {
            let needle = name.unwrap_or_default().to_lowercase();
            let workers = self
                .workers
                .iter()
                .filter(|w| w.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            Outcome::ok(workers)
        })
    }

    async fn create_shift(&self, request: &CreateShiftRequest) -> Outcome<ShiftResponse> {
        let worker_id = request.worker_id;
        self.answer(format!("create_shift {worker_id}"), || match self.worker(worker_id) {
            Some(worker) => Outcome::ok(ShiftResponse {
                id: self.shifts.len() as i64 + 1,
                worker_id,
                worker_name: worker.name.clone(),
                worker_department: worker.department.clone(),
                start_time: request.start_time,
                end_time: request.end_time,
                duration: request.end_time - request.start_time,
            }),
            None => Self::not_found("Worker", worker_id),
        })
    }

    async fn update_shift(&self, id: i64, request: &UpdateShiftRequest) -> Outcome<ShiftResponse> {
        self.answer(format!("update_shift {id} {}", request.worker_id), || {
            let Some(shift) = self.shift(id) else {
                return Self::not_found("Shift", id);
            };
            Outcome::ok(ShiftResponse {
                worker_id: request.worker_id,
                start_time: request.start_time,
                end_time: request.end_time,
                duration: request.end_time - request.start_time,
                ..shift.clone()
            })
        })
    }

    async fn delete_shift(&self, id: i64) -> Outcome {
        self.answer(format!("delete_shift {id}"), Outcome::success)
    }

    async fn get_shift_by_id(&self, id: i64) -> Outcome<ShiftResponse> {
        self.answer(format!("get_shift_by_id {id}"), || match self.shift(id) {
            Some(shift) => Outcome::ok(shift.clone()),
            None => Self::not_found("Shift", id),
        })
    }

    async fn get_shifts(&self, worker_id: Option<i64>) -> Outcome<Vec<ShiftResponse>> {
        let label = worker_id.map_or_else(|| "*".to_string(), |id| id.to_string());
        self.answer(format!("get_shifts {label}"), || {
            let shifts = self
                .shifts
                .iter()
                .filter(|s| worker_id.is_none_or(|id| s.worker_id == id))
                .cloned()
                .collect();
            Outcome::ok(shifts)
        })
    }
}
