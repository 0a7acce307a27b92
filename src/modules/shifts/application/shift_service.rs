// Shift use cases.
//
// Responsibilities
// - Reject an inverted or empty interval before any write.
// - Resolve the referenced worker through the injected worker repository.
// - Build every response from a live join, computing the duration on the fly.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::modules::shifts::core::dto::{CreateShiftRequest, ShiftResponse, UpdateShiftRequest};
use crate::modules::shifts::core::ports::ShiftRepository;
use crate::modules::shifts::core::shift::{NewShift, Shift};
use crate::modules::workers::core::ports::WorkerRepository;
use crate::modules::workers::core::worker::Worker;
use crate::shared::application::service_error::{ServiceError, guarded, log_failure, require_id};
use crate::shared::core::outcome::Outcome;
use crate::shared::core::validation::is_valid_end_time;

const SHIFT: &str = "Shift";
const WORKER: &str = "Worker";

pub struct ShiftService {
    shifts: Arc<dyn ShiftRepository>,
    workers: Arc<dyn WorkerRepository>,
    cancel: CancellationToken,
}

fn project_all(rows: Vec<(Shift, Worker)>) -> Vec<ShiftResponse> {
    rows.iter()
        .map(|(shift, worker)| ShiftResponse::project(shift, worker))
        .collect()
}

impl ShiftService {
    pub fn new(
        shifts: Arc<dyn ShiftRepository>,
        workers: Arc<dyn WorkerRepository>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            shifts,
            workers,
            cancel,
        }
    }

    pub async fn create(&self, request: CreateShiftRequest) -> Outcome<ShiftResponse> {
        log_failure("create_shift", self.try_create(request).await)
    }

    pub async fn update(&self, id: i64, request: UpdateShiftRequest) -> Outcome<ShiftResponse> {
        log_failure("update_shift", self.try_update(id, request).await)
    }

    pub async fn delete(&self, id: i64) -> Outcome {
        log_failure("delete_shift", self.try_delete(id).await)
    }

    pub async fn get_by_id(&self, id: i64) -> Outcome<ShiftResponse> {
        log_failure("get_shift_by_id", self.try_get(id).await)
    }

    pub async fn get_all(&self) -> Outcome<Vec<ShiftResponse>> {
        let result = guarded(&self.cancel, self.shifts.list_shifts())
            .await
            .map(project_all);
        log_failure("get_all_shifts", result)
    }

    /// Shifts of one worker. An unknown worker simply has no shifts.
    pub async fn get_by_worker_id(&self, worker_id: i64) -> Outcome<Vec<ShiftResponse>> {
        log_failure(
            "get_shifts_by_worker_id",
            self.try_by_worker(worker_id).await,
        )
    }

    async fn try_create(&self, request: CreateShiftRequest) -> Result<ShiftResponse, ServiceError> {
        require_id(WORKER, request.worker_id)?;
        if !is_valid_end_time(request.start_time, request.end_time) {
            return Err(ServiceError::InvalidInterval);
        }
        let worker = self.find_worker(request.worker_id).await?;

        let shift = NewShift {
            worker_id: worker.id,
            start_time: request.start_time,
            end_time: request.end_time,
        };
        let created = guarded(&self.cancel, self.shifts.insert_shift(shift)).await?;
        info!(
            shift_id = created.id,
            worker_id = worker.id,
            "shift created"
        );
        Ok(ShiftResponse::project(&created, &worker))
    }

    async fn try_update(
        &self,
        id: i64,
        request: UpdateShiftRequest,
    ) -> Result<ShiftResponse, ServiceError> {
        require_id(SHIFT, id)?;
        require_id(WORKER, request.worker_id)?;
        if !is_valid_end_time(request.start_time, request.end_time) {
            return Err(ServiceError::InvalidInterval);
        }

        let mut shift = self.find_shift(id).await?;
        let worker = self.find_worker(request.worker_id).await?;
        shift.worker_id = worker.id;
        shift.start_time = request.start_time;
        shift.end_time = request.end_time;

        guarded(&self.cancel, self.shifts.save_shift(&shift)).await?;
        info!(shift_id = id, worker_id = worker.id, "shift updated");
        Ok(ShiftResponse::project(&shift, &worker))
    }

    async fn try_delete(&self, id: i64) -> Result<(), ServiceError> {
        require_id(SHIFT, id)?;
        let deleted = guarded(&self.cancel, self.shifts.delete_shift(id)).await?;
        if !deleted {
            return Err(ServiceError::NotFound { entity: SHIFT, id });
        }
        info!(shift_id = id, "shift deleted");
        Ok(())
    }

    async fn try_get(&self, id: i64) -> Result<ShiftResponse, ServiceError> {
        let shift = self.find_shift(id).await?;
        let worker = self.find_worker(shift.worker_id).await?;
        Ok(ShiftResponse::project(&shift, &worker))
    }

    async fn try_by_worker(&self, worker_id: i64) -> Result<Vec<ShiftResponse>, ServiceError> {
        require_id(WORKER, worker_id)?;
        let rows = guarded(&self.cancel, self.shifts.list_shifts_by_worker(worker_id)).await?;
        Ok(project_all(rows))
    }

    async fn find_shift(&self, id: i64) -> Result<Shift, ServiceError> {
        require_id(SHIFT, id)?;
        guarded(&self.cancel, self.shifts.find_shift(id))
            .await?
            .ok_or(ServiceError::NotFound { entity: SHIFT, id })
    }

    async fn find_worker(&self, id: i64) -> Result<Worker, ServiceError> {
        guarded(&self.cancel, self.workers.find_worker(id))
            .await?
            .ok_or(ServiceError::NotFound { entity: WORKER, id })
    }
}
