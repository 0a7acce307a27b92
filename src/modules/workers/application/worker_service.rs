// Worker use cases.
//
// Responsibilities
// - Validate input before touching the store.
// - Translate every failure into an `Outcome::Failure` (logged once).
// - Hand back read projections, never the stored entity.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::modules::workers::core::dto::{CreateWorkerRequest, UpdateWorkerRequest, WorkerResponse};
use crate::modules::workers::core::ports::WorkerRepository;
use crate::modules::workers::core::worker::{NewWorker, Worker, WorkerChanges};
use crate::shared::application::service_error::{ServiceError, guarded, log_failure, require_id};
use crate::shared::core::outcome::Outcome;
use crate::shared::core::validation::is_valid_input_string;

const WORKER: &str = "Worker";

pub struct WorkerService {
    repository: Arc<dyn WorkerRepository>,
    cancel: CancellationToken,
}

/// Trims the value and drops it when nothing is left.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .filter(|v| is_valid_input_string(Some(v.as_str())))
        .map(|v| v.trim().to_string())
}

fn required(value: String, field: &'static str) -> Result<String, ServiceError> {
    non_blank(Some(value)).ok_or(ServiceError::Blank(field))
}

fn into_responses(workers: Vec<Worker>) -> Vec<WorkerResponse> {
    workers.into_iter().map(WorkerResponse::from).collect()
}

impl WorkerService {
    pub fn new(repository: Arc<dyn WorkerRepository>, cancel: CancellationToken) -> Self {
        Self { repository, cancel }
    }

    pub async fn create(&self, request: CreateWorkerRequest) -> Outcome<WorkerResponse> {
        log_failure("create_worker", self.try_create(request).await)
    }

    pub async fn update(&self, id: i64, request: UpdateWorkerRequest) -> Outcome<WorkerResponse> {
        log_failure("update_worker", self.try_update(id, request).await)
    }

    pub async fn delete(&self, id: i64) -> Outcome {
        log_failure("delete_worker", self.try_delete(id).await)
    }

    pub async fn get_by_id(&self, id: i64) -> Outcome<WorkerResponse> {
        log_failure(
            "get_worker_by_id",
            self.find_existing(id).await.map(WorkerResponse::from),
        )
    }

    pub async fn search_by_name(&self, fragment: &str) -> Outcome<Vec<WorkerResponse>> {
        log_failure("search_workers_by_name", self.try_search(fragment).await)
    }

    pub async fn get_all(&self) -> Outcome<Vec<WorkerResponse>> {
        let result = guarded(&self.cancel, self.repository.list_workers())
            .await
            .map(into_responses);
        log_failure("get_all_workers", result)
    }

    async fn try_create(
        &self,
        request: CreateWorkerRequest,
    ) -> Result<WorkerResponse, ServiceError> {
        let worker = NewWorker {
            name: required(request.name, "Worker name")?,
            department: required(request.department, "Worker department")?,
            email: non_blank(request.email),
            phone: non_blank(request.phone),
        };

        let created = guarded(&self.cancel, self.repository.insert_worker(worker)).await?;
        info!(worker_id = created.id, "worker created");
        Ok(created.into())
    }

    async fn try_update(
        &self,
        id: i64,
        request: UpdateWorkerRequest,
    ) -> Result<WorkerResponse, ServiceError> {
        let mut worker = self.find_existing(id).await?;
        let changes = WorkerChanges {
            name: non_blank(request.name),
            department: non_blank(request.department),
            email: non_blank(request.email),
            phone: non_blank(request.phone),
        };
        if changes.is_empty() {
            return Err(ServiceError::NothingToUpdate);
        }

        worker.apply(changes);
        guarded(&self.cancel, self.repository.save_worker(&worker)).await?;
        info!(worker_id = id, "worker updated");
        Ok(worker.into())
    }

    async fn try_delete(&self, id: i64) -> Result<(), ServiceError> {
        require_id(WORKER, id)?;
        let deleted = guarded(&self.cancel, self.repository.delete_worker(id)).await?;
        if !deleted {
            return Err(ServiceError::NotFound { entity: WORKER, id });
        }
        info!(worker_id = id, "worker deleted with its shifts");
        Ok(())
    }

    async fn try_search(&self, fragment: &str) -> Result<Vec<WorkerResponse>, ServiceError> {
        if !is_valid_input_string(Some(fragment)) {
            return Err(ServiceError::Blank("Worker name"));
        }
        let workers = guarded(
            &self.cancel,
            self.repository.search_workers_by_name(fragment.trim()),
        )
        .await?;
        Ok(into_responses(workers))
    }

    async fn find_existing(&self, id: i64) -> Result<Worker, ServiceError> {
        require_id(WORKER, id)?;
        guarded(&self.cancel, self.repository.find_worker(id))
            .await?
            .ok_or(ServiceError::NotFound { entity: WORKER, id })
    }
}
