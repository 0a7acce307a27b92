// What the worker service needs from persistence.
//
// Boundaries
// - No concrete storage here. `shared::infrastructure::store` implements it.

use async_trait::async_trait;

use crate::modules::workers::core::worker::{NewWorker, Worker};
use crate::shared::core::errors::StoreError;

#[async_trait]
pub trait WorkerRepository: Send + Sync {
    async fn insert_worker(&self, worker: NewWorker) -> Result<Worker, StoreError>;

    async fn find_worker(&self, id: i64) -> Result<Option<Worker>, StoreError>;

    async fn save_worker(&self, worker: &Worker) -> Result<(), StoreError>;

    /// Removes the worker and every shift referencing it. Returns `false`
    /// when no row matched.
    async fn delete_worker(&self, id: i64) -> Result<bool, StoreError>;

    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError>;

    /// Case-insensitive substring match on the worker name.
    async fn search_workers_by_name(&self, fragment: &str) -> Result<Vec<Worker>, StoreError>;
}
