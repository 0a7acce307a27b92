// What the shift service needs from persistence.

use async_trait::async_trait;

use crate::modules::shifts::core::shift::{NewShift, Shift};
use crate::modules::workers::core::worker::Worker;
use crate::shared::core::errors::StoreError;

#[async_trait]
pub trait ShiftRepository: Send + Sync {
    async fn insert_shift(&self, shift: NewShift) -> Result<Shift, StoreError>;

    async fn find_shift(&self, id: i64) -> Result<Option<Shift>, StoreError>;

    async fn save_shift(&self, shift: &Shift) -> Result<(), StoreError>;

    async fn delete_shift(&self, id: i64) -> Result<bool, StoreError>;

    /// Every shift joined with its worker, ordered by shift id.
    async fn list_shifts(&self) -> Result<Vec<(Shift, Worker)>, StoreError>;

    async fn list_shifts_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<(Shift, Worker)>, StoreError>;
}
