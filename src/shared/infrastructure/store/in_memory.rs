// In memory implementation of the worker and shift repositories.
//
// Purpose
// - Support service tests and local development without a database.
//
// Responsibilities
// - Assign sequential ids starting at 1.
// - Cascade a worker delete to its shifts.
// - Simulate an unreachable backend through `toggle_offline`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::modules::shifts::core::ports::ShiftRepository;
use crate::modules::shifts::core::shift::{NewShift, Shift};
use crate::modules::workers::core::ports::WorkerRepository;
use crate::modules::workers::core::worker::{NewWorker, Worker};
use crate::shared::core::errors::StoreError;

#[derive(Default)]
struct Tables {
    workers: BTreeMap<i64, Worker>,
    shifts: BTreeMap<i64, Shift>,
    last_worker_id: i64,
    last_shift_id: i64,
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    is_offline: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Store offline".into()));
        }
        Ok(())
    }

    fn join(
        tables: &Tables,
        shifts: impl Iterator<Item = Shift>,
    ) -> Result<Vec<(Shift, Worker)>, StoreError> {
        shifts
            .map(|shift| match tables.workers.get(&shift.worker_id) {
                Some(worker) => Ok((shift, worker.clone())),
                None => Err(StoreError::Backend(format!(
                    "shift {} references missing worker {}",
                    shift.id, shift.worker_id
                ))),
            })
            .collect()
    }
}

fn missing(table: &str, id: i64) -> StoreError {
    StoreError::Backend(format!("{table} {id} does not exist"))
}

#[async_trait]
impl WorkerRepository for InMemoryStore {
    async fn insert_worker(&self, worker: NewWorker) -> Result<Worker, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        tables.last_worker_id += 1;
        let stored = Worker {
            id: tables.last_worker_id,
            name: worker.name,
            department: worker.department,
            email: worker.email,
            phone: worker.phone,
        };
        tables.workers.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_worker(&self, id: i64) -> Result<Option<Worker>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.workers.get(&id).cloned())
    }

    async fn save_worker(&self, worker: &Worker) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        match tables.workers.get_mut(&worker.id) {
            Some(row) => {
                *row = worker.clone();
                Ok(())
            }
            None => Err(missing("worker", worker.id)),
        }
    }

    async fn delete_worker(&self, id: i64) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if tables.workers.remove(&id).is_none() {
            return Ok(false);
        }
        tables.shifts.retain(|_, shift| shift.worker_id != id);
        Ok(true)
    }

    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables.workers.values().cloned().collect())
    }

    async fn search_workers_by_name(&self, fragment: &str) -> Result<Vec<Worker>, StoreError> {
        self.ensure_online()?;
        let needle = fragment.to_lowercase();
        Ok(self
            .tables
            .read()
            .await
            .workers
            .values()
            .filter(|worker| worker.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ShiftRepository for InMemoryStore {
    async fn insert_shift(&self, shift: NewShift) -> Result<Shift, StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if !tables.workers.contains_key(&shift.worker_id) {
            return Err(StoreError::Backend(format!(
                "foreign key violation: worker {} does not exist",
                shift.worker_id
            )));
        }
        tables.last_shift_id += 1;
        let stored = Shift {
            id: tables.last_shift_id,
            worker_id: shift.worker_id,
            start_time: shift.start_time,
            end_time: shift.end_time,
        };
        tables.shifts.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_shift(&self, id: i64) -> Result<Option<Shift>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.shifts.get(&id).cloned())
    }

    async fn save_shift(&self, shift: &Shift) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        if !tables.workers.contains_key(&shift.worker_id) {
            return Err(StoreError::Backend(format!(
                "foreign key violation: worker {} does not exist",
                shift.worker_id
            )));
        }
        match tables.shifts.get_mut(&shift.id) {
            Some(row) => {
                *row = shift.clone();
                Ok(())
            }
            None => Err(missing("shift", shift.id)),
        }
    }

    async fn delete_shift(&self, id: i64) -> Result<bool, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.write().await.shifts.remove(&id).is_some())
    }

    async fn list_shifts(&self) -> Result<Vec<(Shift, Worker)>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Self::join(&tables, tables.shifts.values().cloned())
    }

    async fn list_shifts_by_worker(
        &self,
        worker_id: i64,
    ) -> Result<Vec<(Shift, Worker)>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Self::join(
            &tables,
            tables
                .shifts
                .values()
                .filter(|shift| shift.worker_id == worker_id)
                .cloned(),
        )
    }
}
