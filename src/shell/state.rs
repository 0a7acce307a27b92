use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::modules::shifts::application::shift_service::ShiftService;
use crate::modules::shifts::core::ports::ShiftRepository;
use crate::modules::workers::application::worker_service::WorkerService;
use crate::modules::workers::core::ports::WorkerRepository;

#[derive(Clone)]
pub struct AppState {
    pub workers: Arc<WorkerService>,
    pub shifts: Arc<ShiftService>,
}

impl AppState {
    /// Wires both services onto one store so a worker delete cascades to
    /// the shifts the shift service sees.
    pub fn new<S>(store: Arc<S>, cancel: CancellationToken) -> Self
    where
        S: WorkerRepository + ShiftRepository + 'static,
    {
        let workers = Arc::new(WorkerService::new(store.clone(), cancel.clone()));
        let shifts = Arc::new(ShiftService::new(store.clone(), store, cancel));
        Self { workers, shifts }
    }
}
