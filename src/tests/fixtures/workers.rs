// Shared worker fixtures for unit tests.

use crate::modules::workers::core::dto::CreateWorkerRequest;
use crate::modules::workers::core::ports::WorkerRepository;
use crate::modules::workers::core::worker::{NewWorker, Worker};

pub fn make_worker(id: i64, name: &str, department: &str) -> Worker {
    Worker {
        id,
        name: name.to_string(),
        department: department.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        phone: None,
    }
}

pub fn new_worker(name: &str, department: &str) -> NewWorker {
    NewWorker {
        name: name.to_string(),
        department: department.to_string(),
        email: None,
        phone: None,
    }
}

/// Inserts a worker straight into the store, bypassing the service.
pub async fn seed_worker(store: &dyn WorkerRepository, name: &str, department: &str) -> Worker {
    store
        .insert_worker(new_worker(name, department))
        .await
        .unwrap()
}

pub fn create_worker_request(name: &str, department: &str) -> CreateWorkerRequest {
    CreateWorkerRequest {
        name: name.to_string(),
        department: department.to_string(),
        email: None,
        phone: None,
    }
}
