// Application state fixtures for the HTTP handler tests.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> (AppState, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    let state = AppState::new(store.clone(), CancellationToken::new());
    (state, store)
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryStore::new();
    store.toggle_offline();
    AppState::new(Arc::new(store), CancellationToken::new())
}
