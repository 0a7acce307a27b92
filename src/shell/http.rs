use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::modules::shifts::adapters::inbound::http as shifts_http;
use crate::modules::workers::adapters::inbound::http as workers_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/workers",
            get(workers_http::list).post(workers_http::create),
        )
        .route(
            "/workers/{id}",
            get(workers_http::get_by_id)
                .put(workers_http::update)
                .delete(workers_http::delete),
        )
        .route("/shifts", get(shifts_http::list).post(shifts_http::create))
        .route("/shifts/worker/{id}", get(shifts_http::list_by_worker))
        .route(
            "/shifts/{id}",
            get(shifts_http::get_by_id)
                .put(shifts_http::update)
                .delete(shifts_http::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
