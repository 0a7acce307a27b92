use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use serde::Deserialize;

use crate::modules::workers::core::dto::{CreateWorkerRequest, UpdateWorkerRequest};
use crate::shell::responses::{created, no_content, respond, unprocessable};
use crate::shell::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WorkerQuery {
    pub name: Option<String>,
}

/// `GET /workers`, narrowed to a name search when `?name=` is present.
pub async fn list(State(state): State<AppState>, Query(query): Query<WorkerQuery>) -> Response {
    let outcome = match query.name {
        Some(name) => state.workers.search_by_name(&name).await,
        None => state.workers.get_all().await,
    };
    respond(outcome, StatusCode::OK, StatusCode::NOT_FOUND)
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let outcome = state.workers.get_by_id(id).await;
    respond(outcome, StatusCode::OK, StatusCode::NOT_FOUND)
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateWorkerRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return unprocessable();
    };
    let outcome = state.workers.create(body).await;
    created(outcome, |worker| format!("/workers/{}", worker.id))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateWorkerRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return unprocessable();
    };
    let outcome = state.workers.update(id, body).await;
    respond(outcome, StatusCode::OK, StatusCode::BAD_REQUEST)
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    no_content(state.workers.delete(id).await)
}
