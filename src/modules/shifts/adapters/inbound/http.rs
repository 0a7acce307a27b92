use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};

use crate::modules::shifts::core::dto::{CreateShiftRequest, UpdateShiftRequest};
use crate::shell::responses::{created, no_content, respond, unprocessable};
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> Response {
    respond(
        state.shifts.get_all().await,
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}

pub async fn list_by_worker(State(state): State<AppState>, Path(worker_id): Path<i64>) -> Response {
    respond(
        state.shifts.get_by_worker_id(worker_id).await,
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}

pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    respond(
        state.shifts.get_by_id(id).await,
        StatusCode::OK,
        StatusCode::NOT_FOUND,
    )
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateShiftRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return unprocessable();
    };
    let outcome = state.shifts.create(body).await;
    created(outcome, |shift| format!("/shifts/{}", shift.id))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Result<Json<UpdateShiftRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(body)) = body else {
        return unprocessable();
    };
    respond(
        state.shifts.update(id, body).await,
        StatusCode::OK,
        StatusCode::BAD_REQUEST,
    )
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    no_content(state.shifts.delete(id).await)
}

#[cfg(test)]
mod shifts_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::shifts::core::dto::ShiftResponse;
    use crate::modules::workers::core::ports::WorkerRepository;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_state;
    use crate::tests::fixtures::workers::new_worker;

    use super::*;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/shifts", get(list).post(create))
            .route("/shifts/worker/{id}", get(list_by_worker))
            .route("/shifts/{id}", get(get_by_id).put(update).delete(delete))
            .with_state(state)
    }

    fn shift_body(from: &str, to: &str) -> String {
        format!(r#"{{"workerId":1,"startTime":"{from}","endTime":"{to}"}}"#)
    }

    fn eight_hours() -> String {
        shift_body("2024-01-01T08:00:00", "2024-01-01T16:00:00")
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    async fn send(router: &Router, request: Request<Body>) -> Response {
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn app_with_alice() -> Router {
        let (state, store) = make_test_state();
        store
            .insert_worker(new_worker("Alice", "Ops"))
            .await
            .unwrap();
        app(state)
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_joined_shift() {
        let router = app_with_alice().await;
        let response = send(&router, json_request("POST", "/shifts", &eight_hours())).await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/shifts/1");
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["workerName"], "Alice");
        assert_eq!(json["workerDepartment"], "Ops");
        assert_eq!(json["duration"], 28_800);
    }

    #[tokio::test]
    async fn it_should_return_400_for_an_inverted_interval() {
        let router = app_with_alice().await;
        let body = shift_body("2024-01-01T16:00:00", "2024-01-01T08:00:00");
        let response = send(&router, json_request("POST", "/shifts", &body)).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_text(response).await,
            "Start time must come before end time"
        );
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let router = app_with_alice().await;
        let body = r#"{"workerId":"one"}"#;
        let response = send(&router, json_request("POST", "/shifts", body)).await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_list_shifts_by_worker() {
        let router = app_with_alice().await;
        send(&router, json_request("POST", "/shifts", &eight_hours())).await;

        let response = send(&router, empty_request("GET", "/shifts/worker/1")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let shifts: Vec<ShiftResponse> = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(shifts.len(), 1);

        let invalid = send(&router, empty_request("GET", "/shifts/worker/0")).await;
        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_text(invalid).await,
            "Worker id = 0 is invalid, ids must be greater than 0"
        );
    }

    #[tokio::test]
    async fn it_should_update_get_and_delete_a_shift() {
        let router = app_with_alice().await;
        send(&router, json_request("POST", "/shifts", &eight_hours())).await;

        let body = shift_body("2024-01-01T09:00:00", "2024-01-01T10:00:00");
        let updated = send(&router, json_request("PUT", "/shifts/1", &body)).await;
        assert_eq!(updated.status(), StatusCode::OK);

        let fetched = send(&router, empty_request("GET", "/shifts/1")).await;
        let fetched: ShiftResponse = serde_json::from_str(&body_text(fetched).await).unwrap();
        assert_eq!(fetched.duration.num_seconds(), 3_600);

        let deleted = send(&router, empty_request("DELETE", "/shifts/1")).await;
        assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

        let missing = send(&router, empty_request("GET", "/shifts/1")).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_text(missing).await, "Shift with id = 1 not found");
    }
}
