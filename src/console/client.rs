// Remote client for the shift logger API.
//
// Responsibilities
// - One HTTP request per operation against `/workers` and `/shifts`.
// - Classify every transport, status and body problem into a `ClientError`
//   and hand it back as an `Outcome::Failure`, so callers never see a fault.
// - Stop waiting as soon as the shared cancellation token fires.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, warn};

use crate::modules::shifts::core::dto::{CreateShiftRequest, ShiftResponse, UpdateShiftRequest};
use crate::modules::workers::core::dto::{CreateWorkerRequest, UpdateWorkerRequest, WorkerResponse};
use crate::shared::core::outcome::Outcome;

const WORKERS_PATH: &str = "/workers";
const SHIFTS_PATH: &str = "/shifts";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid API url: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout: {0}")]
    Timeout(String),

    #[error("API returned: {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("Empty response body")]
    EmptyBody,

    #[error("Cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn create_worker(&self, request: &CreateWorkerRequest) -> Outcome<WorkerResponse>;

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Outcome<WorkerResponse>;

    async fn delete_worker(&self, id: i64) -> Outcome;

    async fn get_worker_by_id(&self, id: i64) -> Outcome<WorkerResponse>;

    /// Every worker, or only those whose name contains `name`.
    async fn get_workers(&self, name: Option<&str>) -> Outcome<Vec<WorkerResponse>>;

    async fn create_shift(&self, request: &CreateShiftRequest) -> Outcome<ShiftResponse>;

    async fn update_shift(&self, id: i64, request: &UpdateShiftRequest) -> Outcome<ShiftResponse>;

    async fn delete_shift(&self, id: i64) -> Outcome;

    async fn get_shift_by_id(&self, id: i64) -> Outcome<ShiftResponse>;

    /// Every shift, or only those of `worker_id`.
    async fn get_shifts(&self, worker_id: Option<i64>) -> Outcome<Vec<ShiftResponse>>;
}

pub struct HttpApiClient {
    http: Client,
    base_url: String,
    cancel: CancellationToken,
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ClientError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ClientError::EmptyBody);
    }
    serde_json::from_slice::<Option<T>>(bytes)
        .map_err(|err| ClientError::Parse(err.to_string()))?
        .ok_or(ClientError::EmptyBody)
}

fn finish<T>(operation: &'static str, result: Result<T, ClientError>) -> Outcome<T> {
    match result {
        Ok(value) => Outcome::ok(value),
        Err(ClientError::Cancelled) => {
            warn!(operation, "request cancelled");
            Outcome::fail(ClientError::Cancelled.to_string())
        }
        Err(err) => {
            error!(operation, error = %err, "request failed");
            Outcome::fail(err.to_string())
        }
    }
}

impl HttpApiClient {
    /// `timeout` bounds each request from connect to the last body byte.
    pub fn new(
        base_url: &str,
        timeout: Duration,
        cancel: CancellationToken,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url)
            .map_err(|err| ClientError::InvalidUrl(format!("{base_url}: {err}")))?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url,
            cancel,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, path: &str, id: i64) -> String {
        format!("{}{path}/{id}", self.base_url)
    }

    /// Sends the request and returns the body of a 2xx response.
    async fn exchange(&self, request: RequestBuilder) -> Result<Vec<u8>, ClientError> {
        let call = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            debug!(
                status = status.as_u16(),
                bytes = body.len(),
                "response received"
            );
            if !status.is_success() {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    body: String::from_utf8_lossy(&body).into_owned(),
                });
            }
            Ok::<_, ClientError>(body.to_vec())
        };

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(ClientError::Cancelled),
            result = call => result,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ClientError> {
        let body = self.exchange(request).await?;
        parse_body(&body)
    }

    async fn search_workers(&self, name: &str) -> Result<Vec<WorkerResponse>, ClientError> {
        let url = Url::parse_with_params(&self.url(WORKERS_PATH), &[("name", name)])
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        self.fetch(self.http.get(url)).await
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn create_worker(&self, request: &CreateWorkerRequest) -> Outcome<WorkerResponse> {
        let call = self.http.post(self.url(WORKERS_PATH)).json(request);
        finish("create_worker", self.fetch(call).await)
    }

    async fn update_worker(
        &self,
        id: i64,
        request: &UpdateWorkerRequest,
    ) -> Outcome<WorkerResponse> {
        let call = self.http.put(self.item_url(WORKERS_PATH, id)).json(request);
        finish("update_worker", self.fetch(call).await)
    }

    async fn delete_worker(&self, id: i64) -> Outcome {
        let call = self.http.delete(self.item_url(WORKERS_PATH, id));
        finish("delete_worker", self.exchange(call).await.map(|_| ()))
    }

    async fn get_worker_by_id(&self, id: i64) -> Outcome<WorkerResponse> {
        let call = self.http.get(self.item_url(WORKERS_PATH, id));
        finish("get_worker_by_id", self.fetch(call).await)
    }

    async fn get_workers(&self, name: Option<&str>) -> Outcome<Vec<WorkerResponse>> {
        let result = match name {
            Some(name) => self.search_workers(name).await,
            None => self.fetch(self.http.get(self.url(WORKERS_PATH))).await,
        };
        finish("get_workers", result)
    }

    async fn create_shift(&self, request: &CreateShiftRequest) -> Outcome<ShiftResponse> {
        let call = self.http.post(self.url(SHIFTS_PATH)).json(request);
        finish("create_shift", self.fetch(call).await)
    }

    async fn update_shift(&self, id: i64, request: &UpdateShiftRequest) -> Outcome<ShiftResponse> {
        let call = self.http.put(self.item_url(SHIFTS_PATH, id)).json(request);
        finish("update_shift", self.fetch(call).await)
    }

    async fn delete_shift(&self, id: i64) -> Outcome {
        let call = self.http.delete(self.item_url(SHIFTS_PATH, id));
        finish("delete_shift", self.exchange(call).await.map(|_| ()))
    }

    async fn get_shift_by_id(&self, id: i64) -> Outcome<ShiftResponse> {
        let call = self.http.get(self.item_url(SHIFTS_PATH, id));
        finish("get_shift_by_id", self.fetch(call).await)
    }

    async fn get_shifts(&self, worker_id: Option<i64>) -> Outcome<Vec<ShiftResponse>> {
        let path = match worker_id {
            Some(worker_id) => format!("{SHIFTS_PATH}/worker/{worker_id}"),
            None => SHIFTS_PATH.to_string(),
        };
        let call = self.http.get(self.url(&path));
        finish("get_shifts", self.fetch(call).await)
    }
}

#[cfg(test)]
mod http_api_client_tests {
    use super::*;
    use crate::tests::fixtures::shifts::day_shift_request;
    use crate::tests::fixtures::workers::create_worker_request;
    use mockito::{Matcher, Server};
    use rstest::rstest;
    use tokio::net::TcpListener;

    fn client_for(url: &str) -> HttpApiClient {
        HttpApiClient::new(url, Duration::from_secs(5), CancellationToken::new()).unwrap()
    }

    /// Accepts connections and never answers them.
    async fn silent_server() -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = tokio::spawn(async move {
            let mut open = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                open.push(socket);
            }
        });
        (url, handle)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_parse_a_created_worker() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/workers")
            .match_body(Matcher::PartialJsonString(r#"{"name":"Alice","department":"Ops"}"#.into()))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":1,"name":"Alice","department":"Ops","email":null,"phone":null}"#)
            .create_async()
            .await;

        let outcome = client_for(&server.url())
            .create_worker(&create_worker_request("Alice", "Ops"))
            .await;

        mock.assert_async().await;
        let worker = outcome.into_result().unwrap();
        assert_eq!(worker.id, 1);
        assert_eq!(worker.name, "Alice");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_status_and_body_of_a_non_success_response() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/workers/9")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let outcome = client_for(&server.url()).get_worker_by_id(9).await;

        assert_eq!(outcome.message(), Some("API returned: 404: not found"));
    }

    #[rstest]
    #[case("")]
    #[case("null")]
    #[tokio::test]
    async fn it_should_fail_on_an_empty_body(#[case] body: &str) {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shifts/1")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let outcome = client_for(&server.url()).get_shift_by_id(1).await;

        assert_eq!(outcome.message(), Some("Empty response body"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_on_a_body_of_the_wrong_shape() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/shifts")
            .with_status(200)
            .with_body(r#"{"unexpected":true}"#)
            .create_async()
            .await;

        let outcome = client_for(&server.url()).get_shifts(None).await;

        let message = outcome.message().unwrap();
        assert!(message.starts_with("JSON parse error: "), "{message}");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_send_the_name_as_a_query_parameter() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/workers")
            .match_query(Matcher::UrlEncoded("name".into(), "Ann Lee".into()))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let outcome = client_for(&server.url()).get_workers(Some("Ann Lee")).await;

        mock.assert_async().await;
        assert_eq!(outcome, Outcome::ok(vec![]));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_a_blank_name_for_the_api_to_reject() {
        let mut server = Server::new_async().await;
        let search = server
            .mock("GET", "/workers")
            .match_query(Matcher::UrlEncoded("name".into(), "   ".into()))
            .with_status(404)
            .with_body("Worker name cannot be blank")
            .create_async()
            .await;
        let list_all = server
            .mock("GET", "/workers")
            .match_query(Matcher::Missing)
            .expect(0)
            .create_async()
            .await;

        let outcome = client_for(&server.url()).get_workers(Some("   ")).await;

        search.assert_async().await;
        list_all.assert_async().await;
        assert_eq!(
            outcome.message(),
            Some("API returned: 404: Worker name cannot be blank")
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_hit_the_worker_listing_of_shifts() {
        let mut server = Server::new_async().await;
        let body = serde_json::json!([{
            "id": 4,
            "workerId": 2,
            "workerName": "Bob",
            "workerDepartment": "Ops",
            "startTime": "2024-01-01T08:00:00",
            "endTime": "2024-01-01T16:00:00",
            "duration": 28800
        }])
        .to_string();
        let mock = server
            .mock("GET", "/shifts/worker/2")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let shifts = client_for(&server.url())
            .get_shifts(Some(2))
            .await
            .into_result()
            .unwrap();

        mock.assert_async().await;
        assert_eq!(shifts.len(), 1);
        assert_eq!(shifts[0].duration.num_hours(), 8);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_a_no_content_delete() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/shifts/3")
            .with_status(204)
            .create_async()
            .await;

        let outcome = client_for(&server.url()).delete_shift(3).await;

        assert_eq!(outcome, Outcome::success());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_refused_connection_as_a_network_error() {
        let outcome = client_for("http://127.0.0.1:1")
            .create_shift(&day_shift_request(1))
            .await;

        let message = outcome.message().unwrap();
        assert!(message.starts_with("Network error"), "{message}");
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_slow_server_as_a_timeout() {
        let (url, server) = silent_server().await;
        let client =
            HttpApiClient::new(&url, Duration::from_millis(200), CancellationToken::new()).unwrap();

        let outcome = client.get_shifts(None).await;

        let message = outcome.message().unwrap();
        assert!(message.starts_with("Request timeout"), "{message}");
        server.abort();
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_cancellation_mid_request() {
        let (url, server) = silent_server().await;
        let cancel = CancellationToken::new();
        let client = HttpApiClient::new(&url, Duration::from_secs(30), cancel.clone()).unwrap();

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });
        let outcome = client.get_workers(None).await;

        assert_eq!(outcome.message(), Some("Cancelled"));
        server.abort();
    }

    #[rstest]
    fn it_should_reject_an_invalid_base_url() {
        let cancel = CancellationToken::new();
        let result = HttpApiClient::new("not a url", Duration::from_secs(1), cancel);
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
