#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;

use http::{HeaderValue, Response as HttpResponse, StatusCode};
use tokio::sync::Mutex;
use tootbox::http_client::HttpClient;
use tootbox::{Client, ClientConfig};

pub const INSTANCE: &str = "https://example.social";

#[derive(Clone, Default)]
pub struct MockClient {
    // Queue of HTTP responses to pop for each send_http call
    queue: Arc<Mutex<VecDeque<HttpResponse<Vec<u8>>>>>,
    // Capture requests for assertions
    log: Arc<Mutex<Vec<http::Request<Vec<u8>>>>>,
}

impl MockClient {
    pub async fn push(&self, resp: HttpResponse<Vec<u8>>) {
        self.queue.lock().await.push_back(resp);
    }

    pub async fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push(json_response(status, &body)).await;
    }

    pub async fn take_log(&self) -> Vec<http::Request<Vec<u8>>> {
        let mut log = self.log.lock().await;
        let out = log.clone();
        log.clear();
        out
    }

    pub async fn calls(&self) -> usize {
        self.log.lock().await.len()
    }
}

impl HttpClient for MockClient {
    type Error = std::convert::Infallible;

    fn send_http(
        &self,
        request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        let log = self.log.clone();
        let queue = self.queue.clone();
        async move {
            log.lock().await.push(request);
            Ok(queue.lock().await.pop_front().expect("no queued response"))
        }
    }
}

/// Transport that never reaches a server.
#[derive(Clone, Default)]
pub struct UnreachableClient;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
pub struct Refused;

impl HttpClient for UnreachableClient {
    type Error = Refused;

    fn send_http(
        &self,
        _request: http::Request<Vec<u8>>,
    ) -> impl core::future::Future<
        Output = core::result::Result<http::Response<Vec<u8>>, Self::Error>,
    > + Send {
        async { Err(Refused) }
    }
}

pub fn json_response(status: u16, body: &serde_json::Value) -> HttpResponse<Vec<u8>> {
    raw_response(status, serde_json::to_vec(body).unwrap())
}

pub fn raw_response(status: u16, body: impl Into<Vec<u8>>) -> HttpResponse<Vec<u8>> {
    HttpResponse::builder()
        .status(StatusCode::from_u16(status).unwrap())
        .header(http::header::CONTENT_TYPE, "application/json; charset=utf-8")
        .body(body.into())
        .unwrap()
}

pub fn config() -> ClientConfig {
    ClientConfig::new(url::Url::parse(INSTANCE).unwrap())
}

pub fn anonymous_client() -> (Client<MockClient>, MockClient) {
    let mock = MockClient::default();
    (Client::new(mock.clone(), config()), mock)
}

pub fn authed_client(token: &str) -> (Client<MockClient>, MockClient) {
    let mock = MockClient::default();
    (Client::new(mock.clone(), config().with_token(token)), mock)
}

pub fn authorization(req: &http::Request<Vec<u8>>) -> Option<&HeaderValue> {
    req.headers().get(http::header::AUTHORIZATION)
}

/// Decoded query pairs of a logged request.
pub fn query_pairs(req: &http::Request<Vec<u8>>) -> Vec<(String, String)> {
    url::form_urlencoded::parse(req.uri().query().unwrap_or("").as_bytes())
        .into_owned()
        .collect()
}

pub fn account_json(id: &str, username: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "username": username, "acct": username })
}
