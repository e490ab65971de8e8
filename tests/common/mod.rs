#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use serde_json::Value;
use studentportal::{
    config::ApiConfig,
    export::{DownloadTarget, ExportError, StagedId},
    transport::{HttpRequest, HttpResponse, HttpTransport, TransportError},
};

pub const API_URL: &str = "http://portal.test/api";

pub fn admin_config() -> ApiConfig {
    ApiConfig::admin(API_URL)
}

pub fn student_config() -> ApiConfig {
    ApiConfig::student(API_URL)
}

pub fn vnpay_config() -> ApiConfig {
    ApiConfig::vnpay(API_URL)
}

#[derive(Default)]
struct FakeState {
    queued: VecDeque<Result<HttpResponse, String>>,
    fallback: Option<Result<HttpResponse, String>>,
    requests: Vec<HttpRequest>,
}

/// Transport answering from a script and recording every request.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<Mutex<FakeState>>,
}

impl FakeTransport {
    /// Answers every request with `status` and the JSON `body`.
    pub fn json(status: u16, body: Value) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().fallback = Some(Ok(json_response(status, &body)));
        fake
    }

    /// Answers every request with a raw response.
    pub fn raw(response: HttpResponse) -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().fallback = Some(Ok(response));
        fake
    }

    /// Fails every request as if the server were unreachable.
    pub fn unreachable() -> Self {
        let fake = Self::default();
        fake.state.lock().unwrap().fallback = Some(Err("connection refused".to_string()));
        fake
    }

    pub fn push(&self, response: HttpResponse) {
        self.state.lock().unwrap().queued.push_back(Ok(response));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests()
            .pop()
            .expect("no request was sent through the fake transport")
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_request()
            .body
            .map(|b| serde_json::from_slice(&b).expect("request body is not JSON"))
    }
}

pub fn json_response(status: u16, body: &Value) -> HttpResponse {
    HttpResponse::new(status, serde_json::to_vec(body).unwrap())
        .with_header("Content-Type", "application/json")
}

impl HttpTransport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request);
        let next = match state.queued.pop_front() {
            Some(next) => next,
            None => state
                .fallback
                .clone()
                .unwrap_or_else(|| Err("no scripted response".to_string())),
        };
        next.map_err(TransportError::ConnectionError)
    }
}

#[derive(Default)]
struct TargetState {
    next_id: u64,
    staged: Vec<(StagedId, Vec<u8>)>,
    saved: Vec<(String, Vec<u8>)>,
    released: Vec<StagedId>,
}

/// Download target remembering what was staged, saved and released.
#[derive(Clone, Default)]
pub struct RecordingTarget {
    state: Arc<Mutex<TargetState>>,
    fail_save: bool,
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_save() -> Self {
        Self {
            fail_save: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Vec<(String, Vec<u8>)> {
        self.state.lock().unwrap().saved.clone()
    }

    pub fn staged_count(&self) -> usize {
        self.state.lock().unwrap().staged.len()
    }

    pub fn released(&self) -> Vec<StagedId> {
        self.state.lock().unwrap().released.clone()
    }
}

impl DownloadTarget for RecordingTarget {
    fn stage(&self, payload: Vec<u8>) -> Result<StagedId, ExportError> {
        let mut state = self.state.lock().unwrap();
        let id = StagedId(state.next_id);
        state.next_id += 1;
        state.staged.push((id, payload));
        Ok(id)
    }

    async fn save(&self, id: StagedId, file_name: &str) -> Result<(), ExportError> {
        if self.fail_save {
            return Err(ExportError::CriticalError("save rejected".to_string()));
        }

        let mut state = self.state.lock().unwrap();
        let payload = state
            .staged
            .iter()
            .find(|(staged, _)| *staged == id)
            .map(|(_, payload)| payload.clone())
            .ok_or_else(|| ExportError::CriticalError("unknown staged id".to_string()))?;
        state.saved.push((file_name.to_string(), payload));
        Ok(())
    }

    fn release(&self, id: StagedId) {
        self.state.lock().unwrap().released.push(id);
    }
}
