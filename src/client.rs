//! Generic request helper shared by the admin, student and payment clients.
//!
//! [`RequestHelper`] turns an [`ApiRequest`] into one HTTP exchange and
//! normalizes the outcome into an [`ApiResponse`]. It never returns an
//! error: every fault on the way (body serialization, transport failure,
//! a response body that is not JSON) collapses into
//! [`ApiResponse::connection_error`] and is traced with `warning!`.

use serde::Serialize;
use serde_json::Value;

use crate::{
    config::ApiConfig,
    transport::{HttpRequest, HttpTransport},
    types::{ApiRequest, ApiResponse, Method},
    warning,
};

#[derive(Debug, Clone)]
pub struct RequestHelper<T> {
    transport: T,
    config: ApiConfig,
    label: &'static str,
}

impl<T: HttpTransport> RequestHelper<T> {
    /// `label` only shows up in traced warnings, e.g. `"Admin API"`.
    pub fn new(transport: T, config: ApiConfig, label: &'static str) -> Self {
        Self {
            transport,
            config,
            label,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn call(&self, request: ApiRequest) -> ApiResponse {
        match self.exchange(&request).await {
            Ok(response) => response,
            Err(e) => {
                warning!(
                    "{} error on {} {}: {}",
                    self.label,
                    request.method,
                    request.path,
                    e
                );
                ApiResponse::connection_error()
            }
        }
    }

    pub async fn send(&self, method: Method, path: impl Into<String>) -> ApiResponse {
        self.call(ApiRequest::new(method, path)).await
    }

    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: impl Into<String>,
        body: &B,
    ) -> ApiResponse {
        let path = path.into();
        match ApiRequest::new(method, path.clone()).with_json(body) {
            Ok(request) => self.call(request).await,
            Err(e) => {
                warning!("{} error on {} {}: {}", self.label, method, path, e);
                ApiResponse::connection_error()
            }
        }
    }

    async fn exchange(&self, request: &ApiRequest) -> crate::Res<ApiResponse> {
        let mut http = HttpRequest::new(request.method, self.config.url(&request.path))
            .headers(&self.config.headers);
        if let Some(body) = request.wire_body() {
            http = http.body(serde_json::to_vec(body)?);
        }

        let response = self.transport.send(http).await?;
        let data: Value = serde_json::from_slice(&response.body)?;

        Ok(ApiResponse::from_exchange(response.status, data))
    }
}
