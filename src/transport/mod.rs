//! # Transport Module
//!
//! The HTTP capability the clients are built on. A transport takes one fully
//! built [`HttpRequest`] and returns the raw [`HttpResponse`] (status,
//! headers, body bytes) or a [`TransportError`] when no exchange completed.
//!
//! Clients never talk to reqwest directly. They are generic over
//! [`HttpTransport`], so tests substitute an in-memory fake and the
//! production binary uses [`ReqwestTransport`].
//!
//! A transport performs exactly one attempt per call. It does not retry, and
//! it does not add a timeout beyond whatever the underlying client applies.

use std::{fmt, future::Future};

use crate::types::Method;

mod reqwest_client;

pub use reqwest_client::ReqwestTransport;

#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn headers(mut self, headers: &[(String, String)]) -> Self {
        self.headers.extend(headers.iter().cloned());
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Case-insensitive header lookup on the outgoing request.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Case-insensitive header lookup, first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

#[derive(Debug)]
pub enum TransportError {
    RequestError(reqwest::Error),
    ConnectionError(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::RequestError(e) => write!(f, "request failed: {}", e),
            TransportError::ConnectionError(msg) => write!(f, "connection failed: {}", msg),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TransportError::RequestError(e) => Some(e),
            TransportError::ConnectionError(_) => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::RequestError(err)
    }
}

/// Issues a request and hands back whatever the server answered.
///
/// A non-2xx status is a completed exchange and must come back as
/// `Ok(HttpResponse)`. `Err` is reserved for exchanges that never completed.
pub trait HttpTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send;
}
