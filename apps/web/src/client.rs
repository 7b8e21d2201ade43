//! HTTP client for the goals API.
//!
//! The proxy does not interpret goal payloads: bodies, status codes and
//! content types travel through unchanged.

use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Default timeout for establishing a connection to the goals API.
const CONNECT_TIMEOUT_SECS: u64 = 5;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Response received from the goals API, ready to be replayed to the caller.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        if let Some(content_type) = self.content_type {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends `method path` to the goals API.
    ///
    /// `Content-Type` and `X-Request-Id` are copied from `incoming`.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        incoming: &HeaderMap,
        body: Option<Bytes>,
    ) -> reqwest::Result<UpstreamResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Forwarding {} {}", method, url);

        let mut request = self.http.request(method, &url);
        if let Some(request_id) = incoming.get(REQUEST_ID_HEADER) {
            request = request.header(REQUEST_ID_HEADER, request_id.clone());
        }
        if let Some(body) = body {
            if let Some(content_type) = incoming.get(header::CONTENT_TYPE) {
                request = request.header(header::CONTENT_TYPE, content_type.clone());
            }
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;
        Ok(UpstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
