// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP transport seam.
//!
//! The dispatcher only needs "POST these headers and this body, give me the
//! status and the body back". [`Transport`] captures that contract so the
//! HTTP client can be swapped (or mocked in tests); [`ReqwestTransport`] is
//! the default implementation.

use std::future::Future;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::Client;

/// Transport-level failure: the provider never produced a response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_connect() {
            TransportError::Connect(err.to_string())
        } else {
            TransportError::Request(err.to_string())
        }
    }
}

/// A single outgoing POST.
#[derive(Debug, Clone)]
pub struct WireRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

/// Status and full body text of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

/// Minimal HTTP client contract used by the dispatcher.
///
/// Implementations must be safe to share between concurrent in-flight
/// requests. Dropping the returned future cancels the request.
pub trait Transport: Send + Sync {
    fn post(
        &self,
        request: WireRequest,
    ) -> impl Future<Output = Result<WireResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport whose requests fail with [`TransportError::Timeout`]
    /// after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an already configured client (proxies, custom TLS roots, ...).
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    async fn post(&self, request: WireRequest) -> Result<WireResponse, TransportError> {
        let response = self
            .http
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(WireResponse { status, body })
    }
}
