// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request dispatch and response resolution.
//!
//! One call to [`Dispatcher::send`] is exactly one POST. The outcome is either
//! the raw success body or a typed [`AuthError`]; nothing is retried.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, info, warn};

use crate::config::Configuration;
use crate::error::AuthError;
use crate::protocol::{codec, Operation, RequestError, AMZ_JSON_CONTENT_TYPE, AMZ_TARGET_HEADER};
use crate::transport::{Transport, WireRequest};

/// The only status the provider uses for success.
const STATUS_OK: u16 = 200;

/// Sends serialized payloads to the provider and classifies the outcome.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    config: Configuration,
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(config: Configuration, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Send `payload` as `operation` and return the raw body of a 200 response.
    ///
    /// # Errors
    /// - [`AuthError::Transport`] when no response was received
    /// - [`AuthError::Provider`] for a non-200 response with a `message`
    /// - [`AuthError::Decoding`] for a non-200 response without one
    pub async fn send(&self, operation: Operation, payload: String) -> Result<String, AuthError> {
        let request = WireRequest {
            url: self.config.request_url(),
            headers: self.headers(operation)?,
            body: payload,
        };

        debug!(operation = %operation, url = %request.url, "Dispatching request");

        let response = self.transport.post(request).await.map_err(|e| {
            warn!(operation = %operation, error = %e, "Transport failed");
            AuthError::Transport(e)
        })?;

        if response.status == STATUS_OK {
            debug!(operation = %operation, "Request succeeded");
            return Ok(response.body);
        }

        let error: RequestError = codec::deserialize(&response.body).map_err(|e| {
            warn!(
                operation = %operation,
                status = response.status,
                error = %e,
                "Error response did not carry a message"
            );
            e
        })?;

        info!(
            operation = %operation,
            status = response.status,
            error_type = error.kind.as_deref().unwrap_or("unknown"),
            "Provider rejected request"
        );

        Err(AuthError::Provider {
            kind: error.kind,
            message: error.message,
            status: response.status,
        })
    }

    fn headers(&self, operation: Operation) -> Result<HeaderMap, AuthError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(AMZ_JSON_CONTENT_TYPE));
        let target = HeaderValue::from_str(&operation.amz_target())
            .map_err(|e| AuthError::Configuration(format!("invalid target header: {e}")))?;
        headers.insert(AMZ_TARGET_HEADER, target);
        self.config.setup_default_request(&mut headers)?;
        Ok(headers)
    }
}
