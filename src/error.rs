// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication client errors.
//!
//! Every failure surfaced by [`AuthHandler`](crate::AuthHandler) is an
//! [`AuthError`]. The variants keep transport failures, provider rejections
//! and decoding failures apart so callers can decide what to retry.

use crate::transport::TransportError;

/// Coarse classification of an [`AuthError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Connectivity or timeout; the request may not have reached the provider
    Transport,
    /// The provider answered with a non-200 status and an error message
    Provider,
    /// A payload could not be encoded as request text
    Encoding,
    /// A body or token segment did not match the expected shape
    Decoding,
    /// The token is not in the compact three-segment format
    MalformedToken,
    /// The client configuration is missing or invalid
    Configuration,
}

/// Authentication client error type.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// The provider rejected the request.
    ///
    /// `kind` is the provider's `__type` field when present
    /// (e.g. `NotAuthorizedException`).
    #[error("{message}")]
    Provider {
        kind: Option<String>,
        message: String,
        status: u16,
    },

    #[error("encoding failed: {0}")]
    Encoding(String),

    #[error("decoding failed: {0}")]
    Decoding(String),

    #[error("token is malformed: {0}")]
    MalformedToken(String),

    #[error("configuration invalid: {0}")]
    Configuration(String),
}

impl AuthError {
    /// Get the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Transport(_) => ErrorKind::Transport,
            AuthError::Provider { .. } => ErrorKind::Provider,
            AuthError::Encoding(_) => ErrorKind::Encoding,
            AuthError::Decoding(_) => ErrorKind::Decoding,
            AuthError::MalformedToken(_) => ErrorKind::MalformedToken,
            AuthError::Configuration(_) => ErrorKind::Configuration,
        }
    }

    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Transport => "transport_error",
            ErrorKind::Provider => "provider_error",
            ErrorKind::Encoding => "encoding_error",
            ErrorKind::Decoding => "decoding_error",
            ErrorKind::MalformedToken => "malformed_token",
            ErrorKind::Configuration => "configuration_error",
        }
    }

    /// Only transport failures are worth retrying; everything else will
    /// fail the same way again.
    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    /// Human-readable message; for provider errors this is exactly the
    /// provider's `message` field.
    pub fn message(&self) -> String {
        match self {
            AuthError::Provider { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(err: serde_json::Error) -> Self {
        AuthError::Decoding(err.to_string())
    }
}
