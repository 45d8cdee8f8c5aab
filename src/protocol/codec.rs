// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JSON text codec for payloads and responses.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::AuthError;

/// Content type of every request body.
pub const AMZ_JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Encode a payload as compact JSON text.
///
/// Fails with [`AuthError::Encoding`] only for shapes JSON cannot express
/// (e.g. maps with non-string keys); none of the protocol payloads do that.
pub fn serialize<T: Serialize>(payload: &T) -> Result<String, AuthError> {
    serde_json::to_string(payload)
        .map_err(|e| AuthError::Encoding(format!("failed to encode payload: {e}")))
}

/// Decode wire text into `T`.
///
/// Malformed JSON and shape mismatches (missing required field, wrong type)
/// both surface as [`AuthError::Decoding`].
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, AuthError> {
    serde_json::from_str(text).map_err(|e| {
        AuthError::Decoding(format!(
            "expected {}: {e}",
            short_type_name(std::any::type_name::<T>())
        ))
    })
}

fn short_type_name(full: &str) -> &str {
    full.rsplit("::").next().unwrap_or(full)
}
