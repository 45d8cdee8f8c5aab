// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Client Configuration
//!
//! [`Configuration`] is the immutable value an [`AuthHandler`](crate::AuthHandler)
//! is built from. It is always passed in explicitly; [`Configuration::from_env`]
//! is a convenience constructor for binaries and never runs implicitly.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `COGNITO_ORIGIN` | Value sent as the `Origin` header | empty (header omitted) |
//! | `COGNITO_REGION` | User pool region code, e.g. `eu-central-1` | Required |
//! | `COGNITO_CLIENT_ID` | App client id of the user pool | Required |
//! | `COGNITO_ENDPOINT` | Endpoint override (local emulators, proxies) | derived from region |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |

use std::fmt;
use std::str::FromStr;

use reqwest::header::{HeaderMap, HeaderValue, ORIGIN};

use crate::error::AuthError;

/// Environment variable name for the `Origin` header value.
pub const ORIGIN_ENV: &str = "COGNITO_ORIGIN";

/// Environment variable name for the user pool region.
pub const REGION_ENV: &str = "COGNITO_REGION";

/// Environment variable name for the app client id.
pub const CLIENT_ID_ENV: &str = "COGNITO_CLIENT_ID";

/// Environment variable name for an explicit endpoint override.
pub const ENDPOINT_ENV: &str = "COGNITO_ENDPOINT";

/// Environment variable name selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Regions hosting Cognito user pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    UsEast1,
    UsEast2,
    UsWest1,
    UsWest2,
    CaCentral1,
    SaEast1,
    EuCentral1,
    EuNorth1,
    EuSouth1,
    EuWest1,
    EuWest2,
    EuWest3,
    MeSouth1,
    AfSouth1,
    ApEast1,
    ApSouth1,
    ApNortheast1,
    ApNortheast2,
    ApNortheast3,
    ApSoutheast1,
    ApSoutheast2,
}

impl Region {
    pub const ALL: [Region; 21] = [
        Region::UsEast1,
        Region::UsEast2,
        Region::UsWest1,
        Region::UsWest2,
        Region::CaCentral1,
        Region::SaEast1,
        Region::EuCentral1,
        Region::EuNorth1,
        Region::EuSouth1,
        Region::EuWest1,
        Region::EuWest2,
        Region::EuWest3,
        Region::MeSouth1,
        Region::AfSouth1,
        Region::ApEast1,
        Region::ApSouth1,
        Region::ApNortheast1,
        Region::ApNortheast2,
        Region::ApNortheast3,
        Region::ApSoutheast1,
        Region::ApSoutheast2,
    ];

    /// Region code as used in endpoint host names.
    pub fn code(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsEast2 => "us-east-2",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::CaCentral1 => "ca-central-1",
            Region::SaEast1 => "sa-east-1",
            Region::EuCentral1 => "eu-central-1",
            Region::EuNorth1 => "eu-north-1",
            Region::EuSouth1 => "eu-south-1",
            Region::EuWest1 => "eu-west-1",
            Region::EuWest2 => "eu-west-2",
            Region::EuWest3 => "eu-west-3",
            Region::MeSouth1 => "me-south-1",
            Region::AfSouth1 => "af-south-1",
            Region::ApEast1 => "ap-east-1",
            Region::ApSouth1 => "ap-south-1",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::ApNortheast2 => "ap-northeast-2",
            Region::ApNortheast3 => "ap-northeast-3",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Region::ALL
            .into_iter()
            .find(|region| region.code() == code)
            .ok_or_else(|| AuthError::Configuration(format!("unknown region `{s}`")))
    }
}

/// Immutable client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    origin: String,
    region: Region,
    client_id: String,
    endpoint: Option<String>,
}

impl Configuration {
    /// Create a configuration for the given user pool app client.
    ///
    /// # Arguments
    /// - `origin`: sent as the `Origin` header; empty to omit it
    /// - `region`: region hosting the user pool
    /// - `client_id`: app client id (public client, no secret)
    pub fn new(origin: impl Into<String>, region: Region, client_id: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            region,
            client_id: client_id.into(),
            endpoint: None,
        }
    }

    /// Send requests to `endpoint` instead of the regional Cognito endpoint.
    pub fn with_endpoint(mut self, endpoint: impl AsRef<str>) -> Result<Self, AuthError> {
        let endpoint = endpoint.as_ref().trim();
        let parsed = url::Url::parse(endpoint)
            .map_err(|e| AuthError::Configuration(format!("invalid endpoint `{endpoint}`: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AuthError::Configuration(format!(
                "endpoint must use http or https, got `{}`",
                parsed.scheme()
            )));
        }
        self.endpoint = Some(parsed.to_string());
        Ok(self)
    }

    /// Load configuration from the environment variables listed above.
    pub fn from_env() -> Result<Self, AuthError> {
        let region: Region = env_required(REGION_ENV)?.parse()?;
        let client_id = env_required(CLIENT_ID_ENV)?;
        let origin = env_optional(ORIGIN_ENV).unwrap_or_default();

        let config = Self::new(origin, region, client_id);
        match env_optional(ENDPOINT_ENV) {
            Some(endpoint) => config.with_endpoint(endpoint),
            None => Ok(config),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The URL every request is POSTed to.
    pub fn request_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://cognito-idp.{}.amazonaws.com/", self.region.code()),
        }
    }

    /// Contribute the configuration's default headers to an outgoing request.
    ///
    /// Called once per request after the protocol headers are set.
    pub fn setup_default_request(&self, headers: &mut HeaderMap) -> Result<(), AuthError> {
        if self.origin.is_empty() {
            return Ok(());
        }
        let origin = HeaderValue::from_str(&self.origin)
            .map_err(|e| AuthError::Configuration(format!("invalid origin header: {e}")))?;
        headers.insert(ORIGIN, origin);
        Ok(())
    }
}

fn env_required(name: &str) -> Result<String, AuthError> {
    env_optional(name).ok_or_else(|| AuthError::Configuration(format!("{name} is not set")))
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
