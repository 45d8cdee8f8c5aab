// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Cognito Auth - User Pool Authentication Client
//!
//! Typed async client for the Cognito user-pool JSON protocol. Each
//! operation is one POST with an `X-Amz-Target` routing header; responses
//! resolve to the operation's typed result or an [`AuthError`] that keeps
//! transport, provider and decoding failures apart.
//!
//! ## Modules
//!
//! - `handler` - Public operation surface ([`AuthHandler`])
//! - `dispatcher` - Single-request dispatch and outcome classification
//! - `protocol` - Operation catalog, payload/response shapes, JSON codec
//! - `transport` - HTTP client seam (`reqwest` by default)
//! - `claims` - Unverified ID token claims decoding
//! - `config` - Client configuration and environment loading
//! - `logging` - Tracing subscriber setup

pub mod claims;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod logging;
pub mod protocol;
pub mod transport;

pub use claims::{get_claims, Address, Audience, Claims};
pub use config::{Configuration, Region};
pub use error::{AuthError, ErrorKind};
pub use handler::AuthHandler;
pub use protocol::{
    CodeDeliveryDetails, ForgotPasswordResponse, GetAttributeVerificationCodeResponse,
    GetUserResponse, Operation, SignInResponse, SignUpResponse, UpdateUserAttributesResponse,
    UserAttribute,
};
pub use transport::{ReqwestTransport, Transport, TransportError, WireRequest, WireResponse};
