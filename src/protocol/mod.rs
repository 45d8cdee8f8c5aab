// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Wire Protocol
//!
//! The Cognito user-pool protocol is a single JSON-over-POST endpoint:
//!
//! - every request is POSTed to the regional endpoint
//! - `Content-Type: application/x-amz-json-1.1`
//! - `X-Amz-Target: AWSCognitoIdentityProviderService.<Target>` selects the action
//! - HTTP 200 carries the action's response shape, any other status carries
//!   `{"__type": "...", "message": "..."}`

pub mod codec;
pub mod operation;
pub mod payloads;
pub mod responses;

pub use codec::AMZ_JSON_CONTENT_TYPE;
pub use operation::Operation;
pub use payloads::{AuthFlow, UserAttribute};
pub use responses::{
    CodeDeliveryDetails, ForgotPasswordResponse, GetAttributeVerificationCodeResponse,
    GetUserResponse, MfaOption, RequestError, SignInResponse, SignUpResponse,
    UpdateUserAttributesResponse,
};

/// Name of the routing header.
pub const AMZ_TARGET_HEADER: &str = "x-amz-target";
