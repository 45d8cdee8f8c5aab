// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Request payload shapes.
//!
//! Field names follow the provider's PascalCase JSON keys. Optional fields
//! are omitted from the body when `None`; the provider rejects explicit
//! `null` for most of them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A user pool attribute, e.g. `email` or `custom:target_group`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAttribute {
    pub name: String,
    pub value: String,
}

impl UserAttribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// `SignUp` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUp {
    pub client_id: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub user_attributes: Vec<UserAttribute>,
}

/// `ConfirmSignUp` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmSignUp {
    pub client_id: String,
    pub username: String,
    pub confirmation_code: String,
}

/// Auth flow discriminator of an `InitiateAuth` request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthFlow {
    #[serde(rename = "USER_PASSWORD_AUTH")]
    UserPasswordAuth,
    #[serde(rename = "REFRESH_TOKEN_AUTH")]
    RefreshTokenAuth,
}

/// Flow-specific parameters of an `InitiateAuth` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AuthParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// `InitiateAuth` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InitiateAuth {
    pub auth_flow: AuthFlow,
    pub client_id: String,
    pub auth_parameters: AuthParameters,
}

impl InitiateAuth {
    pub fn user_password(client_id: &str, username: &str, password: &str) -> Self {
        Self {
            auth_flow: AuthFlow::UserPasswordAuth,
            client_id: client_id.to_string(),
            auth_parameters: AuthParameters {
                username: Some(username.to_string()),
                password: Some(password.to_string()),
                refresh_token: None,
            },
        }
    }

    pub fn refresh_token(client_id: &str, refresh_token: &str) -> Self {
        Self {
            auth_flow: AuthFlow::RefreshTokenAuth,
            client_id: client_id.to_string(),
            auth_parameters: AuthParameters {
                username: None,
                password: None,
                refresh_token: Some(refresh_token.to_string()),
            },
        }
    }
}

/// Request carrying only an access token (`GetUser`, `GlobalSignOut`,
/// `DeleteUser`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccessToken {
    pub access_token: String,
}

/// `ChangePassword` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangePassword {
    pub access_token: String,
    pub previous_password: String,
    pub proposed_password: String,
}

/// `UpdateUserAttributes` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserAttributes {
    pub access_token: String,
    pub user_attributes: Vec<UserAttribute>,
}

/// `ForgotPassword` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForgotPassword {
    pub client_id: String,
    pub username: String,
}

/// `ConfirmForgotPassword` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConfirmForgotPassword {
    pub client_id: String,
    pub confirmation_code: String,
    pub username: String,
    pub password: String,
}

/// `GetUserAttributeVerificationCode` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserAttributeVerificationCode {
    pub access_token: String,
    pub attribute_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_metadata: Option<HashMap<String, String>>,
}

/// `VerifyUserAttribute` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyUserAttribute {
    pub access_token: String,
    pub attribute_name: String,
    pub code: String,
}
