// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Response payload shapes, including the provider's error body.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::payloads::UserAttribute;

/// Where a confirmation or verification code was sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDeliveryDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    /// `SMS` or `EMAIL`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<String>,
    /// Masked destination, e.g. `a***@e***`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
}

/// Result of `SignUp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignUpResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_delivery_details: Option<CodeDeliveryDetails>,
    pub user_confirmed: bool,
    pub user_sub: String,
}

/// Tokens issued by a successful `InitiateAuth`.
///
/// Decodes both the flat token object and the provider's
/// `{"AuthenticationResult": {...}, "ChallengeParameters": {...}}` envelope;
/// always serializes flat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", from = "SignInWire")]
pub struct SignInResponse {
    pub access_token: String,
    pub id_token: String,
    /// Absent when the response answers a refresh-token flow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
    pub token_type: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub challenge_parameters: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AuthenticationResult {
    access_token: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: u64,
    token_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct FlatSignIn {
    access_token: String,
    id_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    expires_in: u64,
    token_type: String,
    #[serde(default)]
    challenge_parameters: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignInWire {
    Envelope {
        #[serde(rename = "AuthenticationResult")]
        authentication_result: AuthenticationResult,
        #[serde(rename = "ChallengeParameters", default)]
        challenge_parameters: HashMap<String, String>,
    },
    Flat(FlatSignIn),
}

impl From<SignInWire> for SignInResponse {
    fn from(wire: SignInWire) -> Self {
        match wire {
            SignInWire::Envelope {
                authentication_result: tokens,
                challenge_parameters,
            } => Self {
                access_token: tokens.access_token,
                id_token: tokens.id_token,
                refresh_token: tokens.refresh_token,
                expires_in: tokens.expires_in,
                token_type: tokens.token_type,
                challenge_parameters,
            },
            SignInWire::Flat(flat) => Self {
                access_token: flat.access_token,
                id_token: flat.id_token,
                refresh_token: flat.refresh_token,
                expires_in: flat.expires_in,
                token_type: flat.token_type,
                challenge_parameters: flat.challenge_parameters,
            },
        }
    }
}

/// Legacy SMS MFA option of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MfaOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_medium: Option<String>,
}

/// Result of `GetUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetUserResponse {
    pub username: String,
    #[serde(default)]
    pub user_attributes: Vec<UserAttribute>,
    #[serde(rename = "MFAOptions", default, skip_serializing_if = "Option::is_none")]
    pub mfa_options: Option<Vec<MfaOption>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_mfa_setting: Option<String>,
    #[serde(
        rename = "UserMFASettingList",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub user_mfa_setting_list: Option<Vec<String>>,
}

impl GetUserResponse {
    /// Value of the first attribute named `name`.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.user_attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// Result of `UpdateUserAttributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateUserAttributesResponse {
    /// One entry per attribute that needs verification after the update.
    #[serde(default)]
    pub code_delivery_details_list: Vec<CodeDeliveryDetails>,
}

/// Result of `ForgotPassword`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForgotPasswordResponse {
    pub code_delivery_details: CodeDeliveryDetails,
}

/// Result of `GetUserAttributeVerificationCode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetAttributeVerificationCodeResponse {
    pub code_delivery_details: CodeDeliveryDetails,
}

/// Error body of any non-200 response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestError {
    /// Exception name, e.g. `NotAuthorizedException`
    #[serde(rename = "__type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(alias = "Message")]
    pub message: String,
}
