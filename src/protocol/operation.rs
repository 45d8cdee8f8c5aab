// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Operation catalog: the closed set of supported provider actions.

use std::fmt;

/// Service prefix of every `X-Amz-Target` header value.
pub const SERVICE_PREFIX: &str = "AWSCognitoIdentityProviderService";

/// One supported authentication action.
///
/// Each variant maps to exactly one protocol target. Sign-in maps to
/// `InitiateAuth` whatever auth flow the payload selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignUp,
    ConfirmSignUp,
    SignIn,
    SignOut,
    GetUser,
    ChangePassword,
    DeleteUser,
    UpdateUserAttributes,
    ForgotPassword,
    ConfirmForgotPassword,
    GetUserAttributeVerificationCode,
    VerifyUserAttribute,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::SignUp,
        Operation::ConfirmSignUp,
        Operation::SignIn,
        Operation::SignOut,
        Operation::GetUser,
        Operation::ChangePassword,
        Operation::DeleteUser,
        Operation::UpdateUserAttributes,
        Operation::ForgotPassword,
        Operation::ConfirmForgotPassword,
        Operation::GetUserAttributeVerificationCode,
        Operation::VerifyUserAttribute,
    ];

    /// Protocol target routing this operation on the provider side.
    pub fn target(self) -> &'static str {
        match self {
            Operation::SignUp => "SignUp",
            Operation::ConfirmSignUp => "ConfirmSignUp",
            Operation::SignIn => "InitiateAuth",
            Operation::SignOut => "GlobalSignOut",
            Operation::GetUser => "GetUser",
            Operation::ChangePassword => "ChangePassword",
            Operation::DeleteUser => "DeleteUser",
            Operation::UpdateUserAttributes => "UpdateUserAttributes",
            Operation::ForgotPassword => "ForgotPassword",
            Operation::ConfirmForgotPassword => "ConfirmForgotPassword",
            Operation::GetUserAttributeVerificationCode => "GetUserAttributeVerificationCode",
            Operation::VerifyUserAttribute => "VerifyUserAttribute",
        }
    }

    /// Full `X-Amz-Target` header value.
    pub fn amz_target(self) -> String {
        format!("{SERVICE_PREFIX}.{}", self.target())
    }

    /// Operations whose success body carries nothing the caller needs.
    pub fn has_void_response(self) -> bool {
        matches!(
            self,
            Operation::ConfirmSignUp
                | Operation::SignOut
                | Operation::ChangePassword
                | Operation::DeleteUser
                | Operation::ConfirmForgotPassword
                | Operation::VerifyUserAttribute
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}
