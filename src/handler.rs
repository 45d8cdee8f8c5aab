// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Public operation surface.
//!
//! Every method builds its payload, sends it through the [`Dispatcher`] in a
//! single round-trip and decodes the operation's declared response. Methods
//! returning `()` do not read the success body at all.
//!
//! ```rust,ignore
//! let config = Configuration::new("https://app.example.com", Region::EuCentral1, client_id);
//! let auth = AuthHandler::new(config);
//!
//! let tokens = auth.sign_in("alice", "correct horse").await?;
//! let claims = auth.get_claims(&tokens.id_token)?;
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::claims::{self, Claims};
use crate::config::Configuration;
use crate::dispatcher::Dispatcher;
use crate::error::AuthError;
use crate::protocol::codec;
use crate::protocol::payloads::{
    AccessToken, ChangePassword, ConfirmForgotPassword, ConfirmSignUp, ForgotPassword,
    GetUserAttributeVerificationCode, InitiateAuth, SignUp, UpdateUserAttributes,
    VerifyUserAttribute,
};
use crate::protocol::{
    ForgotPasswordResponse, GetAttributeVerificationCodeResponse, GetUserResponse, Operation,
    SignInResponse, SignUpResponse, UpdateUserAttributesResponse, UserAttribute,
};
use crate::transport::{ReqwestTransport, Transport};

/// Cognito user pool authentication client.
///
/// Holds only immutable state, so one instance can serve concurrent calls
/// (share it behind an `Arc` or clone it).
#[derive(Debug, Clone)]
pub struct AuthHandler<T = ReqwestTransport> {
    dispatcher: Dispatcher<T>,
}

impl AuthHandler<ReqwestTransport> {
    /// Create a handler using the default `reqwest` transport.
    pub fn new(config: Configuration) -> Self {
        Self::with_transport(config, ReqwestTransport::new())
    }
}

impl<T: Transport> AuthHandler<T> {
    /// Create a handler on a custom transport.
    pub fn with_transport(config: Configuration, transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(config, transport),
        }
    }

    pub fn config(&self) -> &Configuration {
        self.dispatcher.config()
    }

    fn client_id(&self) -> String {
        self.config().client_id().to_string()
    }

    /// Register a new user. `attributes` defaults to none.
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        attributes: Option<Vec<UserAttribute>>,
    ) -> Result<SignUpResponse, AuthError> {
        let payload = SignUp {
            client_id: self.client_id(),
            username: username.to_string(),
            password: password.to_string(),
            user_attributes: attributes.unwrap_or_default(),
        };
        self.request(Operation::SignUp, &payload).await
    }

    /// Confirm a registration with the code sent to the user.
    pub async fn confirm_sign_up(
        &self,
        username: &str,
        confirmation_code: &str,
    ) -> Result<(), AuthError> {
        let payload = ConfirmSignUp {
            client_id: self.client_id(),
            username: username.to_string(),
            confirmation_code: confirmation_code.to_string(),
        };
        self.request_void(Operation::ConfirmSignUp, &payload).await
    }

    /// Sign in with username and password (`USER_PASSWORD_AUTH`).
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
    ) -> Result<SignInResponse, AuthError> {
        let payload = InitiateAuth::user_password(self.config().client_id(), username, password);
        self.request(Operation::SignIn, &payload).await
    }

    /// Exchange a refresh token for fresh access and ID tokens
    /// (`REFRESH_TOKEN_AUTH`). The response carries no new refresh token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<SignInResponse, AuthError> {
        let payload = InitiateAuth::refresh_token(self.config().client_id(), refresh_token);
        self.request(Operation::SignIn, &payload).await
    }

    /// Fetch the user's attributes.
    pub async fn get_user(&self, access_token: &str) -> Result<GetUserResponse, AuthError> {
        self.request(Operation::GetUser, &access_token_payload(access_token))
            .await
    }

    /// Update (or add) user attributes.
    pub async fn update_user_attributes(
        &self,
        access_token: &str,
        attributes: Vec<UserAttribute>,
    ) -> Result<UpdateUserAttributesResponse, AuthError> {
        let payload = UpdateUserAttributes {
            access_token: access_token.to_string(),
            user_attributes: attributes,
        };
        self.request(Operation::UpdateUserAttributes, &payload).await
    }

    /// Change the signed-in user's password.
    pub async fn change_password(
        &self,
        access_token: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AuthError> {
        let payload = ChangePassword {
            access_token: access_token.to_string(),
            previous_password: current_password.to_string(),
            proposed_password: new_password.to_string(),
        };
        self.request_void(Operation::ChangePassword, &payload).await
    }

    /// Start the password reset flow; a code is sent to the user.
    pub async fn forgot_password(
        &self,
        username: &str,
    ) -> Result<ForgotPasswordResponse, AuthError> {
        let payload = ForgotPassword {
            client_id: self.client_id(),
            username: username.to_string(),
        };
        self.request(Operation::ForgotPassword, &payload).await
    }

    /// Finish the password reset flow with the received code.
    pub async fn confirm_forgot_password(
        &self,
        confirmation_code: &str,
        username: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let payload = ConfirmForgotPassword {
            client_id: self.client_id(),
            confirmation_code: confirmation_code.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        };
        self.request_void(Operation::ConfirmForgotPassword, &payload)
            .await
    }

    /// Send a verification code for `attribute_name` (e.g. `email`).
    pub async fn get_user_attribute_verification_code(
        &self,
        access_token: &str,
        attribute_name: &str,
        client_metadata: Option<HashMap<String, String>>,
    ) -> Result<GetAttributeVerificationCodeResponse, AuthError> {
        let payload = GetUserAttributeVerificationCode {
            access_token: access_token.to_string(),
            attribute_name: attribute_name.to_string(),
            client_metadata,
        };
        self.request(Operation::GetUserAttributeVerificationCode, &payload)
            .await
    }

    /// Verify `attribute_name` with the received code.
    pub async fn verify_user_attribute(
        &self,
        access_token: &str,
        attribute_name: &str,
        code: &str,
    ) -> Result<(), AuthError> {
        let payload = VerifyUserAttribute {
            access_token: access_token.to_string(),
            attribute_name: attribute_name.to_string(),
            code: code.to_string(),
        };
        self.request_void(Operation::VerifyUserAttribute, &payload)
            .await
    }

    /// Invalidate all of the user's tokens (global sign-out).
    pub async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.request_void(Operation::SignOut, &access_token_payload(access_token))
            .await
    }

    /// Delete the signed-in user.
    pub async fn delete_user(&self, access_token: &str) -> Result<(), AuthError> {
        self.request_void(Operation::DeleteUser, &access_token_payload(access_token))
            .await
    }

    /// Decode the claims of an ID token. Local only; the signature is not verified.
    pub fn get_claims(&self, id_token: &str) -> Result<Claims, AuthError> {
        claims::get_claims(id_token)
    }

    async fn request<P, R>(&self, operation: Operation, payload: &P) -> Result<R, AuthError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let body = self
            .dispatcher
            .send(operation, codec::serialize(payload)?)
            .await?;
        codec::deserialize(&body)
    }

    async fn request_void<P: Serialize>(
        &self,
        operation: Operation,
        payload: &P,
    ) -> Result<(), AuthError> {
        self.dispatcher
            .send(operation, codec::serialize(payload)?)
            .await?;
        Ok(())
    }
}

fn access_token_payload(access_token: &str) -> AccessToken {
    AccessToken {
        access_token: access_token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::{json, Value};

    use super::*;
    use crate::config::Region;
    use crate::error::ErrorKind;
    use crate::protocol::AMZ_TARGET_HEADER;
    use crate::transport::mock::MockTransport;
    use crate::transport::{TransportError, WireRequest, WireResponse};

    fn handler(transport: MockTransport) -> AuthHandler<MockTransport> {
        let config = Configuration::new("", Region::EuCentral1, "client-123");
        AuthHandler::with_transport(config, transport)
    }

    fn sent_body(transport: &MockTransport) -> Value {
        let requests = transport.recorded();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        serde_json::from_str(&requests[0].body).unwrap()
    }

    fn sent_target(transport: &MockTransport) -> String {
        transport.recorded()[0]
            .headers
            .get(AMZ_TARGET_HEADER)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn sign_in_decodes_tokens() {
        let transport = MockTransport::respond(
            200,
            r#"{"AccessToken":"a","IdToken":"b","RefreshToken":"c","ExpiresIn":3600,"TokenType":"Bearer"}"#,
        );
        let auth = handler(transport.clone());

        let tokens = auth.sign_in("u", "p").await.unwrap();
        assert_eq!(tokens.access_token, "a");
        assert_eq!(tokens.id_token, "b");
        assert_eq!(tokens.refresh_token.as_deref(), Some("c"));
        assert_eq!(tokens.expires_in, 3600);
        assert_eq!(tokens.token_type, "Bearer");

        assert_eq!(
            sent_target(&transport),
            "AWSCognitoIdentityProviderService.InitiateAuth"
        );
        assert_eq!(
            sent_body(&transport),
            json!({
                "AuthFlow": "USER_PASSWORD_AUTH",
                "ClientId": "client-123",
                "AuthParameters": { "USERNAME": "u", "PASSWORD": "p" }
            })
        );
    }

    #[tokio::test]
    async fn sign_in_rejection_is_a_provider_error() {
        let auth = handler(MockTransport::respond(
            400,
            r#"{"message":"Incorrect username or password."}"#,
        ));

        let err = auth.sign_in("u", "wrong").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Provider);
        assert_eq!(err.message(), "Incorrect username or password.");
    }

    #[tokio::test]
    async fn error_body_without_message_is_a_decoding_error() {
        let auth = handler(MockTransport::respond(400, r#"{"__type":"InternalErrorException"}"#));
        let err = auth.sign_in("u", "p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[tokio::test]
    async fn unexpected_success_body_is_a_decoding_error() {
        let auth = handler(MockTransport::respond(200, r#"{"AccessToken":"a"}"#));
        let err = auth.sign_in("u", "p").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decoding);
    }

    #[tokio::test]
    async fn refresh_uses_refresh_token_flow() {
        let transport = MockTransport::respond(
            200,
            r#"{"AuthenticationResult":{"AccessToken":"a2","IdToken":"b2","ExpiresIn":3600,"TokenType":"Bearer"},"ChallengeParameters":{}}"#,
        );
        let auth = handler(transport.clone());

        let tokens = auth.refresh("refresh-token").await.unwrap();
        assert_eq!(tokens.access_token, "a2");
        assert_eq!(tokens.refresh_token, None);
        assert_eq!(
            sent_body(&transport),
            json!({
                "AuthFlow": "REFRESH_TOKEN_AUTH",
                "ClientId": "client-123",
                "AuthParameters": { "REFRESH_TOKEN": "refresh-token" }
            })
        );
    }

    #[tokio::test]
    async fn sign_up_sends_attributes_and_decodes_response() {
        let transport = MockTransport::respond(
            200,
            r#"{"CodeDeliveryDetails":{"AttributeName":"email","DeliveryMedium":"EMAIL","Destination":"t***@t***"},"UserConfirmed":false,"UserSub":"sub-1"}"#,
        );
        let auth = handler(transport.clone());

        let response = auth
            .sign_up(
                "alice",
                "Secret123!",
                Some(vec![
                    UserAttribute::new("email", "test@test.test"),
                    UserAttribute::new("custom:target_group", "ROLE_USER"),
                ]),
            )
            .await
            .unwrap();

        assert!(!response.user_confirmed);
        assert_eq!(response.user_sub, "sub-1");
        let body = sent_body(&transport);
        assert_eq!(body["ClientId"], "client-123");
        assert_eq!(body["UserAttributes"][1]["Name"], "custom:target_group");
    }

    #[tokio::test]
    async fn sign_up_without_attributes_sends_empty_list() {
        let transport = MockTransport::respond(200, r#"{"UserConfirmed":true,"UserSub":"s"}"#);
        let auth = handler(transport.clone());

        auth.sign_up("alice", "Secret123!", None).await.unwrap();
        assert_eq!(sent_body(&transport)["UserAttributes"], json!([]));
    }

    #[tokio::test]
    async fn get_user_decodes_attributes() {
        let transport = MockTransport::respond(
            200,
            r#"{"Username":"alice","UserAttributes":[{"Name":"email","Value":"a@b.com"}]}"#,
        );
        let auth = handler(transport.clone());

        let user = auth.get_user("at").await.unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.attribute("email"), Some("a@b.com"));
        assert_eq!(sent_body(&transport), json!({ "AccessToken": "at" }));
        assert_eq!(sent_target(&transport), "AWSCognitoIdentityProviderService.GetUser");
    }

    #[tokio::test]
    async fn update_user_attributes_decodes_delivery_list() {
        let transport = MockTransport::respond(
            200,
            r#"{"CodeDeliveryDetailsList":[{"AttributeName":"email","DeliveryMedium":"EMAIL"}]}"#,
        );
        let auth = handler(transport.clone());

        let response = auth
            .update_user_attributes("at", vec![UserAttribute::new("email", "new@b.com")])
            .await
            .unwrap();
        assert_eq!(response.code_delivery_details_list.len(), 1);
        assert_eq!(
            sent_body(&transport),
            json!({
                "AccessToken": "at",
                "UserAttributes": [{ "Name": "email", "Value": "new@b.com" }]
            })
        );
    }

    #[tokio::test]
    async fn forgot_password_decodes_delivery_details() {
        let transport = MockTransport::respond(
            200,
            r#"{"CodeDeliveryDetails":{"AttributeName":"email","DeliveryMedium":"EMAIL","Destination":"a***@b***"}}"#,
        );
        let auth = handler(transport.clone());

        let response = auth.forgot_password("alice").await.unwrap();
        assert_eq!(
            response.code_delivery_details.destination.as_deref(),
            Some("a***@b***")
        );
        assert_eq!(
            sent_body(&transport),
            json!({ "ClientId": "client-123", "Username": "alice" })
        );
    }

    #[tokio::test]
    async fn verification_code_omits_absent_client_metadata() {
        let transport = MockTransport::respond(
            200,
            r#"{"CodeDeliveryDetails":{"AttributeName":"email"}}"#,
        );
        let auth = handler(transport.clone());

        auth.get_user_attribute_verification_code("at", "email", None)
            .await
            .unwrap();
        assert_eq!(
            sent_body(&transport),
            json!({ "AccessToken": "at", "AttributeName": "email" })
        );
    }

    #[tokio::test]
    async fn void_operations_ignore_success_body() {
        for body in ["", "not json at all", "{}"] {
            let transport = MockTransport::respond(200, body);
            let auth = handler(transport.clone());

            auth.confirm_sign_up("alice", "123456").await.unwrap();
            auth.sign_out("at").await.unwrap();
            auth.delete_user("at").await.unwrap();
            auth.change_password("at", "old", "new").await.unwrap();
            auth.confirm_forgot_password("123456", "alice", "new")
                .await
                .unwrap();
            auth.verify_user_attribute("at", "email", "123456")
                .await
                .unwrap();

            assert_eq!(transport.recorded().len(), 6);
        }
    }

    #[tokio::test]
    async fn void_operations_send_expected_payloads() {
        let transport = MockTransport::respond(200, "");
        let auth = handler(transport.clone());

        auth.change_password("at", "old", "new").await.unwrap();
        auth.confirm_forgot_password("654321", "alice", "new")
            .await
            .unwrap();

        let requests = transport.recorded();
        let bodies: Vec<Value> = requests
            .iter()
            .map(|r| serde_json::from_str(&r.body).unwrap())
            .collect();
        assert_eq!(
            bodies[0],
            json!({ "AccessToken": "at", "PreviousPassword": "old", "ProposedPassword": "new" })
        );
        assert_eq!(
            bodies[1],
            json!({
                "ClientId": "client-123",
                "ConfirmationCode": "654321",
                "Username": "alice",
                "Password": "new"
            })
        );
    }

    #[tokio::test]
    async fn handler_stays_usable_after_failure() {
        let transport = MockTransport::with(|request: &WireRequest| {
            if request.body.contains("wrong") {
                Err(TransportError::Timeout("10s".to_string()))
            } else {
                Ok(WireResponse {
                    status: 200,
                    body: String::new(),
                })
            }
        });
        let auth = handler(transport);

        let err = auth.sign_out("wrong").await.unwrap_err();
        assert!(err.is_retryable());
        auth.sign_out("right").await.unwrap();
    }

    #[tokio::test]
    async fn concurrent_calls_do_not_interfere() {
        let transport = MockTransport::with(|request: &WireRequest| {
            let target = request
                .headers
                .get(AMZ_TARGET_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default();
            if target.ends_with("GetUser") {
                let body: Value = serde_json::from_str(&request.body).unwrap();
                let username = body["AccessToken"].as_str().unwrap().replace("token-", "");
                Ok(WireResponse {
                    status: 200,
                    body: json!({ "Username": username, "UserAttributes": [] }).to_string(),
                })
            } else {
                Ok(WireResponse {
                    status: 400,
                    body: r#"{"message":"User does not exist."}"#.to_string(),
                })
            }
        });
        let auth = Arc::new(handler(transport));

        let mut tasks = Vec::new();
        for i in 0..8 {
            let auth = Arc::clone(&auth);
            tasks.push(tokio::spawn(async move {
                let user = auth.get_user(&format!("token-user{i}")).await;
                let forgot = auth.forgot_password(&format!("user{i}")).await;
                (i, user, forgot)
            }));
        }

        for task in tasks {
            let (i, user, forgot) = task.await.unwrap();
            assert_eq!(user.unwrap().username, format!("user{i}"));
            assert_eq!(forgot.unwrap_err().message(), "User does not exist.");
        }
    }

    #[test]
    fn get_claims_is_local() {
        let auth = handler(MockTransport::fail(|| TransportError::Request("unused".to_string())));
        assert!(auth.get_claims("no-delimiter").is_err());
    }
}
