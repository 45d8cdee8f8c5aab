// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Sign in against a user pool and print the decoded ID token claims.
//!
//! Reads the client configuration from `COGNITO_*` (see `config`) and the
//! credentials from `AUTH_USERNAME` / `AUTH_PASSWORD`.

use std::{env, process::ExitCode, time::Duration};

use cognito_auth::logging::{self, LogFormat};
use cognito_auth::{AuthError, AuthHandler, Configuration, ReqwestTransport};
use tracing::{error, info};

const USERNAME_ENV: &str = "AUTH_USERNAME";
const PASSWORD_ENV: &str = "AUTH_PASSWORD";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() -> ExitCode {
    logging::init(LogFormat::from_env());

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error_code = e.error_code(), error = %e, "Sign-in failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AuthError> {
    let config = Configuration::from_env()?;
    let username = required(USERNAME_ENV)?;
    let password = required(PASSWORD_ENV)?;

    let transport = ReqwestTransport::with_timeout(REQUEST_TIMEOUT)?;
    let auth = AuthHandler::with_transport(config, transport);

    info!(region = %auth.config().region(), username = %username, "Signing in");
    let tokens = auth.sign_in(&username, &password).await?;
    info!(expires_in = tokens.expires_in, "Signed in");

    let claims = auth.get_claims(&tokens.id_token)?;
    let rendered = serde_json::to_string_pretty(&claims)?;
    println!("{rendered}");
    Ok(())
}

fn required(name: &str) -> Result<String, AuthError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AuthError::Configuration(format!("{name} is not set")))
}
