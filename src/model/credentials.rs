// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Login and registration form validation.
//!
//! Only the form rules live here. Checking the credentials themselves is the
//! identity provider's job.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    #[error("Valid email is required")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password Confirmation is required")]
    ConfirmationRequired,
    #[error("Passwords must match")]
    PasswordsDiffer,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub password_confirm: Option<String>,
}

impl CredentialsForm {
    pub fn validate_login(&self) -> Result<(), CredentialsError> {
        if !is_valid_email(&self.email) {
            return Err(CredentialsError::EmailInvalid);
        }
        if self.password.is_empty() {
            return Err(CredentialsError::PasswordRequired);
        }
        Ok(())
    }

    pub fn validate_registration(&self) -> Result<(), CredentialsError> {
        self.validate_login()?;
        match self.password_confirm.as_deref() {
            None | Some("") => Err(CredentialsError::ConfirmationRequired),
            Some(confirm) if confirm != self.password => Err(CredentialsError::PasswordsDiffer),
            Some(_) => Ok(()),
        }
    }
}
