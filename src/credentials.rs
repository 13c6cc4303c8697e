//! Basic-auth credentials for the Meteomatics API.

use crate::error::MeteomaticsError;
use serde::Deserialize;
use std::env;
use std::fmt;

pub const USERNAME_ENV: &str = "METEO_USERNAME";
pub const PASSWORD_ENV: &str = "METEO_PASSWORD";

/// Username and password sent as HTTP Basic authentication with every request.
///
/// Both values must be non-empty. The password is redacted from `Debug` output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Creates credentials, rejecting empty values.
    ///
    /// # Errors
    ///
    /// Returns [`MeteomaticsError::MissingCredential`] naming the empty field.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, MeteomaticsError> {
        let credentials = Self {
            username: username.into(),
            password: password.into(),
        };
        credentials.validate()?;
        Ok(credentials)
    }

    /// Reads credentials from the `METEO_USERNAME` and `METEO_PASSWORD` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`MeteomaticsError::MissingCredential`] naming the first variable
    /// that is unset, empty or not valid unicode.
    pub fn from_env() -> Result<Self, MeteomaticsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, MeteomaticsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(MeteomaticsError::MissingCredential(key))
        };
        Ok(Self {
            username: read(USERNAME_ENV)?,
            password: read(PASSWORD_ENV)?,
        })
    }

    pub(crate) fn validate(&self) -> Result<(), MeteomaticsError> {
        if self.username.is_empty() {
            return Err(MeteomaticsError::MissingCredential("username"));
        }
        if self.password.is_empty() {
            return Err(MeteomaticsError::MissingCredential("password"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
