//! Client construction settings.
//!
//! Credentials, the protocol and transport-method selectors, and HTTP
//! tuning. All of these are fixed at construction time; the client holds
//! them immutably for its whole lifetime.

use std::{fmt, time::Duration};

use crate::error::{AcquiringError, Result};

/// Store credentials issued by the acquiring gateway.
///
/// Attached to every outgoing request as the `userName`/`password` form
/// fields. The password is masked in `Debug` output so request logging
/// cannot leak it.
///
/// # Examples
///
/// ```
/// use sber_acquiring::Credentials;
///
/// let credentials = Credentials::new("merchant-api", "secret");
/// let debug = format!("{credentials:?}");
/// assert!(!debug.contains("secret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials from the store username and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Returns the store username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Wire protocol used to talk to the gateway.
///
/// The selector is a configuration-time branch: it picks the built-in
/// endpoint preset and, for [`Protocol::Soap`], gates the transport. SOAP
/// body construction is not implemented; a SOAP client fails with
/// [`AcquiringError::NotImplemented`] on its first submit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Protocol {
    /// JSON-over-REST endpoints (implemented).
    #[default]
    Rest,
    /// SOAP endpoints (declared, unimplemented).
    Soap,
}

/// How request parameters are carried to the gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransportMethod {
    /// URL-encoded form data in a POST body.
    #[default]
    Post,
    /// URL-encoded parameters appended as a GET query string.
    Get,
}

/// HTTP transport tuning.
///
/// These are transport-level limits; the business-level `sessionTimeoutSecs`
/// payload field is unrelated and lives on the registration request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30, connect_timeout_secs: 10 }
    }
}

impl HttpConfig {
    /// Validates configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns [`AcquiringError::Config`] if timeout values are outside
    /// valid ranges:
    /// - `timeout_secs`: must be 1-300 seconds
    /// - `connect_timeout_secs`: must be 1-60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(AcquiringError::Config(
                "timeout_secs must be between 1 and 300".to_owned(),
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(AcquiringError::Config(
                "connect_timeout_secs must be between 1 and 60".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns the request timeout as a [`Duration`].
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns the connect timeout as a [`Duration`].
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
