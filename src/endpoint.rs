//! Operation-to-URL resolution.
//!
//! The gateway exposes one URL per operation. Two presets exist: the REST
//! endpoint set (implemented) and the SOAP endpoint set (declared but
//! empty). Callers can override both with [`EndpointSet::custom`], e.g. to
//! point at the production gateway instead of the 3-D Secure test hosts.

use std::fmt;

use url::Url;

use crate::{
    config::Protocol,
    error::{AcquiringError, Result},
};

/// Register endpoint of the built-in REST preset.
const REST_REGISTER_URL: &str = "https://3dsec.sberbank.ru/payment/rest/register.do";

/// Order-status endpoint of the built-in REST preset.
const REST_STATUS_URL: &str = "https://3dsec.sberbank.ru/payment/rest/getOrderStatus.do";

/// Named gateway operation.
///
/// The name doubles as the operation tag carried by
/// [`AcquiringError::Request`] so callers can tell which call was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Order registration (`register.do`).
    Register,
    /// Order status query (`getOrderStatus.do`).
    Status,
}

impl Operation {
    /// Returns the operation name as used in error reporting.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping from operation to gateway URL.
///
/// # Examples
///
/// ```
/// use sber_acquiring::EndpointSet;
///
/// let endpoints = EndpointSet::custom(
///     "https://securepayments.example/payment/rest/register.do",
///     "https://securepayments.example/payment/rest/getOrderStatus.do",
/// )
/// .unwrap();
///
/// assert!(endpoints.register_url().is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointSet {
    register: Option<Url>,
    status: Option<Url>,
}

impl EndpointSet {
    /// Returns the built-in REST endpoint set.
    #[must_use]
    pub fn rest() -> Self {
        let register = Url::parse(REST_REGISTER_URL).expect("built-in register URL is valid");
        let status = Url::parse(REST_STATUS_URL).expect("built-in status URL is valid");
        Self { register: Some(register), status: Some(status) }
    }

    /// Returns the SOAP endpoint set.
    ///
    /// The SOAP protocol is declared but has no URLs defined; operations on
    /// a client using this preset fail with a configuration error when the
    /// endpoint is resolved.
    #[must_use]
    pub fn soap() -> Self {
        Self { register: None, status: None }
    }

    /// Builds an endpoint set from explicit URLs.
    ///
    /// # Errors
    ///
    /// Returns [`AcquiringError::Config`] if either URL does not parse.
    pub fn custom(register: &str, status: &str) -> Result<Self> {
        let register = parse_endpoint_url(Operation::Register, register)?;
        let status = parse_endpoint_url(Operation::Status, status)?;
        Self::from_urls(register, status)
    }

    /// Builds an endpoint set from already-parsed URLs.
    ///
    /// # Errors
    ///
    /// Infallible today; returns `Result` for parity with
    /// [`EndpointSet::custom`].
    pub fn from_urls(register: Url, status: Url) -> Result<Self> {
        Ok(Self { register: Some(register), status: Some(status) })
    }

    /// Returns the preset matching a protocol selector.
    #[must_use]
    pub fn for_protocol(protocol: Protocol) -> Self {
        match protocol {
            Protocol::Rest => Self::rest(),
            Protocol::Soap => Self::soap(),
        }
    }

    /// Returns the register URL, if one is configured.
    #[must_use]
    pub fn register_url(&self) -> Option<&Url> {
        self.register.as_ref()
    }

    /// Returns the order-status URL, if one is configured.
    #[must_use]
    pub fn status_url(&self) -> Option<&Url> {
        self.status.as_ref()
    }

    /// Resolves the URL for an operation.
    pub(crate) fn url_for(&self, operation: Operation) -> Result<&Url> {
        let url = match operation {
            Operation::Register => self.register.as_ref(),
            Operation::Status => self.status.as_ref(),
        };
        url.ok_or_else(|| {
            AcquiringError::Config(format!("no {operation} endpoint configured"))
        })
    }
}

fn parse_endpoint_url(operation: Operation, raw: &str) -> Result<Url> {
    Url::parse(raw)
        .map_err(|e| AcquiringError::Config(format!("invalid {operation} endpoint '{raw}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Register.as_str(), "register");
        assert_eq!(Operation::Status.as_str(), "status");
        assert_eq!(Operation::Status.to_string(), "status");
    }

    #[test]
    fn test_rest_preset_points_at_gateway() {
        let endpoints = EndpointSet::rest();
        assert_eq!(
            endpoints.register_url().unwrap().as_str(),
            "https://3dsec.sberbank.ru/payment/rest/register.do"
        );
        assert_eq!(
            endpoints.status_url().unwrap().as_str(),
            "https://3dsec.sberbank.ru/payment/rest/getOrderStatus.do"
        );
    }

    #[test]
    fn test_soap_preset_has_no_urls() {
        let endpoints = EndpointSet::soap();
        assert!(endpoints.register_url().is_none());
        assert!(endpoints.status_url().is_none());
    }

    #[test]
    fn test_for_protocol_picks_preset() {
        assert_eq!(EndpointSet::for_protocol(Protocol::Rest), EndpointSet::rest());
        assert_eq!(EndpointSet::for_protocol(Protocol::Soap), EndpointSet::soap());
    }

    #[test]
    fn test_custom_endpoints_parse() {
        let endpoints = EndpointSet::custom(
            "https://pay.example/register.do",
            "https://pay.example/getOrderStatus.do",
        )
        .unwrap();
        assert_eq!(endpoints.register_url().unwrap().host_str(), Some("pay.example"));
    }

    #[test]
    fn test_custom_endpoints_reject_bad_url() {
        let result = EndpointSet::custom("not a url", "https://pay.example/status.do");
        assert!(matches!(result, Err(AcquiringError::Config(_))));

        let result = EndpointSet::custom("https://pay.example/register.do", "::::");
        assert!(matches!(result, Err(AcquiringError::Config(_))));
    }

    #[test]
    fn test_url_for_resolves_configured_operations() {
        let endpoints = EndpointSet::rest();
        assert!(endpoints.url_for(Operation::Register).is_ok());
        assert!(endpoints.url_for(Operation::Status).is_ok());
    }

    #[test]
    fn test_url_for_reports_missing_endpoint() {
        let endpoints = EndpointSet::soap();
        let error = endpoints.url_for(Operation::Register).unwrap_err();
        assert!(matches!(error, AcquiringError::Config(_)));
        assert!(error.to_string().contains("register"));
    }
}
