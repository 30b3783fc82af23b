//! The acquiring client: construction and the gateway operations.

use tracing::{info, instrument};

use crate::{
    config::{Credentials, HttpConfig, Protocol, TransportMethod},
    endpoint::{EndpointSet, Operation},
    error::{AcquiringError, Result},
    models::{OrderStatus, RegisterRequest, Registration},
    request::{PASSWORD_FIELD, RequestParams},
    response,
    transport::HttpTransport,
};

/// Client for the payment-acquiring gateway.
///
/// Holds credentials and configuration immutably; every operation is an
/// independent request/response round trip, so sharing one client across
/// threads is safe.
///
/// # Examples
///
/// ```no_run
/// use sber_acquiring::{AcquiringClient, Credentials, Protocol, RegisterRequest, TransportMethod};
///
/// # fn main() -> sber_acquiring::Result<()> {
/// let client = AcquiringClient::new(
///     Credentials::new("merchant-api", "secret"),
///     Protocol::Rest,
///     TransportMethod::Post,
/// )?;
///
/// let request = RegisterRequest::new("order-20260805-001", 14_900, "https://shop.example/paid");
/// let registration = client.register(&request)?;
/// println!("redirect buyer to {}", registration.form_url);
///
/// let status = client.order_status(&registration.order_id)?;
/// println!("order is {:?}", status.state);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AcquiringClient {
    credentials: Credentials,
    protocol: Protocol,
    method: TransportMethod,
    endpoints: EndpointSet,
    transport: HttpTransport,
}

impl AcquiringClient {
    /// Creates a client using the built-in endpoint preset for `protocol`.
    ///
    /// # Errors
    ///
    /// Returns [`AcquiringError::Config`] when SOAP is selected together
    /// with a non-POST transport method, or when the HTTP client cannot be
    /// built.
    pub fn new(
        credentials: Credentials,
        protocol: Protocol,
        method: TransportMethod,
    ) -> Result<Self> {
        let endpoints = EndpointSet::for_protocol(protocol);
        Self::with_endpoints(credentials, protocol, method, endpoints)
    }

    /// Creates a client with an explicit endpoint mapping.
    ///
    /// # Errors
    ///
    /// Same conditions as [`AcquiringClient::new`].
    pub fn with_endpoints(
        credentials: Credentials,
        protocol: Protocol,
        method: TransportMethod,
        endpoints: EndpointSet,
    ) -> Result<Self> {
        Self::with_http_config(credentials, protocol, method, endpoints, &HttpConfig::default())
    }

    /// Creates a client with explicit endpoints and HTTP tuning.
    ///
    /// # Errors
    ///
    /// Returns [`AcquiringError::Config`] when SOAP is selected together
    /// with a non-POST transport method or the tuning values are out of
    /// bounds, and [`AcquiringError::Http`] when the HTTP client cannot be
    /// built.
    pub fn with_http_config(
        credentials: Credentials,
        protocol: Protocol,
        method: TransportMethod,
        endpoints: EndpointSet,
        http: &HttpConfig,
    ) -> Result<Self> {
        if protocol == Protocol::Soap && method != TransportMethod::Post {
            return Err(AcquiringError::Config(
                "SOAP requests must be sent with the POST transport method".to_owned(),
            ));
        }
        let transport = HttpTransport::new(http)?;
        Ok(Self { credentials, protocol, method, endpoints, transport })
    }

    /// Returns the configured protocol selector.
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    /// Returns the configured transport method.
    #[must_use]
    pub fn transport_method(&self) -> TransportMethod {
        self.method
    }

    /// Returns the endpoint mapping in use.
    #[must_use]
    pub fn endpoints(&self) -> &EndpointSet {
        &self.endpoints
    }

    /// Registers an order with the gateway.
    ///
    /// Returns the gateway-assigned order identifier and the payment-page
    /// URL to redirect the buyer to.
    ///
    /// # Errors
    ///
    /// - [`AcquiringError::Request`] when the gateway rejects the order
    /// - [`AcquiringError::Unavailable`] when the success payload is
    ///   incomplete
    /// - [`AcquiringError::NotImplemented`] on a SOAP client
    /// - [`AcquiringError::Config`] when no register endpoint is configured
    /// - transport errors per [`AcquiringError`]
    #[instrument(skip_all, fields(order_number = %request.order_number()))]
    pub fn register(&self, request: &RegisterRequest) -> Result<Registration> {
        let url = self.endpoints.url_for(Operation::Register)?;
        let params = request.to_params(&self.credentials);
        let doc = self.transport.submit(self.protocol, self.method, url, &params)?;
        let registration = response::parse_registration(&doc)?;
        info!(order_id = %registration.order_id, "order registered");
        Ok(registration)
    }

    /// Queries the state of a registered order.
    ///
    /// `order_id` is the gateway's identifier, as returned by
    /// [`AcquiringClient::register`], not the caller's order number.
    ///
    /// # Errors
    ///
    /// Same classification as [`AcquiringClient::register`], tagged with
    /// the `status` operation.
    #[instrument(skip_all, fields(order_id = %order_id))]
    pub fn order_status(&self, order_id: &str) -> Result<OrderStatus> {
        let url = self.endpoints.url_for(Operation::Status)?;
        let params = self.status_params(order_id);
        let doc = self.transport.submit(self.protocol, self.method, url, &params)?;
        let status = response::parse_order_status(doc)?;
        info!(state = ?status.state, "order status fetched");
        Ok(status)
    }

    fn status_params(&self, order_id: &str) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert("userName", self.credentials.username());
        params.insert(PASSWORD_FIELD, self.credentials.password());
        params.insert("orderId", order_id);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("store", "secret")
    }

    fn custom_endpoints() -> EndpointSet {
        EndpointSet::custom(
            "https://gateway.invalid/register.do",
            "https://gateway.invalid/getOrderStatus.do",
        )
        .unwrap()
    }

    #[test]
    fn test_soap_with_get_is_rejected_at_construction() {
        for (username, password) in [("store", "secret"), ("", ""), ("a", "b")] {
            let result = AcquiringClient::new(
                Credentials::new(username, password),
                Protocol::Soap,
                TransportMethod::Get,
            );
            assert!(matches!(result.unwrap_err(), AcquiringError::Config(_)));
        }
    }

    #[test]
    fn test_soap_with_post_constructs() {
        let client =
            AcquiringClient::new(credentials(), Protocol::Soap, TransportMethod::Post).unwrap();
        assert_eq!(client.protocol(), Protocol::Soap);
        assert_eq!(client.transport_method(), TransportMethod::Post);
    }

    #[test]
    fn test_rest_client_uses_rest_preset() {
        let client =
            AcquiringClient::new(credentials(), Protocol::Rest, TransportMethod::Post).unwrap();
        assert_eq!(client.endpoints(), &EndpointSet::rest());
    }

    #[test]
    fn test_endpoint_override_is_kept() {
        let client = AcquiringClient::with_endpoints(
            credentials(),
            Protocol::Rest,
            TransportMethod::Get,
            custom_endpoints(),
        )
        .unwrap();
        assert_eq!(
            client.endpoints().register_url().unwrap().host_str(),
            Some("gateway.invalid")
        );
    }

    #[test]
    fn test_invalid_http_config_is_rejected() {
        let http = HttpConfig { timeout_secs: 0, connect_timeout_secs: 10 };
        let result = AcquiringClient::with_http_config(
            credentials(),
            Protocol::Rest,
            TransportMethod::Post,
            EndpointSet::rest(),
            &http,
        );
        assert!(matches!(result.unwrap_err(), AcquiringError::Config(_)));
    }

    #[test]
    fn test_soap_register_fails_not_implemented_without_network() {
        let client = AcquiringClient::with_endpoints(
            credentials(),
            Protocol::Soap,
            TransportMethod::Post,
            custom_endpoints(),
        )
        .unwrap();

        let request = RegisterRequest::new("order-1", 100, "https://shop.example/paid");
        assert!(matches!(
            client.register(&request).unwrap_err(),
            AcquiringError::NotImplemented("SOAP transport")
        ));
    }

    #[test]
    fn test_soap_preset_reports_missing_endpoint_first() {
        let client =
            AcquiringClient::new(credentials(), Protocol::Soap, TransportMethod::Post).unwrap();

        let request = RegisterRequest::new("order-1", 100, "https://shop.example/paid");
        assert!(matches!(client.register(&request).unwrap_err(), AcquiringError::Config(_)));
    }

    #[test]
    fn test_soap_order_status_fails_not_implemented_without_network() {
        let client = AcquiringClient::with_endpoints(
            credentials(),
            Protocol::Soap,
            TransportMethod::Post,
            custom_endpoints(),
        )
        .unwrap();

        assert!(matches!(
            client.order_status("deadbeef").unwrap_err(),
            AcquiringError::NotImplemented("SOAP transport")
        ));
    }

    #[test]
    fn test_status_params_carry_credentials_and_order_id() {
        let client =
            AcquiringClient::new(credentials(), Protocol::Rest, TransportMethod::Post).unwrap();
        let params = client.status_params("gw-order-17");

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("userName").unwrap().render(), "store");
        assert_eq!(params.get("password").unwrap().render(), "secret");
        assert_eq!(params.get("orderId").unwrap().render(), "gw-order-17");
    }
}
