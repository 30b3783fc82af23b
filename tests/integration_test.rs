//! Integration tests for the acquiring client.
//!
//! Everything here exercises the public API up to the point where a real
//! gateway would be contacted; no test performs network I/O.

use sber_acquiring::{
    AcquiringClient, AcquiringError, Credentials, EndpointSet, PageView, Protocol,
    RegisterRequest, TransportMethod,
};

fn credentials() -> Credentials {
    Credentials::new("merchant-api", "secret")
}

fn offline_endpoints() -> EndpointSet {
    EndpointSet::custom(
        "https://gateway.invalid/payment/rest/register.do",
        "https://gateway.invalid/payment/rest/getOrderStatus.do",
    )
    .expect("endpoint URLs are valid")
}

#[test]
fn test_soap_without_post_is_a_configuration_error() {
    for (username, password) in [("merchant-api", "secret"), ("", ""), ("я", "пароль")] {
        let result = AcquiringClient::new(
            Credentials::new(username, password),
            Protocol::Soap,
            TransportMethod::Get,
        );
        assert!(
            matches!(result.unwrap_err(), AcquiringError::Config(_)),
            "SOAP+GET must be rejected regardless of credentials"
        );
    }
}

#[test]
fn test_soap_operations_fail_not_implemented_before_any_network_access() {
    // gateway.invalid is unroutable: reaching the network would surface an
    // Http error, not NotImplemented.
    let client = AcquiringClient::with_endpoints(
        credentials(),
        Protocol::Soap,
        TransportMethod::Post,
        offline_endpoints(),
    )
    .expect("SOAP with POST is a valid configuration");

    let request = RegisterRequest::new("order-1", 100, "https://shop.example/paid");
    assert!(matches!(
        client.register(&request).unwrap_err(),
        AcquiringError::NotImplemented("SOAP transport")
    ));
    assert!(matches!(
        client.order_status("gw-1").unwrap_err(),
        AcquiringError::NotImplemented("SOAP transport")
    ));
}

#[test]
fn test_soap_preset_has_no_endpoints_configured() {
    let client = AcquiringClient::new(credentials(), Protocol::Soap, TransportMethod::Post)
        .expect("SOAP with POST is a valid configuration");
    assert!(client.endpoints().register_url().is_none());
    assert!(client.endpoints().status_url().is_none());

    let request = RegisterRequest::new("order-1", 100, "https://shop.example/paid");
    let error = client.register(&request).unwrap_err();
    assert!(matches!(error, AcquiringError::Config(_)));
    assert!(error.to_string().contains("register"));
}

#[test]
fn test_invalid_endpoint_override_is_rejected_at_construction() {
    let endpoints = EndpointSet::custom("not a url", "https://gateway.invalid/status.do");
    assert!(matches!(endpoints.unwrap_err(), AcquiringError::Config(_)));
}

#[test]
fn test_rest_client_defaults_to_the_builtin_preset() {
    let client = AcquiringClient::new(credentials(), Protocol::Rest, TransportMethod::Post)
        .expect("REST client construction");

    assert_eq!(client.protocol(), Protocol::Rest);
    assert_eq!(client.transport_method(), TransportMethod::Post);
    assert_eq!(
        client.endpoints().register_url().unwrap().as_str(),
        "https://3dsec.sberbank.ru/payment/rest/register.do"
    );
    assert_eq!(
        client.endpoints().status_url().unwrap().as_str(),
        "https://3dsec.sberbank.ru/payment/rest/getOrderStatus.do"
    );
}

#[test]
fn test_get_transport_is_a_valid_rest_configuration() {
    let client = AcquiringClient::with_endpoints(
        credentials(),
        Protocol::Rest,
        TransportMethod::Get,
        offline_endpoints(),
    )
    .expect("REST with GET is a valid configuration");
    assert_eq!(client.transport_method(), TransportMethod::Get);
}

#[test]
fn test_register_request_builder_covers_the_full_field_set() {
    let extra = serde_json::json!({"department": "books"});
    let expires_at = chrono::NaiveDate::from_ymd_opt(2026, 9, 1)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();

    let request = RegisterRequest::new("order-20260805-001", 14_900, "https://shop.example/paid")
        .currency(978)
        .fail_url("https://shop.example/failed")
        .description("Subscription renewal")
        .language("EN")
        .page_view(PageView::Mobile)
        .client_id("client-42")
        .session_timeout(600)
        .expires_at(expires_at)
        .extra(extra.as_object().unwrap().clone());

    assert_eq!(request.order_number(), "order-20260805-001");
    assert_eq!(request.amount(), 14_900);
}
