//! Blocking HTTP transport.
//!
//! One synchronous request/response round trip per call: serialize the
//! parameter mapping as URL-encoded form data (UTF-8), carry it in a POST
//! body or a GET query string per the configured transport method, and
//! parse the body of a 200 response as a JSON object. Error codes inside
//! the document are each operation's business, not the transport's.

use reqwest::{StatusCode, blocking::Client, header::CONTENT_TYPE};
use tracing::{debug, instrument, trace};
use url::Url;

use crate::{
    config::{HttpConfig, Protocol, TransportMethod},
    error::{AcquiringError, Result},
    request::RequestParams,
    response::Document,
};

/// Content type the gateway expects on POST bodies.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=utf-8";

/// Blocking HTTP client with request and connect timeouts applied.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport from validated HTTP tuning.
    pub(crate) fn new(config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        Ok(Self { client })
    }

    /// Submits one request and returns the parsed response document.
    ///
    /// Fails with [`AcquiringError::NotImplemented`] before any network
    /// access when the protocol selector is SOAP.
    #[instrument(skip_all, fields(url = %url, method = ?method))]
    pub(crate) fn submit(
        &self,
        protocol: Protocol,
        method: TransportMethod,
        url: &Url,
        params: &RequestParams,
    ) -> Result<Document> {
        if protocol == Protocol::Soap {
            return Err(AcquiringError::NotImplemented("SOAP transport"));
        }

        debug!(params = %params, "submitting acquiring request");
        let encoded = params.encode();
        let response = match method {
            TransportMethod::Post => self
                .client
                .post(url.clone())
                .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
                .body(encoded)
                .send()?,
            TransportMethod::Get => self.client.get(attach_query(url, &encoded)).send()?,
        };

        let status = response.status();
        debug!(status = status.as_u16(), "received acquiring response");
        if status != StatusCode::OK {
            return Err(AcquiringError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text()?;
        trace!(body = %body, "acquiring response body");
        serde_json::from_str(&body).map_err(|e| {
            AcquiringError::MalformedResponse(format!("body is not a JSON object: {e}"))
        })
    }
}

/// Replaces the URL query with the encoded parameter string.
fn attach_query(url: &Url, encoded: &str) -> Url {
    let mut url = url.clone();
    url.set_query(Some(encoded));
    url
}
