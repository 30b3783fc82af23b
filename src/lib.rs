//! Typed client for the Sberbank payment-acquiring REST API.
//!
//! The gateway exposes a small fixed set of operations (register an order,
//! query its status) over `application/x-www-form-urlencoded` HTTP with
//! JSON responses. This crate builds the request payloads, submits them,
//! and maps responses and errors into typed results. There is no protocol
//! design here: the work is faithful field mapping and error
//! classification against an external, fixed wire contract.
//!
//! # Quick Start
//!
//! ```no_run
//! use sber_acquiring::{AcquiringClient, Credentials, Protocol, RegisterRequest, TransportMethod};
//!
//! # fn main() -> sber_acquiring::Result<()> {
//! let client = AcquiringClient::new(
//!     Credentials::new("merchant-api", "secret"),
//!     Protocol::Rest,
//!     TransportMethod::Post,
//! )?;
//!
//! let request = RegisterRequest::new("order-20260805-001", 14_900, "https://shop.example/paid")
//!     .fail_url("https://shop.example/failed")
//!     .description("Subscription renewal");
//!
//! let registration = client.register(&request)?;
//! println!("redirect buyer to {}", registration.form_url);
//!
//! let status = client.order_status(&registration.order_id)?;
//! println!("order is {:?}", status.state);
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`client`]: the client itself and the gateway operations
//! - [`config`]: credentials, protocol/transport selectors, HTTP tuning
//! - [`endpoint`]: operation-to-URL presets and overrides
//! - [`models`]: request and response value objects
//! - [`error`]: the failure taxonomy
//!
//! # Error Handling
//!
//! All operations return [`Result<T, AcquiringError>`](error::Result). The
//! taxonomy distinguishes an explicit gateway rejection
//! ([`AcquiringError::Request`]) from an HTTP-200 response whose success
//! payload is incomplete ([`AcquiringError::Unavailable`], treated as
//! transient), and both from transport-level failures. Nothing is retried
//! internally.
//!
//! # Concurrency
//!
//! All I/O is synchronous and blocking, one round trip per call. The
//! client holds only immutable configuration, so a single instance may be
//! shared freely across threads.
//!
//! # Logging
//!
//! Wire exchanges emit [`tracing`] events (`debug` for the parameter set
//! with the password masked and for the response status, `trace` for the
//! raw body). The crate never installs a subscriber; that is the
//! application's choice.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod models;

mod request;
mod response;
mod transport;

pub use client::AcquiringClient;
pub use config::{Credentials, HttpConfig, Protocol, TransportMethod};
pub use endpoint::{EndpointSet, Operation};
pub use error::{AcquiringError, Result};
pub use models::{OrderState, OrderStatus, PageView, RegisterRequest, Registration};
