//! Error types for the acquiring client.
//!
//! This module defines all error conditions that can occur while talking to
//! the acquiring gateway. All errors implement the standard
//! [`std::error::Error`] trait via [`thiserror::Error`].
//!
//! # Error Categories
//!
//! - **Configuration** ([`AcquiringError::Config`]): the client was built
//!   with an invalid combination of settings
//! - **Protocol** ([`AcquiringError::NotImplemented`]): an unbuilt transport
//!   protocol was invoked
//! - **Domain** ([`AcquiringError::Request`]): the gateway explicitly
//!   rejected an operation
//! - **Availability** ([`AcquiringError::Unavailable`]): the gateway answered
//!   but the success payload is incomplete
//! - **Transport** ([`AcquiringError::Http`], [`AcquiringError::UnexpectedStatus`],
//!   [`AcquiringError::MalformedResponse`]): the HTTP exchange itself failed

use thiserror::Error;

use crate::endpoint::Operation;

/// Result type alias for acquiring operations.
///
/// All fallible functions in this crate return this type.
pub type Result<T> = std::result::Result<T, AcquiringError>;

/// Errors that can occur while registering or querying orders.
///
/// Nothing is retried or suppressed internally; every failure surfaces to
/// the caller of the operation that produced it.
#[must_use = "errors should be handled, propagated, or explicitly panicked"]
#[derive(Debug, Error)]
pub enum AcquiringError {
    /// The client was constructed with invalid settings.
    ///
    /// Raised when SOAP is selected together with a non-POST transport
    /// method, when a custom endpoint URL does not parse, when an operation
    /// has no endpoint configured, or when HTTP tuning values are out of
    /// bounds.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An unimplemented protocol path was invoked.
    ///
    /// The SOAP endpoint set is declared but SOAP body construction is
    /// explicitly unbuilt; submitting through a SOAP client fails with this
    /// error before any network access occurs.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    /// The gateway explicitly rejected the request.
    ///
    /// Carries the operation name, the gateway's error code, and its
    /// human-readable message (or a fallback when none was supplied).
    /// Typical causes are duplicate order numbers, bad credentials, and
    /// amounts below the gateway minimum.
    #[error("{operation} error {code}: {message}")]
    Request {
        /// Operation that was rejected.
        operation: Operation,
        /// Gateway error code, as received on the wire.
        code: String,
        /// Gateway error message, or the fallback text.
        message: String,
    },

    /// The gateway answered with HTTP 200 but the success payload is
    /// missing required fields and no error code was given.
    ///
    /// This is treated as transient remote unavailability, distinct from an
    /// explicit rejection: retrying later with the same order number is the
    /// expected recovery.
    #[error("service temporarily unavailable ({operation} response incomplete)")]
    Unavailable {
        /// Operation whose response was incomplete.
        operation: Operation,
    },

    /// The underlying HTTP exchange failed.
    ///
    /// Wraps [`reqwest::Error`]: connection refused, DNS failure, TLS
    /// errors, or the request/connect timeout elapsing.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered with a status other than 200.
    #[error("unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// The gateway answered with HTTP 200 but the body could not be used.
    ///
    /// Either the body is not a JSON object, or a success payload carries a
    /// field this client cannot interpret (for example an unknown order
    /// state code).
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}
