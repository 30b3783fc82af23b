//! Response-document parsing and error classification.
//!
//! The transport hands every operation a parsed JSON object; this module
//! decides what it means. Classification order matters: an explicit
//! gateway rejection wins over an incomplete success payload, and only a
//! payload that is neither is parsed into a success value.

use serde_json::{Map, Value};

use crate::{
    endpoint::Operation,
    error::{AcquiringError, Result},
    models::{OrderStatus, Registration},
};

/// Parsed response body: one flat JSON object.
pub(crate) type Document = Map<String, Value>;

/// The gateway's "no error" sentinel.
const NO_ERROR_CODE: &str = "0";

/// Fallback used when a rejection carries no message.
const DEFAULT_ERROR_MESSAGE: &str = "description not presented";

/// The status operation capitalizes its error keys; register does not.
const ERROR_CODE_FIELDS: [&str; 2] = ["errorCode", "ErrorCode"];
const ERROR_MESSAGE_FIELDS: [&str; 2] = ["errorMessage", "ErrorMessage"];

/// Fails with [`AcquiringError::Request`] when the document carries an
/// error code that is present and not the sentinel.
pub(crate) fn check_rejected(operation: Operation, doc: &Document) -> Result<()> {
    let Some(code) = text_field(doc, &ERROR_CODE_FIELDS) else {
        return Ok(());
    };
    if code == NO_ERROR_CODE {
        return Ok(());
    }
    let message = text_field(doc, &ERROR_MESSAGE_FIELDS)
        .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_owned());
    Err(AcquiringError::Request { operation, code, message })
}

/// Extracts a required success-path string field.
///
/// A missing field means the gateway returned an incomplete success
/// payload, classified as transient unavailability.
pub(crate) fn require_text(operation: Operation, doc: &Document, name: &str) -> Result<String> {
    let Some(value) = doc.get(name) else {
        return Err(AcquiringError::Unavailable { operation });
    };
    value.as_str().map(ToOwned::to_owned).ok_or_else(|| {
        AcquiringError::MalformedResponse(format!(
            "{operation} response field '{name}' is not a string"
        ))
    })
}

/// Classifies and parses a register response.
pub(crate) fn parse_registration(doc: &Document) -> Result<Registration> {
    check_rejected(Operation::Register, doc)?;
    let order_id = require_text(Operation::Register, doc, "orderId")?;
    let form_url = require_text(Operation::Register, doc, "formUrl")?;
    Ok(Registration { order_id, form_url })
}

/// Classifies and parses an order-status response.
pub(crate) fn parse_order_status(doc: Document) -> Result<OrderStatus> {
    check_rejected(Operation::Status, &doc)?;
    if !doc.contains_key("OrderStatus") {
        return Err(AcquiringError::Unavailable { operation: Operation::Status });
    }
    serde_json::from_value(Value::Object(doc))
        .map_err(|e| AcquiringError::MalformedResponse(format!("order status payload: {e}")))
}

fn text_field(doc: &Document, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| doc.get(*name)).map(render)
}

/// Renders a JSON scalar the way it compares on the wire: strings as-is,
/// everything else via its JSON representation.
fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
