//! Ordered wire-parameter mapping and form encoding.
//!
//! The gateway distinguishes absent keys from empty ones, so the parameter
//! set is built explicitly per operation and keys are only ever inserted,
//! never defaulted. Insertion order is preserved through encoding.

use std::fmt;

use serde_json::Value;
use url::form_urlencoded;

/// Wire name of the credential field that must never be logged.
pub(crate) const PASSWORD_FIELD: &str = "password";

/// A single form-parameter value.
///
/// Primitives are rendered as plain text; [`ParamValue::Json`] carries a
/// nested structured value that is serialized as one JSON document under a
/// single key rather than flattened into separate form fields.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ParamValue {
    Text(String),
    Number(u64),
    Json(Value),
}

impl ParamValue {
    /// Renders the value as it appears on the wire, before percent-encoding.
    pub(crate) fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => number.to_string(),
            Self::Json(value) => value.to_string(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<u16> for ParamValue {
    fn from(value: u16) -> Self {
        Self::Number(u64::from(value))
    }
}

impl From<Value> for ParamValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

/// Ordered mapping of wire field names to values for one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RequestParams {
    entries: Vec<(&'static str, ParamValue)>,
}

impl RequestParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a field. Callers are responsible for not inserting a key
    /// twice; the gateway contract has no repeated fields.
    pub(crate) fn insert(&mut self, key: &'static str, value: impl Into<ParamValue>) {
        self.entries.push((key, value.into()));
    }

    #[cfg(test)]
    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Serializes the mapping as `application/x-www-form-urlencoded` data,
    /// preserving insertion order.
    pub(crate) fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, &value.render());
        }
        serializer.finish()
    }
}

/// Log-safe rendering: the password value is masked, everything else is
/// shown unencoded.
impl fmt::Display for RequestParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in &self.entries {
            if !first {
                f.write_str("&")?;
            }
            first = false;
            if *key == PASSWORD_FIELD {
                write!(f, "{key}=********")?;
            } else {
                write!(f, "{key}={}", value.render())?;
            }
        }
        Ok(())
    }
}
