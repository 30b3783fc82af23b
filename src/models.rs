//! Request and response value objects.
//!
//! Everything here is request/response-scoped: built for one call, consumed
//! by it, never cached. Wire field names follow the gateway contract
//! (`orderNumber`, `returnUrl`, `pageView`, ...), Rust field names follow
//! this crate.

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    config::Credentials,
    request::{PASSWORD_FIELD, RequestParams},
};

/// Payment-page variant requested from the gateway.
///
/// Serialized by variant name into the `pageView` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageView {
    /// Desktop payment page.
    #[default]
    Desktop,
    /// Mobile payment page.
    Mobile,
}

impl PageView {
    /// Returns the wire value (`DESKTOP` or `MOBILE`).
    ///
    /// # Examples
    ///
    /// ```
    /// use sber_acquiring::PageView;
    ///
    /// assert_eq!(PageView::Mobile.as_str(), "MOBILE");
    /// ```
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "DESKTOP",
            Self::Mobile => "MOBILE",
        }
    }
}

/// Order registration request.
///
/// Required fields are taken by [`RegisterRequest::new`]; everything else
/// has the gateway default and can be overridden with the builder methods.
/// Optional fields left unset (or set to an empty value) are omitted from
/// the submitted form entirely; the gateway treats absent keys differently
/// from empty ones.
///
/// # Examples
///
/// ```
/// use sber_acquiring::{PageView, RegisterRequest};
///
/// let request = RegisterRequest::new("order-20260805-001", 14_900, "https://shop.example/paid")
///     .currency(978)
///     .fail_url("https://shop.example/failed")
///     .description("Subscription renewal")
///     .page_view(PageView::Mobile)
///     .session_timeout(600);
///
/// assert_eq!(request.order_number(), "order-20260805-001");
/// assert_eq!(request.amount(), 14_900);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterRequest {
    order_number: String,
    amount: u64,
    return_url: String,
    currency: u16,
    fail_url: Option<String>,
    description: Option<String>,
    language: String,
    page_view: PageView,
    client_id: Option<String>,
    session_timeout_secs: u32,
    expires_at: Option<NaiveDateTime>,
    extra: Option<Map<String, Value>>,
}

impl RegisterRequest {
    /// Creates a registration request for an order.
    ///
    /// `order_number` is the caller's identifier and must be unique per
    /// store; `amount` is in minor currency units (kopecks for rubles);
    /// `return_url` is where the buyer lands after successful payment.
    #[must_use]
    pub fn new(
        order_number: impl Into<String>,
        amount: u64,
        return_url: impl Into<String>,
    ) -> Self {
        Self {
            order_number: order_number.into(),
            amount,
            return_url: return_url.into(),
            currency: 643,
            fail_url: None,
            description: None,
            language: "RU".to_owned(),
            page_view: PageView::default(),
            client_id: None,
            session_timeout_secs: 1200,
            expires_at: None,
            extra: None,
        }
    }

    /// Sets the ISO 4217 numeric currency code (default 643, rubles).
    #[must_use]
    pub fn currency(mut self, currency: u16) -> Self {
        self.currency = currency;
        self
    }

    /// Sets the URL the buyer is sent to after a failed payment.
    #[must_use]
    pub fn fail_url(mut self, fail_url: impl Into<String>) -> Self {
        self.fail_url = Some(fail_url.into());
        self
    }

    /// Sets the free-text order description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the payment-page language, ISO 639-1 (default `RU`).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the payment-page variant (default [`PageView::Desktop`]).
    #[must_use]
    pub fn page_view(mut self, page_view: PageView) -> Self {
        self.page_view = page_view;
        self
    }

    /// Sets the buyer's identifier in the store's own system.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Sets the payment-session duration in seconds (default 1200).
    #[must_use]
    pub fn session_timeout(mut self, seconds: u32) -> Self {
        self.session_timeout_secs = seconds;
        self
    }

    /// Sets an explicit order expiration timestamp.
    ///
    /// Serialized as ISO-8601 truncated to whole seconds; when unset the
    /// gateway derives the lifetime from the session timeout.
    #[must_use]
    pub fn expires_at(mut self, expires_at: NaiveDateTime) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Attaches extra structured parameters stored by the gateway.
    ///
    /// Passed through as one nested JSON document in the `jsonParams`
    /// field, not flattened into separate form fields.
    #[must_use]
    pub fn extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = Some(extra);
        self
    }

    /// Returns the caller's order identifier.
    #[must_use]
    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    /// Returns the amount in minor currency units.
    #[must_use]
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Builds the wire parameter mapping for this request.
    pub(crate) fn to_params(&self, credentials: &Credentials) -> RequestParams {
        let mut params = RequestParams::new();
        params.insert("userName", credentials.username());
        params.insert(PASSWORD_FIELD, credentials.password());
        params.insert("orderNumber", self.order_number.as_str());
        params.insert("amount", self.amount);
        params.insert("currency", self.currency);
        params.insert("returnUrl", self.return_url.as_str());
        params.insert("language", self.language.as_str());
        params.insert("pageView", self.page_view.as_str());
        params.insert("sessionTimeoutSecs", self.session_timeout_secs);
        if let Some(fail_url) = &self.fail_url
            && !fail_url.is_empty()
        {
            params.insert("failUrl", fail_url.as_str());
        }
        if let Some(description) = &self.description
            && !description.is_empty()
        {
            params.insert("description", description.as_str());
        }
        if let Some(client_id) = &self.client_id
            && !client_id.is_empty()
        {
            params.insert("clientId", client_id.as_str());
        }
        if let Some(extra) = &self.extra
            && !extra.is_empty()
        {
            params.insert("jsonParams", Value::Object(extra.clone()));
        }
        if let Some(expires_at) = self.expires_at {
            params.insert(
                "expirationDate",
                expires_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            );
        }
        params
    }
}

/// Successful order registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    /// Order identifier assigned by the gateway.
    pub order_id: String,
    /// Payment-page URL to redirect the buyer to.
    pub form_url: String,
}

/// Lifecycle state of a registered order, as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderState {
    /// Order registered, not yet paid (code 0).
    Registered,
    /// Amount held pending deposit, two-phase flow (code 1).
    Held,
    /// Amount fully authorized (code 2).
    Authorized,
    /// Authorization reversed (code 3).
    Reversed,
    /// Amount refunded (code 4).
    Refunded,
    /// ACS authorization initiated (code 5).
    AcsAuthorizationInitiated,
    /// Authorization declined (code 6).
    Declined,
}

impl OrderState {
    /// Maps a gateway state code to a variant.
    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Registered),
            1 => Some(Self::Held),
            2 => Some(Self::Authorized),
            3 => Some(Self::Reversed),
            4 => Some(Self::Refunded),
            5 => Some(Self::AcsAuthorizationInitiated),
            6 => Some(Self::Declined),
            _ => None,
        }
    }

    /// Returns the gateway state code for this variant.
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Registered => 0,
            Self::Held => 1,
            Self::Authorized => 2,
            Self::Reversed => 3,
            Self::Refunded => 4,
            Self::AcsAuthorizationInitiated => 5,
            Self::Declined => 6,
        }
    }
}

impl<'de> Deserialize<'de> for OrderState {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = i64::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown order state code {code}")))
    }
}

/// Successful order status query.
///
/// Only the state is guaranteed; the remaining fields appear once the buyer
/// has reached the payment page and entered card details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderStatus {
    /// Current order state.
    #[serde(rename = "OrderStatus")]
    pub state: OrderState,
    /// The caller's order number, echoed back.
    #[serde(rename = "OrderNumber")]
    pub order_number: Option<String>,
    /// Masked card number.
    #[serde(rename = "Pan")]
    pub pan: Option<String>,
    /// Card expiry, `YYYYMM`.
    #[serde(rename = "expiration")]
    pub expiration: Option<u64>,
    /// Cardholder name as entered on the payment page.
    #[serde(rename = "cardholderName")]
    pub cardholder_name: Option<String>,
    /// Payment amount in minor currency units.
    #[serde(rename = "Amount")]
    pub amount: Option<u64>,
    /// ISO 4217 numeric currency code.
    #[serde(rename = "currency")]
    pub currency: Option<u16>,
    /// Issuer approval code.
    #[serde(rename = "approvalCode")]
    pub approval_code: Option<String>,
    /// Buyer IP address observed by the gateway.
    #[serde(rename = "Ip")]
    pub ip: Option<String>,
}
