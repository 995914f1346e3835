use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A payment as reported by Yandex.Kassa.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Payment {
    /// Payment identifier in Yandex.Kassa.
    pub id: String,
    pub status: PaymentStatus,
    pub amount: Amount,
    /// Shown in the merchant dashboard, up to 128 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub recipient: Recipient,
    /// Who initiated the payment or refund.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requestor: Option<Requestor>,
    /// Method used to pay, once the payer has chosen one.
    #[serde(
        rename = "payment_method",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub method: Option<PaymentMethod>,
    /// ISO 8601, e.g. `2017-11-03T11:52:31.827Z`.
    pub created_at: String,
    pub test: bool,
    pub paid: bool,
    /// Whether a refund can be issued through the API.
    pub refundable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation: Option<Confirmation>,
}

impl Payment {
    pub fn created_at_utc(&self) -> Result<DateTime<Utc>, chrono::ParseError> {
        DateTime::parse_from_rfc3339(&self.created_at).map(|dt| dt.with_timezone(&Utc))
    }
}

/// Payment status. Values the gateway adds later land in `Other` verbatim.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    WaitingForCapture,
    Succeeded,
    Canceled,
    #[serde(untagged)]
    Other(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::WaitingForCapture => "waiting_for_capture",
            PaymentStatus::Succeeded => "succeeded",
            PaymentStatus::Canceled => "canceled",
            PaymentStatus::Other(status) => status,
        }
    }

    /// Succeeded and canceled payments never change status again.
    pub fn is_final(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded | PaymentStatus::Canceled)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Money amount. The value is kept as a string to avoid rounding.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Amount {
    /// Decimal with a dot separator, e.g. `"100.00"`.
    pub value: String,
    /// ISO-4217 currency code.
    pub currency: String,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Recipient {
    /// Shop identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// Sub-account used to split payment flows within one shop.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Requestor {
    Merchant {
        account_id: String,
    },
    ThirdPartyClient {
        client_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        client_name: Option<String>,
    },
}

/// Payment method details.
///
/// Method-specific fields (card data, wallet account, ...) are kept in
/// `details` untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub saved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Scenario the payer goes through to confirm the payment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Confirmation {
    Redirect {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        return_url: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        enforce: Option<bool>,
    },
    External,
    Embedded {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_token: Option<String>,
    },
    Qr {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_data: Option<String>,
    },
    MobileApplication {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirmation_url: Option<String>,
    },
}
