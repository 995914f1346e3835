use serde::Deserialize;
use thiserror::Error;

/// Errors produced while talking to the Yandex.Kassa API.
#[derive(Debug, Error)]
pub enum KassaError {
    #[error("Kassa client not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Kassa API error {status}: {code} - {description}")]
    Api {
        status: u16,
        code: String,
        description: String,
    },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Request canceled")]
    Canceled,

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<reqwest::Error> for KassaError {
    fn from(err: reqwest::Error) -> Self {
        KassaError::Network(err.to_string())
    }
}

impl KassaError {
    /// Build an API error from a non-success reply.
    ///
    /// The gateway answers failures with an error object; anything else in
    /// the body is kept verbatim as the description.
    pub fn from_reply(status: u16, body: &str) -> Self {
        match serde_json::from_str::<GatewayError>(body) {
            Ok(err) => {
                let description = match err.parameter {
                    Some(parameter) => format!("{} (parameter: {})", err.description, parameter),
                    None => err.description,
                };
                KassaError::Api {
                    status,
                    code: err.code,
                    description,
                }
            }
            Err(_) => KassaError::Api {
                status,
                code: "UNKNOWN".to_string(),
                description: body.to_string(),
            },
        }
    }

    /// Whether the gateway reported that the object does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, KassaError::Api { status: 404, .. })
    }
}

/// Error object returned by the gateway on failed requests.
#[derive(Debug, Deserialize)]
pub struct GatewayError {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: Option<String>,
    pub code: String,
    pub description: String,
    pub parameter: Option<String>,
}
