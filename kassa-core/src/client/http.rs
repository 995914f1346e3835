//! HTTP implementation of the Kassa API client.

use super::{FindOptions, PaymentApi, ReplyStream};
use crate::config::KassaConfig;
use crate::error::KassaError;
use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, Url};
use secrecy::ExposeSecret;

/// Kassa client backed by `reqwest`.
///
/// Requests are authenticated with the shop id and secret key over HTTP
/// basic auth. Nothing is retried.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: KassaConfig,
}

impl ApiClient {
    pub fn new(config: KassaConfig) -> Result<Self, KassaError> {
        let client = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self { client, config })
    }

    /// Check if credentials are set.
    pub fn is_configured(&self) -> bool {
        !self.config.shop_id.is_empty() && !self.config.secret_key.expose_secret().is_empty()
    }

    pub fn config(&self) -> &KassaConfig {
        &self.config
    }

    /// `{api_base_url}/payments/{id}` with the id percent-encoded as one
    /// path segment.
    fn payment_url(&self, payment_id: &str) -> Result<Url, KassaError> {
        let mut url = Url::parse(&self.config.api_base_url).map_err(|e| {
            KassaError::NotConfigured(format!(
                "invalid api_base_url {:?}: {}",
                self.config.api_base_url, e
            ))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                KassaError::NotConfigured(format!(
                    "api_base_url {:?} cannot carry a path",
                    self.config.api_base_url
                ))
            })?
            .pop_if_empty()
            .push("payments")
            .push(payment_id);

        Ok(url)
    }
}

#[async_trait]
impl PaymentApi for ApiClient {
    async fn payment_find(
        &self,
        payment_id: &str,
        options: Option<&FindOptions>,
    ) -> Result<ReplyStream, KassaError> {
        if !self.is_configured() {
            return Err(KassaError::NotConfigured(
                "shop_id and secret_key must be set".to_string(),
            ));
        }

        if payment_id.trim().is_empty() || payment_id.contains('/') {
            return Err(KassaError::InvalidRequest(format!(
                "invalid payment id: {:?}",
                payment_id
            )));
        }

        let url = self.payment_url(payment_id)?;
        let mut request = self.client.get(url.clone()).basic_auth(
            &self.config.shop_id,
            Some(self.config.secret_key.expose_secret()),
        );

        if let Some(options) = options.filter(|o| !o.is_empty()) {
            request = request.query(&options.query);
        }

        tracing::debug!(payment_id = %payment_id, url = %url, "Sending Kassa payment lookup");

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(
                        payment_id = %payment_id,
                        status = %status,
                        error = %e,
                        "Failed to read Kassa error body"
                    );
                    String::new()
                }
            };
            let err = KassaError::from_reply(status.as_u16(), &body);
            tracing::error!(
                payment_id = %payment_id,
                status = %status,
                error = %err,
                "Kassa payment lookup failed"
            );
            return Err(err);
        }

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(KassaError::from));

        Ok(Box::pin(body))
    }
}
