//! Payment resource.
//!
//! Wraps a payment id and the client used to query it. Lookups go through
//! [`PaymentApi::payment_find`]; capture and cancel do not contact the
//! gateway yet.

use crate::models::Payment;
use futures::StreamExt;
use kassa_core::{KassaError, PaymentApi};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct PaymentResource {
    client: Arc<dyn PaymentApi>,
    id: String,
    payment: Option<Payment>,
}

impl fmt::Debug for PaymentResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentResource")
            .field("id", &self.id)
            .field("payment", &self.payment)
            .finish_non_exhaustive()
    }
}

impl PaymentResource {
    /// Bind a payment id to a client. Does not touch the network.
    pub fn new(client: Arc<dyn PaymentApi>, payment_id: impl Into<String>) -> Self {
        Self {
            client,
            id: payment_id.into(),
            payment: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Last state reported by the gateway, `None` until a lookup succeeds.
    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn into_payment(self) -> Option<Payment> {
        self.payment
    }

    /// Fetch the current state of the payment.
    ///
    /// On success the previous state is replaced as a whole. On failure the
    /// error is returned as is and the resource is left untouched.
    pub async fn find(&mut self, cancel: &CancellationToken) -> Result<&Self, KassaError> {
        let payment = tokio::select! {
            biased;

            _ = cancel.cancelled() => {
                tracing::warn!(payment_id = %self.id, "Payment lookup canceled");
                return Err(KassaError::Canceled);
            }
            result = self.fetch() => result?,
        };

        if payment.id != self.id {
            tracing::warn!(
                payment_id = %self.id,
                reported_id = %payment.id,
                "Kassa reported a different payment id, keeping the requested one"
            );
        }

        tracing::info!(
            payment_id = %self.id,
            status = %payment.status,
            paid = payment.paid,
            "Payment state refreshed"
        );

        self.payment = Some(payment);
        Ok(&*self)
    }

    async fn fetch(&self) -> Result<Payment, KassaError> {
        let mut reply = self.client.payment_find(&self.id, None).await?;

        let mut body = Vec::new();
        while let Some(chunk) = reply.next().await {
            body.extend_from_slice(&chunk?);
        }
        drop(reply);

        tracing::debug!(
            payment_id = %self.id,
            body = %String::from_utf8_lossy(&body),
            "Kassa payment lookup response"
        );

        Ok(serde_json::from_slice(&body)?)
    }

    /// Confirm readiness to accept the payment.
    ///
    /// Currently returns the resource unchanged without calling the gateway.
    pub fn capture(&self) -> Result<&Self, KassaError> {
        Ok(self)
    }

    /// Cancel a payment in `waiting_for_capture`.
    ///
    /// Currently returns the resource unchanged without calling the gateway.
    pub fn cancel(&self) -> Result<&Self, KassaError> {
        Ok(self)
    }
}
