//! Yandex.Kassa API client abstractions.
//!
//! Resources talk to the gateway through the [`PaymentApi`] trait so they can
//! run against the real HTTP client or an in-process mock.

pub mod http;
pub mod mock;

pub use http::ApiClient;
pub use mock::{MockApi, MockReply};

use crate::error::KassaError;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;

/// Body of a successful gateway reply, delivered in chunks.
///
/// Dropping the stream releases the underlying connection.
pub type ReplyStream = Pin<Box<dyn Stream<Item = Result<Bytes, KassaError>> + Send>>;

/// Extra query parameters for a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindOptions {
    pub query: Vec<(String, String)>,
}

impl FindOptions {
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

/// Payment endpoints of the gateway.
#[async_trait]
pub trait PaymentApi: Send + Sync {
    /// Fetch the current state of a payment as raw JSON.
    async fn payment_find(
        &self,
        payment_id: &str,
        options: Option<&FindOptions>,
    ) -> Result<ReplyStream, KassaError>;
}
