//! Mock client implementation for testing.

use super::{FindOptions, PaymentApi, ReplyStream};
use crate::error::KassaError;
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Canned behavior of [`MockApi`].
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Successful reply with this body, streamed in small chunks.
    Body(String),
    /// Transport failure.
    NetworkError(String),
    /// Non-success reply from the gateway.
    ApiError { status: u16, body: String },
    /// Never completes.
    Pending,
}

/// Mock Kassa client returning canned replies.
///
/// Replies are served in order; the last one repeats forever.
pub struct MockApi {
    replies: Mutex<VecDeque<MockReply>>,
    calls: Mutex<Vec<(String, Option<FindOptions>)>>,
}

impl MockApi {
    pub fn new(reply: MockReply) -> Self {
        Self::with_replies(vec![reply])
    }

    pub fn with_replies(replies: Vec<MockReply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_body(body: impl Into<String>) -> Self {
        Self::new(MockReply::Body(body.into()))
    }

    /// Payment ids and options of every lookup made so far.
    pub fn calls(&self) -> Vec<(String, Option<FindOptions>)> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl PaymentApi for MockApi {
    async fn payment_find(
        &self,
        payment_id: &str,
        options: Option<&FindOptions>,
    ) -> Result<ReplyStream, KassaError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((payment_id.to_string(), options.cloned()));

        let reply = {
            let mut replies = self
                .replies
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if replies.len() > 1 {
                replies.pop_front()
            } else {
                replies.front().cloned()
            }
        };

        match reply.unwrap_or(MockReply::Pending) {
            MockReply::Body(body) => {
                let chunks: Vec<Result<Bytes, KassaError>> = body
                    .as_bytes()
                    .chunks(16)
                    .map(|chunk| Ok(Bytes::copy_from_slice(chunk)))
                    .collect();

                Ok(Box::pin(futures::stream::iter(chunks)))
            }
            MockReply::NetworkError(message) => Err(KassaError::Network(message)),
            MockReply::ApiError { status, body } => Err(KassaError::from_reply(status, &body)),
            MockReply::Pending => {
                futures::future::pending::<()>().await;
                Err(KassaError::Canceled)
            }
        }
    }
}
