//! kassa-core: configuration, errors, logging and the HTTP client shared by
//! the Yandex.Kassa resource bindings.
pub mod client;
pub mod config;
pub mod error;
pub mod observability;

pub use client::{ApiClient, FindOptions, PaymentApi, ReplyStream};
pub use config::KassaConfig;
pub use error::KassaError;
