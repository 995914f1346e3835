//! Payment resource binding for the Yandex.Kassa API.
//!
//! A [`PaymentResource`] is bound to one payment id and a shared
//! [`kassa_core::PaymentApi`] client. Looking it up replaces its
//! last-known state with what the gateway reports.
pub mod models;
pub mod services;

pub use models::{
    Amount, Confirmation, Payment, PaymentMethod, PaymentStatus, Recipient, Requestor,
};
pub use services::PaymentResource;
