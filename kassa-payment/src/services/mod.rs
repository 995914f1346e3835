pub mod payment;

pub use payment::PaymentResource;
