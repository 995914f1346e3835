#![allow(dead_code)]

use kassa_core::client::{MockApi, MockReply};
use kassa_core::{ApiClient, KassaConfig};
use kassa_payment::PaymentResource;
use std::sync::Arc;
use wiremock::MockServer;

pub const TEST_PAYMENT_ID: &str = "22e12f66-000f-5000-8000-18db351245c7";
pub const TEST_SHOP_ID: &str = "665432";
pub const TEST_SECRET_KEY: &str = "test_secret";
/// `Basic base64("665432:test_secret")`.
pub const TEST_AUTH_HEADER: &str = "Basic NjY1NDMyOnRlc3Rfc2VjcmV0";

/// Payment waiting for capture, every optional field present.
pub const PAYMENT_FIXTURE: &str = r#"{
  "id": "22e12f66-000f-5000-8000-18db351245c7",
  "status": "waiting_for_capture",
  "paid": true,
  "amount": {
    "value": "2.00",
    "currency": "RUB"
  },
  "created_at": "2018-07-18T10:51:18.139Z",
  "description": "Order #72",
  "payment_method": {
    "type": "bank_card",
    "id": "22e12f66-000f-5000-8000-18db351245c7",
    "saved": false,
    "card": {
      "first6": "555555",
      "last4": "4444",
      "expiry_month": "07",
      "expiry_year": "2022",
      "card_type": "MasterCard"
    },
    "title": "Bank card *4444"
  },
  "recipient": {
    "account_id": "100001",
    "gateway_id": "1000001"
  },
  "requestor": {
    "type": "merchant",
    "account_id": "100001"
  },
  "refundable": false,
  "test": false,
  "confirmation": {
    "type": "redirect",
    "confirmation_url": "https://money.yandex.ru/payments/external/confirmation?orderId=22e12f66-000f-5000-8000-18db351245c7"
  }
}"#;

/// Freshly created payment: no description, method or confirmation.
pub const PENDING_PAYMENT_FIXTURE: &str = r#"{
  "id": "22e12f66-000f-5000-8000-18db351245c7",
  "status": "pending",
  "paid": false,
  "amount": {
    "value": "2.00",
    "currency": "RUB"
  },
  "created_at": "2018-07-18T10:51:18.139Z",
  "recipient": {
    "account_id": "100001"
  },
  "requestor": {
    "type": "merchant",
    "account_id": "100001"
  },
  "refundable": false,
  "test": true
}"#;

pub fn mock_resource(reply: MockReply) -> (Arc<MockApi>, PaymentResource) {
    let api = Arc::new(MockApi::new(reply));
    let resource = PaymentResource::new(api.clone(), TEST_PAYMENT_ID);
    (api, resource)
}

pub fn sequence_resource(replies: Vec<MockReply>) -> (Arc<MockApi>, PaymentResource) {
    let api = Arc::new(MockApi::with_replies(replies));
    let resource = PaymentResource::new(api.clone(), TEST_PAYMENT_ID);
    (api, resource)
}

pub fn body_resource(body: &str) -> (Arc<MockApi>, PaymentResource) {
    mock_resource(MockReply::Body(body.to_string()))
}

/// Kassa API stand-in served by wiremock.
pub struct TestGateway {
    pub server: MockServer,
    pub client: Arc<ApiClient>,
}

impl TestGateway {
    pub async fn spawn() -> Self {
        let server = MockServer::start().await;
        let config = KassaConfig::new(TEST_SHOP_ID, TEST_SECRET_KEY)
            .with_api_base_url(format!("{}/api/v3", server.uri()));
        let client = Arc::new(ApiClient::new(config).expect("Failed to build Kassa client"));

        Self { server, client }
    }

    pub fn resource(&self, payment_id: &str) -> PaymentResource {
        PaymentResource::new(self.client.clone(), payment_id)
    }
}
