//! Shared fixtures for stripe-client integration tests.

#![allow(dead_code)]

use stripe_client::{ClientOptions, Credential, StripeClient};
use stripe_core::Subscription;

/// Secret key used against mock servers.
pub const TEST_SECRET_KEY: &str = "sk_test_xxx";

/// `Authorization` header reqwest sends for [`TEST_SECRET_KEY`] with no password.
pub const TEST_BASIC_AUTH: &str = "Basic c2tfdGVzdF94eHg6";

pub const PLAN_JSON: &str = r#"{
    "id": "individual-monthly",
    "object": "plan",
    "amount": 1700,
    "created": 1517356800,
    "currency": "usd",
    "interval": "month",
    "interval_count": 1,
    "metadata": {},
    "nickname": "Individual Monthly"
}"#;

pub const COUPON_JSON: &str = r#"{
    "id": "student-discount",
    "object": "coupon",
    "amount_off": null,
    "duration": "forever",
    "duration_in_months": null,
    "name": "Student Discount",
    "percent_off": 50,
    "valid": true
}"#;

pub const CUSTOMER_JSON: &str = r#"{
    "id": "cus_test",
    "object": "customer",
    "business_vat_id": null,
    "created": 1517356800,
    "default_source": "card_test",
    "description": "Blob",
    "email": "blob@pointfree.co",
    "metadata": {},
    "sources": {
        "object": "list",
        "has_more": false,
        "data": [{
            "id": "card_test",
            "brand": "Visa",
            "customer": "cus_test",
            "exp_month": 1,
            "exp_year": 2030,
            "last4": "4242"
        }]
    }
}"#;

pub const CARD_DECLINED_JSON: &str = r#"{
    "error": {
        "type": "card_error",
        "code": "card_declined",
        "decline_code": "insufficient_funds",
        "message": "Your card has insufficient funds.",
        "param": "source"
    }
}"#;

/// A subscription with one item, or none.
pub fn subscription_json(with_item: bool) -> String {
    let items = if with_item {
        format!(
            r#"[{{"id": "si_test", "object": "subscription_item", "created": 1517356800,
                 "plan": {PLAN_JSON}, "quantity": 1}}]"#
        )
    } else {
        "[]".to_string()
    };

    format!(
        r#"{{
            "id": "sub_test",
            "object": "subscription",
            "canceled_at": null,
            "cancel_at_period_end": false,
            "created": 1517356800,
            "current_period_start": 1517356800,
            "current_period_end": 1519776000,
            "customer": {CUSTOMER_JSON},
            "discount": null,
            "ended_at": null,
            "items": {{"object": "list", "has_more": false, "data": {items}}},
            "plan": {PLAN_JSON},
            "quantity": 1,
            "start": 1517356800,
            "status": "active"
        }}"#
    )
}

pub fn subscription(with_item: bool) -> Subscription {
    serde_json::from_str(&subscription_json(with_item)).expect("valid subscription fixture")
}

/// A client pointed at a mock server's `/v1` prefix.
pub fn client_for(server_uri: &str) -> StripeClient {
    StripeClient::with_options(
        Credential::secret_key(TEST_SECRET_KEY),
        &ClientOptions::with_base_url(format!("{server_uri}/v1")),
    )
    .expect("client builds")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("stripe_client=debug")
        .try_init();
}
