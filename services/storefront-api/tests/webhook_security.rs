//! Webhook security tests
//!
//! Drive the verification layer the `/webhooks/stripe` endpoint hands raw
//! bodies to: header format, signature checks, freshness rules, and event
//! parsing.

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use promptdeck_billing_core::{WebhookEventData, WebhookEventType, WebhookHandler};

const SECRET: &str = "whsec_test_secret_key";

/// Generate a valid Stripe webhook signature header for testing
fn generate_stripe_signature(payload: &[u8], secret: &str, timestamp: i64) -> String {
    let signed_payload = format!("{}.{}", timestamp, std::str::from_utf8(payload).unwrap());

    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(signed_payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());

    format!("t={},v1={}", timestamp, signature)
}

/// Generate a webhook payload for testing
fn test_webhook_payload(event_type: &str) -> Vec<u8> {
    let payload = serde_json::json!({
        "id": "evt_test_123",
        "type": event_type,
        "created": Utc::now().timestamp(),
        "data": {
            "object": {
                "id": "cs_test_123",
                "customer": "cus_test_123",
                "payment_intent": "pi_test_123",
                "amount_total": 1999,
                "metadata": {
                    "userId": "4f3a0fdf-2f0f-4b0b-9c1c-6a2f9d6e1a11",
                    "packId": "9a7b2c4d-1e3f-4a5b-8c9d-0e1f2a3b4c5d"
                }
            }
        }
    });
    serde_json::to_vec(&payload).unwrap()
}

#[test]
fn valid_signature_parses_checkout_event() {
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("checkout.session.completed");
    let signature = generate_stripe_signature(&payload, SECRET, Utc::now().timestamp());

    let event = handler
        .verify_and_parse(&payload, &signature)
        .expect("valid delivery should verify");

    assert_eq!(event.id, "evt_test_123");
    assert_eq!(event.event_type, WebhookEventType::CheckoutSessionCompleted);
    let WebhookEventData::CheckoutSession(data) = event.data else {
        panic!("expected checkout session data");
    };
    assert_eq!(data.session_id, "cs_test_123");
    assert_eq!(data.customer_id.as_deref(), Some("cus_test_123"));
    assert_eq!(data.payment_intent.as_deref(), Some("pi_test_123"));
    assert_eq!(data.amount_total, 1999);
    assert_eq!(
        data.metadata.get("userId").map(String::as_str),
        Some("4f3a0fdf-2f0f-4b0b-9c1c-6a2f9d6e1a11")
    );
}

#[test]
fn subscription_event_parses_status() {
    let handler = WebhookHandler::new(SECRET);
    let payload = serde_json::to_vec(&serde_json::json!({
        "id": "evt_test_sub",
        "type": "customer.subscription.updated",
        "created": Utc::now().timestamp(),
        "data": {
            "object": {
                "id": "sub_test_123",
                "customer": "cus_test_123",
                "status": "past_due"
            }
        }
    }))
    .unwrap();
    let signature = generate_stripe_signature(&payload, SECRET, Utc::now().timestamp());

    let event = handler
        .verify_and_parse(&payload, &signature)
        .expect("valid delivery should verify");

    let WebhookEventData::Subscription(data) = event.data else {
        panic!("expected subscription data");
    };
    assert_eq!(data.subscription_id, "sub_test_123");
    assert_eq!(data.customer_id, "cus_test_123");
    assert_eq!(data.status, "past_due");
}

#[test]
fn unknown_event_type_parses_to_raw() {
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("invoice.paid");
    let signature = generate_stripe_signature(&payload, SECRET, Utc::now().timestamp());

    let event = handler
        .verify_and_parse(&payload, &signature)
        .expect("unknown types still verify");

    assert_eq!(
        event.event_type,
        WebhookEventType::Unknown("invoice.paid".to_string())
    );
    assert!(matches!(event.data, WebhookEventData::Raw(_)));
}

#[test]
fn tampered_payload_is_rejected() {
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("checkout.session.completed");
    let signature = generate_stripe_signature(&payload, SECRET, Utc::now().timestamp());

    let mut tampered = payload.clone();
    let pos = tampered
        .windows(4)
        .position(|w| w == b"1999")
        .expect("amount present");
    tampered[pos] = b'9';

    assert!(handler.verify_and_parse(&tampered, &signature).is_err());
}

#[test]
fn signature_from_wrong_secret_is_rejected() {
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("checkout.session.completed");
    let signature =
        generate_stripe_signature(&payload, "whsec_other_secret", Utc::now().timestamp());

    assert!(handler.verify_and_parse(&payload, &signature).is_err());
}

#[test]
fn stale_and_future_timestamps_are_rejected() {
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("checkout.session.completed");
    let now = Utc::now().timestamp();

    // 5-minute tolerance window, in both directions
    let stale = generate_stripe_signature(&payload, SECRET, now - 400);
    assert!(handler.verify_and_parse(&payload, &stale).is_err());

    let future = generate_stripe_signature(&payload, SECRET, now + 400);
    assert!(handler.verify_and_parse(&payload, &future).is_err());
}

#[test]
fn malformed_signature_headers_are_rejected() {
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("checkout.session.completed");

    for header in ["v1=abc123", "t=1234567890", "", "invalid_format"] {
        assert!(
            handler.verify_and_parse(&payload, header).is_err(),
            "header {header:?} should be rejected"
        );
    }
}

#[test]
fn extra_signature_schemes_are_tolerated() {
    // Stripe sends v0 alongside v1; only v1 participates in verification
    let handler = WebhookHandler::new(SECRET);
    let payload = test_webhook_payload("checkout.session.completed");
    let signature = generate_stripe_signature(&payload, SECRET, Utc::now().timestamp());
    let with_v0 = format!("{signature},v0=deadbeef");

    assert!(handler.verify_and_parse(&payload, &with_v0).is_ok());
}
