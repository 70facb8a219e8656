//! Shared test utilities

pub mod mock_repos;

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

/// Generate a valid Stripe-style signature header for a payload
pub fn generate_stripe_signature(payload: &str, secret: &str) -> String {
    sign_with_timestamp(payload, secret, Utc::now().timestamp())
}

/// Generate a signature header with an explicit timestamp
pub fn sign_with_timestamp(payload: &str, secret: &str, timestamp: i64) -> String {
    let signed_payload = format!("{timestamp}.{payload}");
    let mut mac =
        Hmac::<Sha256>::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(signed_payload.as_bytes());
    let signature = hex::encode(mac.finalize().into_bytes());
    format!("t={timestamp},v1={signature}")
}
