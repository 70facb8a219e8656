//! Promptdeck Billing Core - Billing business logic
//!
//! Checkout session creation, billing portal access, Stripe integration,
//! and the webhook reconciler that applies payment events to local
//! purchase and subscription state.
//!
//! # Example
//!
//! ```rust,ignore
//! use promptdeck_billing_core::{BillingConfig, BillingService, StripeProvider};
//!
//! let config = BillingConfig::new("sk_test_...", "whsec_...")
//!     .with_premium_price("price_premium_monthly");
//!
//! let provider = Arc::new(StripeProvider::new(config.clone()));
//! let billing = BillingService::new(users, purchases, provider, config);
//!
//! // Create checkout session
//! let session = billing
//!     .create_checkout(user_id, "user@example.com", params)
//!     .await?;
//!
//! // Apply a webhook delivery
//! billing.process_webhook(&body, signature).await?;
//! ```

pub mod config;
pub mod error;
pub mod provider;
pub mod service;
pub mod stripe;
pub mod webhook;

pub use config::{BillingConfig, CheckoutMode};
pub use error::BillingError;
pub use provider::{CheckoutMetadata, CheckoutSessionRequest, PaymentProvider};
pub use service::{BillingService, CheckoutParams};
pub use stripe::StripeProvider;
pub use webhook::{WebhookEvent, WebhookEventData, WebhookEventType, WebhookHandler};

// Re-export session types from promptdeck-types for convenience
pub use promptdeck_types::{CheckoutSession, PortalSession};
