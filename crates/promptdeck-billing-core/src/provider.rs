//! Payment provider abstraction

use async_trait::async_trait;

use promptdeck_types::{CheckoutSession, PortalSession, PriceId};

use crate::config::CheckoutMode;
use crate::BillingError;

/// Metadata attached to a checkout session so the asynchronous webhook can
/// recover the local identity and what was bought. The processor knows
/// nothing else about our users.
#[derive(Debug, Clone)]
pub struct CheckoutMetadata {
    /// Local user ID, echoed back in `checkout.session.completed`
    pub user_id: String,
    /// Pack being purchased, for one-time checkouts
    pub pack_id: Option<String>,
    /// Subscription plan name, for subscription checkouts
    pub subscription_type: Option<String>,
}

/// A checkout session to create with the processor
#[derive(Debug, Clone)]
pub struct CheckoutSessionRequest {
    /// Price to charge
    pub price_id: PriceId,
    /// Payment or subscription mode
    pub mode: CheckoutMode,
    /// Customer email to prefill
    pub customer_email: String,
    /// Identity correlation metadata
    pub metadata: CheckoutMetadata,
    /// Redirect after successful payment
    pub success_url: String,
    /// Redirect after abandoning checkout
    pub cancel_url: String,
}

/// Payment provider trait
///
/// Abstracts payment processing to allow different providers (Stripe, etc.)
/// and in-memory fakes in tests.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Create a hosted checkout session
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, BillingError>;

    /// Create a customer billing-portal session
    async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, BillingError>;
}
