//! Billing configuration

use promptdeck_types::PriceId;

/// Checkout mode for a price
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutMode {
    /// One-time payment (pack purchase)
    Payment,
    /// Recurring subscription
    Subscription,
}

impl CheckoutMode {
    /// The mode string Stripe's checkout API expects
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::Subscription => "subscription",
        }
    }
}

/// Billing service configuration
#[derive(Debug, Clone)]
pub struct BillingConfig {
    /// Stripe secret key
    pub stripe_secret_key: String,
    /// Stripe webhook secret
    pub stripe_webhook_secret: String,
    /// The recurring premium-monthly price; everything else is one-time
    pub premium_monthly_price_id: Option<PriceId>,
    /// Success URL for checkout
    pub success_url: String,
    /// Cancel URL for checkout
    pub cancel_url: String,
    /// Return URL for the billing portal
    pub portal_return_url: String,
}

impl BillingConfig {
    /// Create a new billing config
    pub fn new(
        stripe_secret_key: impl Into<String>,
        stripe_webhook_secret: impl Into<String>,
    ) -> Self {
        Self {
            stripe_secret_key: stripe_secret_key.into(),
            stripe_webhook_secret: stripe_webhook_secret.into(),
            premium_monthly_price_id: None,
            success_url: "https://app.example.com/dashboard?success=true".to_string(),
            cancel_url: "https://app.example.com/pricing?canceled=true".to_string(),
            portal_return_url: "https://app.example.com/dashboard".to_string(),
        }
    }

    /// Set the recurring premium price ID
    pub fn with_premium_price(mut self, price_id: impl Into<String>) -> Self {
        self.premium_monthly_price_id = Some(PriceId::new(price_id));
        self
    }

    /// Set checkout and portal URLs
    pub fn with_urls(
        mut self,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
        portal_return_url: impl Into<String>,
    ) -> Self {
        self.success_url = success_url.into();
        self.cancel_url = cancel_url.into();
        self.portal_return_url = portal_return_url.into();
        self
    }

    /// Classify a price: the known recurring price checks out in
    /// subscription mode, anything else is a one-time payment
    pub fn checkout_mode(&self, price_id: &PriceId) -> CheckoutMode {
        if self.premium_monthly_price_id.as_ref() == Some(price_id) {
            CheckoutMode::Subscription
        } else {
            CheckoutMode::Payment
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn premium_price_checks_out_as_subscription() {
        let config = BillingConfig::new("sk_test", "whsec_test")
            .with_premium_price("price_premium_monthly");

        assert_eq!(
            config.checkout_mode(&PriceId::new("price_premium_monthly")),
            CheckoutMode::Subscription
        );
        assert_eq!(
            config.checkout_mode(&PriceId::new("price_starter_pack")),
            CheckoutMode::Payment
        );
    }

    #[test]
    fn without_premium_price_everything_is_payment_mode() {
        let config = BillingConfig::new("sk_test", "whsec_test");
        assert_eq!(
            config.checkout_mode(&PriceId::new("price_anything")),
            CheckoutMode::Payment
        );
    }
}
