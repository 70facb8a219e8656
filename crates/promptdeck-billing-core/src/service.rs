//! Billing service: checkout initiation and payment-event reconciliation

use std::sync::Arc;

use promptdeck_db::{CreatePurchase, PurchaseRepository, PurchaseRow, UserRepository};
use promptdeck_types::{
    CheckoutSession, PackId, PortalSession, PriceId, PurchaseRef, SubscriptionStatus,
    SubscriptionTier, UserId,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::config::BillingConfig;
use crate::error::BillingError;
use crate::provider::{CheckoutMetadata, CheckoutSessionRequest, PaymentProvider};
use crate::webhook::{
    CheckoutSessionData, SubscriptionData, WebhookEvent, WebhookEventData, WebhookHandler,
};

/// Parameters for creating a checkout session
#[derive(Debug, Clone)]
pub struct CheckoutParams {
    /// Price to charge
    pub price_id: PriceId,
    /// Pack being purchased, for one-time checkouts
    pub pack_id: Option<PackId>,
    /// Subscription plan name, for subscription checkouts
    pub subscription_type: Option<String>,
}

/// Billing service
///
/// Owns the checkout/portal flows and the webhook reconciler. Constructed
/// once at startup with its repositories and payment provider; handlers
/// receive it by reference through application state.
pub struct BillingService<U, P, Pr> {
    users: Arc<U>,
    purchases: Arc<P>,
    provider: Arc<Pr>,
    webhook: WebhookHandler,
    config: BillingConfig,
}

impl<U, P, Pr> BillingService<U, P, Pr>
where
    U: UserRepository,
    P: PurchaseRepository,
    Pr: PaymentProvider,
{
    /// Create a new billing service
    pub fn new(users: Arc<U>, purchases: Arc<P>, provider: Arc<Pr>, config: BillingConfig) -> Self {
        let webhook = WebhookHandler::new(config.stripe_webhook_secret.clone());
        Self {
            users,
            purchases,
            provider,
            webhook,
            config,
        }
    }

    /// Create a checkout session for an authenticated user.
    ///
    /// Purely delegation: no local state is written here. The user ID rides
    /// along as client reference and metadata so the completion webhook can
    /// find its way back.
    #[instrument(skip(self, email, params))]
    pub async fn create_checkout(
        &self,
        user_id: UserId,
        email: &str,
        params: CheckoutParams,
    ) -> Result<CheckoutSession, BillingError> {
        if params.price_id.is_empty() {
            return Err(BillingError::MissingPrice);
        }

        let mode = self.config.checkout_mode(&params.price_id);

        let request = CheckoutSessionRequest {
            price_id: params.price_id,
            mode,
            customer_email: email.to_string(),
            metadata: CheckoutMetadata {
                user_id: user_id.to_string(),
                pack_id: params.pack_id.map(|p| p.to_string()),
                subscription_type: params.subscription_type,
            },
            success_url: self.config.success_url.clone(),
            cancel_url: self.config.cancel_url.clone(),
        };

        let session = self.provider.create_checkout_session(&request).await?;

        info!(user_id = %user_id, mode = mode.as_str(), "Checkout session created");

        Ok(session)
    }

    /// Create a billing-portal session for a user with a stored customer
    /// reference
    #[instrument(skip(self))]
    pub async fn create_portal(&self, user_id: UserId) -> Result<PortalSession, BillingError> {
        let user = self
            .users
            .find_by_id(user_id.0)
            .await?
            .ok_or(BillingError::UserNotFound)?;

        let customer_id = user
            .stripe_customer_id
            .ok_or(BillingError::CustomerNotFound)?;

        self.provider
            .create_portal_session(&customer_id, &self.config.portal_return_url)
            .await
    }

    /// List a user's purchases, newest first
    pub async fn list_purchases(&self, user_id: UserId) -> Result<Vec<PurchaseRow>, BillingError> {
        Ok(self.purchases.list_by_user_id(user_id.0).await?)
    }

    /// Verify, parse, and apply a webhook delivery.
    ///
    /// Signature verification precedes all processing; a delivery that fails
    /// it mutates nothing.
    pub async fn process_webhook(
        &self,
        payload: &[u8],
        signature: &str,
    ) -> Result<(), BillingError> {
        let event = self.webhook.verify_and_parse(payload, signature)?;
        self.apply_event(event).await
    }

    /// Apply a verified event to local state.
    ///
    /// The processor delivers at-least-once: applying the same event twice
    /// must leave the same state as applying it once.
    #[instrument(skip(self, event), fields(event_id = %event.id))]
    pub async fn apply_event(&self, event: WebhookEvent) -> Result<(), BillingError> {
        match event.data {
            WebhookEventData::CheckoutSession(data) => self.apply_checkout_completed(data).await,
            WebhookEventData::Subscription(data) => self.apply_subscription_change(data).await,
            WebhookEventData::Raw(_) => {
                // Acknowledged, no-op
                Ok(())
            }
        }
    }

    async fn apply_checkout_completed(
        &self,
        data: CheckoutSessionData,
    ) -> Result<(), BillingError> {
        let user_id = data
            .metadata
            .get("userId")
            .ok_or_else(|| {
                warn!(session_id = %data.session_id, "Checkout completed without userId metadata");
                BillingError::MissingReference("no userId in session metadata".to_string())
            })?
            .as_str();
        let user_id = UserId::parse(user_id)
            .map_err(|_| BillingError::MalformedEvent(format!("invalid userId: {user_id}")))?;

        let reference = purchase_reference(&data)?;

        // One-time payments carry a payment intent; subscription checkouts
        // don't, so the session ID stands in as the payment reference
        let payment_ref = data
            .payment_intent
            .clone()
            .unwrap_or_else(|| data.session_id.clone());

        // Redelivery of the same event must not insert a second purchase.
        // The user-state writes below still run on replays: a prior delivery
        // may have recorded the purchase and then failed before applying them.
        match self
            .purchases
            .find_by_stripe_payment_id(&payment_ref)
            .await?
        {
            Some(existing) => {
                info!(
                    purchase_id = %existing.id,
                    payment_ref = %payment_ref,
                    "Purchase already recorded for this payment"
                );
            }
            None => {
                let purchase = self
                    .purchases
                    .create(CreatePurchase {
                        id: Uuid::new_v4(),
                        user_id: user_id.0,
                        pack_id: reference.pack_id().map(|p| p.0),
                        subscription_type: reference.subscription_type().map(str::to_string),
                        stripe_payment_id: payment_ref,
                        amount_cents: data.amount_total,
                    })
                    .await?;

                info!(
                    purchase_id = %purchase.id,
                    user_id = %user_id,
                    amount_cents = data.amount_total,
                    "Purchase recorded"
                );
            }
        }

        if let Some(ref customer_id) = data.customer_id {
            self.users
                .update_stripe_customer_id(user_id.0, customer_id)
                .await?;
        }

        if let PurchaseRef::Subscription(ref plan) = reference {
            self.users
                .update_subscription(
                    user_id.0,
                    &SubscriptionStatus::Active.to_string(),
                    Some(SubscriptionTier::Premium.as_str()),
                )
                .await?;
            info!(user_id = %user_id, plan = %plan, "Subscription activated");
        }

        Ok(())
    }

    async fn apply_subscription_change(
        &self,
        data: SubscriptionData,
    ) -> Result<(), BillingError> {
        // Subscription events don't carry our metadata; the stored customer
        // reference is the only link back to the user
        let Some(user) = self
            .users
            .find_by_stripe_customer_id(&data.customer_id)
            .await?
        else {
            warn!(
                customer_id = %data.customer_id,
                subscription_id = %data.subscription_id,
                "Subscription event for unknown customer, acknowledging"
            );
            return Ok(());
        };

        // Status is stored verbatim; tier follows it
        let tier = (data.status == "active").then(|| SubscriptionTier::Premium.as_str());
        self.users
            .update_subscription(user.id, &data.status, tier)
            .await?;

        info!(
            user_id = %user.id,
            status = %data.status,
            "Subscription state reconciled"
        );

        Ok(())
    }
}

/// Extract the pack-or-subscription reference from checkout metadata.
///
/// A purchase references exactly one of the two; metadata carrying both or
/// neither is rejected rather than guessed at.
fn purchase_reference(data: &CheckoutSessionData) -> Result<PurchaseRef, BillingError> {
    let pack_id = data.metadata.get("packId");
    let subscription_type = data.metadata.get("subscriptionType");

    match (pack_id, subscription_type) {
        (Some(pack), None) => {
            let pack = PackId::parse(pack)
                .map_err(|_| BillingError::MalformedEvent(format!("invalid packId: {pack}")))?;
            Ok(PurchaseRef::Pack(pack))
        }
        (None, Some(plan)) => Ok(PurchaseRef::Subscription(plan.clone())),
        (Some(_), Some(_)) => Err(BillingError::MalformedEvent(
            "metadata references both a pack and a subscription".to_string(),
        )),
        (None, None) => Err(BillingError::MalformedEvent(
            "metadata references neither a pack nor a subscription".to_string(),
        )),
    }
}

impl<U, P, Pr> std::fmt::Debug for BillingService<U, P, Pr> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BillingService").finish()
    }
}
