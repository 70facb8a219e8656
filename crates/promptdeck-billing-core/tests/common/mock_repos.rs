//! Mock repositories and a recording payment provider for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use promptdeck_billing_core::{
    BillingError, CheckoutSessionRequest, PaymentProvider,
};
use promptdeck_db::{
    CreatePurchase, DbError, DbResult, PurchaseRepository, PurchaseRow, UserRepository, UserRow,
};
use promptdeck_types::{CheckoutSession, PortalSession};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    subscription_update_failures: Arc<AtomicUsize>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `n` calls to `update_subscription` fail
    pub fn fail_subscription_updates(&self, n: usize) {
        self.subscription_update_failures.store(n, Ordering::SeqCst);
    }

    /// Insert a test user directly
    pub fn insert_user(&self, user: UserRow) {
        self.users.insert(user.id, user);
    }

    /// Build a user row with no subscription
    pub fn test_user() -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: format!("test-{}@example.com", Uuid::new_v4()),
            name: None,
            stripe_customer_id: None,
            subscription_status: "none".to_string(),
            subscription_tier: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Fetch a user row back out, panicking if absent
    pub fn get(&self, id: Uuid) -> UserRow {
        self.users
            .get(&id)
            .map(|r| r.value().clone())
            .expect("user should exist")
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_stripe_customer_id(&self, customer_id: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .users
            .iter()
            .find(|r| r.value().stripe_customer_id.as_deref() == Some(customer_id))
            .map(|r| r.value().clone()))
    }

    async fn update_stripe_customer_id(&self, id: Uuid, customer_id: &str) -> DbResult<()> {
        if let Some(mut user) = self.users.get_mut(&id) {
            user.stripe_customer_id = Some(customer_id.to_string());
            user.updated_at = Utc::now();
        }
        Ok(())
    }

    async fn update_subscription(
        &self,
        id: Uuid,
        status: &str,
        tier: Option<&str>,
    ) -> DbResult<()> {
        let remaining = &self.subscription_update_failures;
        if remaining.load(Ordering::SeqCst) > 0 {
            remaining.fetch_sub(1, Ordering::SeqCst);
            return Err(DbError::Sqlx(sqlx::Error::PoolClosed));
        }
        if let Some(mut user) = self.users.get_mut(&id) {
            user.subscription_status = status.to_string();
            user.subscription_tier = tier.map(str::to_string);
            user.updated_at = Utc::now();
        }
        Ok(())
    }
}

/// In-memory purchase repository for testing
#[derive(Default, Clone)]
pub struct MockPurchaseRepository {
    purchases: Arc<DashMap<Uuid, PurchaseRow>>,
}

impl MockPurchaseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored purchases
    pub fn len(&self) -> usize {
        self.purchases.len()
    }

    /// All stored purchases
    pub fn all(&self) -> Vec<PurchaseRow> {
        self.purchases.iter().map(|r| r.value().clone()).collect()
    }
}

#[async_trait]
impl PurchaseRepository for MockPurchaseRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PurchaseRow>> {
        Ok(self.purchases.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_stripe_payment_id(
        &self,
        payment_id: &str,
    ) -> DbResult<Option<PurchaseRow>> {
        Ok(self
            .purchases
            .iter()
            .find(|r| r.value().stripe_payment_id == payment_id)
            .map(|r| r.value().clone()))
    }

    async fn find_by_user_and_pack(
        &self,
        user_id: Uuid,
        pack_id: Uuid,
    ) -> DbResult<Option<PurchaseRow>> {
        Ok(self
            .purchases
            .iter()
            .find(|r| r.value().user_id == user_id && r.value().pack_id == Some(pack_id))
            .map(|r| r.value().clone()))
    }

    async fn list_by_user_id(&self, user_id: Uuid) -> DbResult<Vec<PurchaseRow>> {
        let mut rows: Vec<PurchaseRow> = self
            .purchases
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn create(&self, purchase: CreatePurchase) -> DbResult<PurchaseRow> {
        let row = PurchaseRow {
            id: purchase.id,
            user_id: purchase.user_id,
            pack_id: purchase.pack_id,
            subscription_type: purchase.subscription_type,
            stripe_payment_id: purchase.stripe_payment_id,
            amount_cents: purchase.amount_cents,
            created_at: Utc::now(),
        };
        self.purchases.insert(row.id, row.clone());
        Ok(row)
    }
}

/// Payment provider that records requests instead of calling out
#[derive(Default, Clone)]
pub struct MockPaymentProvider {
    checkout_requests: Arc<Mutex<Vec<CheckoutSessionRequest>>>,
    portal_requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockPaymentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checkout requests seen so far
    pub fn checkout_requests(&self) -> Vec<CheckoutSessionRequest> {
        self.checkout_requests
            .lock()
            .expect("mutex poisoned")
            .clone()
    }

    /// Portal requests seen so far, as (customer_id, return_url)
    pub fn portal_requests(&self) -> Vec<(String, String)> {
        self.portal_requests.lock().expect("mutex poisoned").clone()
    }
}

#[async_trait]
impl PaymentProvider for MockPaymentProvider {
    async fn create_checkout_session(
        &self,
        request: &CheckoutSessionRequest,
    ) -> Result<CheckoutSession, BillingError> {
        self.checkout_requests
            .lock()
            .expect("mutex poisoned")
            .push(request.clone());
        Ok(CheckoutSession {
            session_id: "cs_test_mock".to_string(),
            url: "https://checkout.example.com/cs_test_mock".to_string(),
        })
    }

    async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, BillingError> {
        self.portal_requests
            .lock()
            .expect("mutex poisoned")
            .push((customer_id.to_string(), return_url.to_string()));
        Ok(PortalSession {
            url: "https://portal.example.com/session".to_string(),
        })
    }
}
