//! Application state for the Storefront API service.

use std::sync::Arc;

use promptdeck_billing_core::{BillingService, StripeProvider};
use promptdeck_catalog_core::{CatalogService, EntitlementChecker};
use promptdeck_db::pg::{
    PgPackRepository, PgPromptRepository, PgPurchaseRepository, PgSavedPromptRepository,
    PgUserRepository, Repositories,
};
use promptdeck_db::DbPool;

use crate::config::Config;

/// Catalog service over the Postgres repositories
pub type Catalog = CatalogService<PgPromptRepository, PgSavedPromptRepository>;
/// Entitlement checker over the Postgres repositories
pub type Entitlements = EntitlementChecker<PgUserRepository, PgPurchaseRepository>;
/// Billing service over the Postgres repositories and Stripe
pub type Billing = BillingService<PgUserRepository, PgPurchaseRepository, StripeProvider>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Catalog service (listing, counters, bookmarks)
    pub catalog: Arc<Catalog>,
    /// Entitlement checker (evaluated fresh per request)
    pub entitlements: Arc<Entitlements>,
    /// Billing service (checkout, portal, webhook reconciler)
    pub billing: Arc<Billing>,
    /// Pack repository (pack listing needs no service logic)
    pub packs: Arc<PgPackRepository>,
    /// Database pool (readiness checks)
    pub pool: DbPool,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire up all services from the repositories and configuration
    pub fn new(repos: Repositories, pool: DbPool, config: Config) -> Self {
        let users = Arc::new(repos.users);
        let purchases = Arc::new(repos.purchases);
        let prompts = Arc::new(repos.prompts);
        let saved = Arc::new(repos.saved_prompts);
        let packs = Arc::new(repos.packs);

        let catalog = Arc::new(CatalogService::new(prompts, saved));
        let entitlements = Arc::new(EntitlementChecker::new(users.clone(), purchases.clone()));

        let provider = Arc::new(StripeProvider::new(config.billing.clone()));
        let billing = Arc::new(BillingService::new(
            users,
            purchases,
            provider,
            config.billing.clone(),
        ));

        Self {
            catalog,
            entitlements,
            billing,
            packs,
            pool,
            config: Arc::new(config),
        }
    }

    /// Get request timeout from config
    pub fn request_timeout(&self) -> std::time::Duration {
        self.config.request_timeout
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
