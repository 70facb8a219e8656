//! Mock repositories for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use promptdeck_db::{
    CreatePurchase, DbResult, PromptQuery, PromptRepository, PromptRow, PurchaseRepository,
    PurchaseRow, SavedPromptRepository, UserRepository, UserRow,
};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a test user directly
    pub fn insert_user(&self, user: UserRow) {
        self.users.insert(user.id, user);
    }

    /// Build a user row with the given subscription state
    pub fn test_user(status: &str, tier: Option<&str>) -> UserRow {
        UserRow {
            id: Uuid::new_v4(),
            email: format!("test-{}@example.com", Uuid::new_v4()),
            name: None,
            stripe_customer_id: None,
            subscription_status: status.to_string(),
            subscription_tier: tier.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
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

/// In-memory prompt repository for testing
#[derive(Default, Clone)]
pub struct MockPromptRepository {
    prompts: Arc<DashMap<Uuid, PromptRow>>,
}

impl MockPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prompt row directly
    pub fn insert_prompt(&self, prompt: PromptRow) {
        self.prompts.insert(prompt.id, prompt);
    }

    /// Build a prompt row with the given tier and pack
    pub fn test_prompt(tier: &str, pack_id: Option<Uuid>) -> PromptRow {
        PromptRow {
            id: Uuid::new_v4(),
            title: "Refactoring review".to_string(),
            description: "A code review template".to_string(),
            content: "Review the following code for...".to_string(),
            category: "coding".to_string(),
            tier: tier.to_string(),
            pack_id,
            tags: vec!["code".to_string(), "review".to_string()],
            featured: false,
            published: true,
            view_count: 0,
            copy_count: 0,
            rating: 4.5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn matches(prompt: &PromptRow, query: &PromptQuery) -> bool {
        if !prompt.published {
            return false;
        }
        if let Some(ref category) = query.category {
            if &prompt.category != category {
                return false;
            }
        }
        if let Some(ref tier) = query.tier {
            if &prompt.tier != tier {
                return false;
            }
        }
        if let Some(featured) = query.featured {
            if prompt.featured != featured {
                return false;
            }
        }
        if let Some(ref search) = query.search {
            let needle = search.to_lowercase();
            let hit = prompt.title.to_lowercase().contains(&needle)
                || prompt.description.to_lowercase().contains(&needle)
                || prompt.tags.iter().any(|t| t == search);
            if !hit {
                return false;
            }
        }
        true
    }

    fn matching_sorted(&self, query: &PromptQuery) -> Vec<PromptRow> {
        let mut rows: Vec<PromptRow> = self
            .prompts
            .iter()
            .filter(|r| Self::matches(r.value(), query))
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by(|a, b| {
            b.featured
                .cmp(&a.featured)
                .then(b.rating.total_cmp(&a.rating))
                .then(b.created_at.cmp(&a.created_at))
        });
        rows
    }
}

#[async_trait]
impl PromptRepository for MockPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<PromptRow>> {
        Ok(self.prompts.get(&id).map(|r| r.value().clone()))
    }

    async fn list(&self, query: &PromptQuery) -> DbResult<Vec<PromptRow>> {
        let rows = self.matching_sorted(query);
        Ok(rows
            .into_iter()
            .skip(query.offset.max(0) as usize)
            .take(query.limit.max(0) as usize)
            .collect())
    }

    async fn count(&self, query: &PromptQuery) -> DbResult<i64> {
        Ok(self.matching_sorted(query).len() as i64)
    }

    async fn list_featured(&self, limit: i64) -> DbResult<Vec<PromptRow>> {
        let mut rows: Vec<PromptRow> = self
            .prompts
            .iter()
            .filter(|r| r.value().featured && r.value().published)
            .map(|r| r.value().clone())
            .collect();
        rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }

    async fn increment_view_count(&self, id: Uuid) -> DbResult<()> {
        if let Some(mut prompt) = self.prompts.get_mut(&id) {
            prompt.view_count += 1;
        }
        Ok(())
    }

    async fn increment_copy_count(&self, id: Uuid) -> DbResult<()> {
        if let Some(mut prompt) = self.prompts.get_mut(&id) {
            prompt.copy_count += 1;
        }
        Ok(())
    }

}

/// In-memory saved-prompt repository for testing
#[derive(Default, Clone)]
pub struct MockSavedPromptRepository {
    // (user_id, prompt_id) -> saved_at ordering index
    saved: Arc<DashMap<(Uuid, Uuid), usize>>,
    prompts: Arc<DashMap<Uuid, PromptRow>>,
}

impl MockSavedPromptRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a prompt so bookmark listing can resolve it
    pub fn register_prompt(&self, prompt: PromptRow) {
        self.prompts.insert(prompt.id, prompt);
    }
}

#[async_trait]
impl SavedPromptRepository for MockSavedPromptRepository {
    async fn save(&self, user_id: Uuid, prompt_id: Uuid) -> DbResult<()> {
        let next = self.saved.len();
        self.saved.entry((user_id, prompt_id)).or_insert(next);
        Ok(())
    }

    async fn unsave(&self, user_id: Uuid, prompt_id: Uuid) -> DbResult<()> {
        self.saved.remove(&(user_id, prompt_id));
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> DbResult<Vec<PromptRow>> {
        let mut entries: Vec<(usize, Uuid)> = self
            .saved
            .iter()
            .filter(|r| r.key().0 == user_id)
            .map(|r| (*r.value(), r.key().1))
            .collect();
        // Most recently saved first
        entries.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(entries
            .into_iter()
            .filter_map(|(_, id)| self.prompts.get(&id).map(|r| r.value().clone()))
            .collect())
    }
}
