//! PostgreSQL repository implementations

mod pack;
mod prompt;
mod purchase;
mod saved_prompt;
mod user;

pub use pack::PgPackRepository;
pub use prompt::PgPromptRepository;
pub use purchase::PgPurchaseRepository;
pub use saved_prompt::PgSavedPromptRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub packs: PgPackRepository,
    pub prompts: PgPromptRepository,
    pub purchases: PgPurchaseRepository,
    pub saved_prompts: PgSavedPromptRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            packs: PgPackRepository::new(pool.clone()),
            prompts: PgPromptRepository::new(pool.clone()),
            purchases: PgPurchaseRepository::new(pool.clone()),
            saved_prompts: PgSavedPromptRepository::new(pool),
        }
    }
}
