//! Promptdeck DB - Database abstractions
//!
//! SQLx-based database layer for Promptdeck services.
//!
//! # Example
//!
//! ```rust,ignore
//! use promptdeck_db::{create_pool, Repositories};
//!
//! let pool = create_pool("postgres://localhost/promptdeck").await?;
//! let repos = Repositories::new(pool);
//!
//! // Use repositories
//! let user = repos.users.find_by_id(user_id).await?;
//! ```

pub mod error;
pub mod models;
pub mod pg;
pub mod pool;
pub mod repo;

pub use error::{DbError, DbResult};
pub use models::*;
pub use pg::Repositories;
pub use pool::{create_pool, DbPool};
pub use repo::*;
