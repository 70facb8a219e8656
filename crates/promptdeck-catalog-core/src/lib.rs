//! Promptdeck Catalog Core - Catalog business logic
//!
//! Read-side catalog functionality: prompt listing with filters and
//! pagination, view/copy counters, bookmarks, and the entitlement check
//! that decides whether a user may see a non-free prompt's content.
//!
//! # Example
//!
//! ```rust,ignore
//! use promptdeck_catalog_core::{CatalogService, EntitlementChecker};
//! use promptdeck_db::Repositories;
//!
//! let catalog = CatalogService::new(
//!     Arc::new(repos.prompts.clone()),
//!     Arc::new(repos.saved_prompts.clone()),
//! );
//! let entitlements = EntitlementChecker::new(
//!     Arc::new(repos.users.clone()),
//!     Arc::new(repos.purchases.clone()),
//! );
//!
//! let page = catalog.list_prompts(&filter).await?;
//! let allowed = entitlements.has_access(Some(user_id), &page.prompts[0]).await?;
//! ```

pub mod entitlement;
pub mod error;
pub mod service;

pub use entitlement::EntitlementChecker;
pub use error::CatalogError;
pub use service::{CatalogService, PromptPage};
