//! Promptdeck Types - Shared domain types
//!
//! This crate contains domain types used across Promptdeck services:
//! - User identity and subscription state
//! - Catalog identifiers and prompt tiers
//! - Purchase records and billing DTOs

pub mod billing;
pub mod catalog;
pub mod purchase;
pub mod tier;
pub mod user;

pub use billing::*;
pub use catalog::*;
pub use purchase::*;
pub use tier::*;
pub use user::*;
