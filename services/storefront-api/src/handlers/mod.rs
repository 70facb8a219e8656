//! REST API handlers

pub mod billing;
pub mod health;
pub mod packs;
pub mod prompts;
pub mod webhook;

pub use billing::*;
pub use health::*;
pub use packs::*;
pub use prompts::*;
pub use webhook::*;
