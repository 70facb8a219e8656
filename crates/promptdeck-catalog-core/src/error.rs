//! Catalog errors

use thiserror::Error;

/// Catalog errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Prompt not found
    #[error("prompt not found")]
    PromptNotFound,

    /// Pack not found
    #[error("pack not found")]
    PackNotFound,

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] promptdeck_db::DbError),
}

impl CatalogError {
    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PromptNotFound | Self::PackNotFound)
    }
}
