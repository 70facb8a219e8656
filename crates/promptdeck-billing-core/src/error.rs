//! Billing errors

use thiserror::Error;

/// Billing errors
#[derive(Error, Debug)]
pub enum BillingError {
    /// User not found
    #[error("user not found")]
    UserNotFound,

    /// User has no stored payment-processor customer reference
    #[error("no billing customer on record")]
    CustomerNotFound,

    /// Missing or empty price reference
    #[error("a price reference is required")]
    MissingPrice,

    /// Payment provider error
    #[error("provider error: {0}")]
    ProviderError(String),

    /// Webhook signature verification or payload parsing error
    #[error("webhook error: {0}")]
    WebhookError(String),

    /// Event metadata is missing the local identity reference
    #[error("missing reference in event metadata: {0}")]
    MissingReference(String),

    /// Event metadata is present but malformed
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// Database error
    #[error("database error: {0}")]
    Database(#[from] promptdeck_db::DbError),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl BillingError {
    /// Whether the error is the caller's fault and maps to a 4xx response.
    ///
    /// Rejected webhook deliveries fall in this class: the processor should
    /// not retry an event we will never accept.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingPrice
                | Self::WebhookError(_)
                | Self::MissingReference(_)
                | Self::MalformedEvent(_)
        )
    }

    /// Check if this is a not found error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound | Self::CustomerNotFound)
    }
}
