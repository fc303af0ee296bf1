use thiserror::Error;

/// Per-service-code translation failures. Each one is logged and the quote
/// skipped; sibling quotes in the same batch are unaffected.
#[derive(Debug, Error)]
pub enum RateError {
    /// The carrier flagged the service itself as failed.
    #[error("carrier error {code}: {message}")]
    Service { code: String, message: String },

    #[error("delivery estimate missing or not positive: {raw:?}")]
    InvalidDeliveryEstimate { raw: String },

    #[error("quoted price missing or not positive: {raw:?}")]
    InvalidPrice { raw: String },
}
