//! Error types for Stripe domain values.

/// Errors that can occur when constructing identifiers and other domain values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// A currency code was not three ASCII letters.
    #[error("invalid currency code: {0}")]
    InvalidCurrency(String),
}
