//! Client error types.

use stripe_core::StripeErrorDetail;

/// Errors that can occur when using the Stripe client.
///
/// Every variant is terminal. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed before a response body was read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stripe returned its error envelope.
    #[error(
        "Stripe API error ({status}): {} - {}",
        .error.error_type,
        .error.message.as_deref().unwrap_or("no message")
    )]
    Api {
        /// HTTP status code.
        status: u16,
        /// The envelope's error fields, as Stripe sent them.
        error: StripeErrorDetail,
    },

    /// The body matched neither the expected model nor the error envelope.
    #[error("failed to decode Stripe response: {source}")]
    Decode {
        /// The raw response body.
        body: String,
        /// Why decoding as the expected model failed.
        #[source]
        source: serde_json::Error,
    },

    /// There was no request to perform, e.g. a subscription without items to update.
    #[error("no request to perform")]
    NoRequest,

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl StripeError {
    /// Whether this error only means "nothing to do".
    #[must_use]
    pub fn is_no_request(&self) -> bool {
        matches!(self, Self::NoRequest)
    }

    /// The Stripe error code, if Stripe returned one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { error, .. } => error.code.as_deref(),
            _ => None,
        }
    }
}
