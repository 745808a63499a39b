//! Authenticated request execution.
//!
//! The [`Executor`] turns a [`Request<A>`] into an `A`. It attaches the
//! credential, performs exactly one HTTP round trip and decodes the body.
//! Every call ends in one of four outcomes: the decoded value, a transport
//! error, Stripe's error envelope, or a decode failure carrying the raw body.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use stripe_core::StripeErrorEnvelope;

use crate::auth::Credential;
use crate::config::ClientOptions;
use crate::error::StripeError;
use crate::request::Request;

/// Sends request descriptors to the Stripe API.
#[derive(Debug, Clone)]
pub struct Executor {
    client: Client,
    base_url: String,
}

impl Executor {
    /// Create an executor from client options.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Configuration`] if the HTTP client cannot be built.
    pub fn new(options: &ClientOptions) -> Result<Self, StripeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()
            .map_err(|e| StripeError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute `request` with `credential` and decode the response as `A`.
    ///
    /// A `None` request fails with [`StripeError::NoRequest`] without touching
    /// the network.
    ///
    /// # Errors
    ///
    /// - [`StripeError::NoRequest`] if there is no request.
    /// - [`StripeError::Http`] if the round trip fails.
    /// - [`StripeError::Api`] if Stripe answers with its error envelope.
    /// - [`StripeError::Decode`] if the body is neither an `A` nor an error envelope.
    pub async fn execute<A: DeserializeOwned>(
        &self,
        credential: &Credential,
        request: Option<Request<A>>,
    ) -> Result<A, StripeError> {
        let Some(request) = request else {
            tracing::debug!("No Stripe request to perform");
            return Err(StripeError::NoRequest);
        };

        let (method, path, headers, body) = request.into_parts();
        let url = format!("{}/{path}", self.base_url);

        tracing::debug!(method = %method, path = %path, "Sending Stripe request");

        let mut builder = self.client.request(method.clone(), url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = credential.attach(builder).send().await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;

        let result = decode_response(status, &bytes);
        match &result {
            Ok(_) => tracing::debug!(method = %method, path = %path, status, "Stripe request succeeded"),
            Err(StripeError::Api { error, .. }) => tracing::warn!(
                method = %method,
                path = %path,
                status,
                error_type = %error.error_type,
                code = ?error.code,
                "Stripe rejected request"
            ),
            Err(e) => tracing::error!(
                method = %method,
                path = %path,
                status,
                error = %e,
                "Failed to decode Stripe response"
            ),
        }
        result
    }
}

/// Decode a response body as `A`, falling back to Stripe's error envelope.
///
/// Dates are read as seconds since the Unix epoch by the models themselves.
///
/// # Errors
///
/// Returns [`StripeError::Api`] when the body is an error envelope, and
/// [`StripeError::Decode`] with the raw body and the original parse error
/// when it is neither.
pub fn decode_response<A: DeserializeOwned>(status: u16, body: &[u8]) -> Result<A, StripeError> {
    match serde_json::from_slice::<A>(body) {
        Ok(value) => Ok(value),
        Err(source) => match serde_json::from_slice::<StripeErrorEnvelope>(body) {
            Ok(envelope) => Err(StripeError::Api {
                status,
                error: envelope.error,
            }),
            Err(_) => Err(StripeError::Decode {
                body: String::from_utf8_lossy(body).into_owned(),
                source,
            }),
        },
    }
}
