//! Credentials attached to outgoing requests.

use std::fmt;

use reqwest::RequestBuilder;

/// A secret used to authenticate against the remote API.
///
/// The secret never appears in `Debug` output and is only read when a request
/// is sent.
#[derive(Clone, PartialEq, Eq)]
pub enum Credential {
    /// HTTP Basic with the secret as username and no password. Stripe uses this.
    Basic(String),
    /// `Authorization: Bearer <token>`, as OAuth APIs expect.
    Bearer(String),
}

impl Credential {
    /// A Stripe secret key (`sk_test_...` or `sk_live_...`).
    #[must_use]
    pub fn secret_key(key: impl Into<String>) -> Self {
        Self::Basic(key.into())
    }

    /// An OAuth access token.
    #[must_use]
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Whether the secret is a Stripe test-mode key.
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        matches!(self, Self::Basic(key) if key.starts_with("sk_test_") || key.starts_with("rk_test_"))
    }

    /// Attach this credential to a request.
    pub(crate) fn attach(&self, request: RequestBuilder) -> RequestBuilder {
        match self {
            Self::Basic(username) => request.basic_auth(username, Option::<&str>::None),
            Self::Bearer(token) => request.bearer_auth(token),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(_) => f.write_str("Credential::Basic(<redacted>)"),
            Self::Bearer(_) => f.write_str("Credential::Bearer(<redacted>)"),
        }
    }
}
