//! Client configuration.

use std::path::Path;

use serde::Deserialize;

use crate::auth::Credential;
use crate::error::StripeError;

/// Default API base, without the trailing slash.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Secrets files tried by [`StripeConfig::from_env`] when `STRIPE_API_KEY` is unset, in order.
pub const SECRET_PATHS: [&str; 3] = [
    ".secrets/stripe.json",
    "../.secrets/stripe.json",
    "../../.secrets/stripe.json",
];

/// Client options for customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// API base URL (default: `https://api.stripe.com/v1`). Point it at a mock server in tests.
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl ClientOptions {
    /// Create options with a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// A secret key plus client options, loaded from the environment or a secrets file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripeConfig {
    /// The credential to authenticate with.
    pub credential: Credential,
    /// Client options.
    pub options: ClientOptions,
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    api_key_test: Option<String>,
    #[serde(default)]
    api_base: Option<String>,
}

impl StripeConfig {
    /// Load configuration for a host process.
    ///
    /// An explicitly set `STRIPE_API_KEY` wins, together with `STRIPE_API_BASE`
    /// and `STRIPE_TIMEOUT_SECONDS`. Without it, the first secrets file found in
    /// [`SECRET_PATHS`] is used. Relative paths resolve against the working
    /// directory.
    ///
    /// Nothing in the client calls this. [`StripeClient::new`](crate::StripeClient::new)
    /// only needs the secret key.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Configuration`] if no secret key can be found.
    pub fn from_env() -> Result<Self, StripeError> {
        Self::load(&SECRET_PATHS, |name| std::env::var(name).ok())
    }

    /// Load configuration from a specific secrets file.
    ///
    /// The file holds `api_key_test` or `api_key`, and optionally `api_base`.
    /// A test key is preferred when both are present.
    ///
    /// # Errors
    ///
    /// Returns [`StripeError::Configuration`] if the file is missing, malformed,
    /// or holds no key.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, StripeError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StripeError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        let secrets: StripeSecrets = serde_json::from_str(&contents).map_err(|e| {
            StripeError::Configuration(format!("invalid secrets file {}: {e}", path.display()))
        })?;

        let key = secrets
            .api_key_test
            .or(secrets.api_key)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                StripeError::Configuration(format!("no api_key in {}", path.display()))
            })?;

        let mut options = ClientOptions::default();
        if let Some(base) = secrets.api_base {
            options.base_url = base;
        }

        Ok(Self {
            credential: Credential::secret_key(key),
            options,
        })
    }

    fn load(
        paths: &[&str],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, StripeError> {
        let Some(key) = env("STRIPE_API_KEY").filter(|key| !key.is_empty()) else {
            for path in paths {
                if Path::new(path).exists() {
                    let config = Self::from_file(path)?;
                    tracing::info!(path = %path, "Loaded Stripe secrets from file");
                    return Ok(config);
                }
            }
            return Err(StripeError::Configuration(
                "STRIPE_API_KEY is not set and no secrets file was found".into(),
            ));
        };

        tracing::debug!("Using Stripe secrets from environment variables");

        let mut options = ClientOptions::default();
        if let Some(base) = env("STRIPE_API_BASE") {
            options.base_url = base;
        }
        if let Some(timeout) = env("STRIPE_TIMEOUT_SECONDS") {
            options.timeout_seconds = timeout.parse().map_err(|_| {
                StripeError::Configuration(format!("invalid STRIPE_TIMEOUT_SECONDS: {timeout}"))
            })?;
        }

        Ok(Self {
            credential: Credential::secret_key(key),
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn options_default_to_live_api() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url, "https://api.stripe.com/v1");
        assert_eq!(options.timeout_seconds, 30);
    }

    #[test]
    fn secrets_file_prefers_test_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripe.json");
        std::fs::write(
            &path,
            r#"{"api_key": "sk_live_xxx", "api_key_test": "sk_test_xxx", "api_base": "http://localhost:12111/v1"}"#,
        )
        .unwrap();

        let config = StripeConfig::from_file(&path).unwrap();
        assert_eq!(config.credential, Credential::secret_key("sk_test_xxx"));
        assert_eq!(config.options.base_url, "http://localhost:12111/v1");
    }

    #[test]
    fn secrets_file_without_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripe.json");
        std::fs::write(&path, r#"{"api_key": ""}"#).unwrap();

        let err = StripeConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, StripeError::Configuration(_)));
    }

    #[test]
    fn environment_wins_over_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripe.json");
        std::fs::write(&path, r#"{"api_key": "sk_test_file"}"#).unwrap();
        let path = path.to_string_lossy().to_string();

        let config =
            StripeConfig::load(&[path.as_str()], env_from(&[("STRIPE_API_KEY", "sk_test_env")]))
                .unwrap();
        assert_eq!(config.credential, Credential::secret_key("sk_test_env"));
    }

    #[test]
    fn secrets_file_is_used_without_environment_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stripe.json");
        std::fs::write(&path, r#"{"api_key": "sk_test_file"}"#).unwrap();
        let path = path.to_string_lossy().to_string();

        let config = StripeConfig::load(
            &["/nonexistent/stripe.json", path.as_str()],
            env_from(&[("STRIPE_API_KEY", "")]),
        )
        .unwrap();
        assert_eq!(config.credential, Credential::secret_key("sk_test_file"));
    }

    #[test]
    fn environment_is_used_without_secrets_file() {
        let config = StripeConfig::load(
            &["/nonexistent/stripe.json"],
            env_from(&[
                ("STRIPE_API_KEY", "sk_test_env"),
                ("STRIPE_TIMEOUT_SECONDS", "5"),
            ]),
        )
        .unwrap();

        assert_eq!(config.credential, Credential::secret_key("sk_test_env"));
        assert_eq!(config.options.timeout_seconds, 5);
        assert_eq!(config.options.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_key_is_a_configuration_error() {
        let err = StripeConfig::load(&["/nonexistent/stripe.json"], env_from(&[])).unwrap_err();
        assert!(matches!(err, StripeError::Configuration(_)));
    }
}
