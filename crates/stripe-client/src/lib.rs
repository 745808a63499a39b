//! Typed client for the Stripe REST API.
//!
//! Each endpoint is a pure function in [`endpoints`] that builds a
//! [`Request<A>`], a request descriptor typed to the model its response
//! decodes into. An [`Executor`] attaches the credential, performs the round
//! trip and decodes the body. [`StripeClient`] binds both together behind the
//! [`StripeApi`] trait.
//!
//! # Example
//!
//! ```no_run
//! use stripe_client::{StripeApi, StripeClient};
//! use stripe_core::CustomerId;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StripeClient::new("sk_test_...")?;
//!
//! let customer = client.fetch_customer(&"cus_123".parse::<CustomerId>()?).await?;
//! println!("Extra invoice info: {:?}", customer.extra_invoice_info());
//!
//! let plans = client.fetch_plans().await?;
//! for plan in &plans.data {
//!     println!("{}: {}", plan.id, plan.amount.to_dollars_string());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every call returns exactly one of: the decoded model, a transport error,
//! Stripe's error envelope, or a decode failure holding the raw body. Nothing
//! is retried.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod auth;
mod client;
mod config;
pub mod endpoints;
mod error;
mod executor;
pub mod form;
mod request;

pub use auth::Credential;
pub use client::{StripeApi, StripeClient, STRIPE_JS_URL};
pub use config::{
    ClientOptions, StripeConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS, SECRET_PATHS,
};
pub use error::StripeError;
pub use executor::{decode_response, Executor};
pub use form::{Param, Params};
pub use request::{Method, Request, API_BASE};
