//! Stripe client facade.

use async_trait::async_trait;
use stripe_core::{
    Coupon, CouponId, Customer, CustomerId, EmailAddress, Invoice, InvoiceId, ListEnvelope, Plan,
    PlanId, Subscription, SubscriptionId, TokenId, Vat,
};

use crate::auth::Credential;
use crate::config::{ClientOptions, StripeConfig};
use crate::endpoints;
use crate::error::StripeError;
use crate::executor::Executor;

/// Stripe.js, loaded by front ends that tokenize cards.
pub const STRIPE_JS_URL: &str = "https://js.stripe.com/v3/";

/// The Stripe operations an application can perform.
///
/// [`StripeClient`] talks to the live API. Tests can implement this trait
/// with canned responses instead.
#[async_trait]
pub trait StripeApi: Send + Sync {
    /// Cancel a subscription at the end of its current period.
    async fn cancel_subscription(&self, id: &SubscriptionId) -> Result<Subscription, StripeError>;

    /// Create a customer paying with the card behind `token`.
    async fn create_customer(
        &self,
        token: &TokenId,
        description: Option<&str>,
        email: Option<&EmailAddress>,
        vat_number: Option<&Vat>,
    ) -> Result<Customer, StripeError>;

    /// Subscribe a customer to a plan.
    async fn create_subscription(
        &self,
        customer: &CustomerId,
        plan: &PlanId,
        quantity: u32,
        coupon: Option<&CouponId>,
    ) -> Result<Subscription, StripeError>;

    /// Fetch a coupon.
    async fn fetch_coupon(&self, id: &CouponId) -> Result<Coupon, StripeError>;

    /// Fetch a customer.
    async fn fetch_customer(&self, id: &CustomerId) -> Result<Customer, StripeError>;

    /// Fetch an invoice.
    async fn fetch_invoice(&self, id: &InvoiceId) -> Result<Invoice, StripeError>;

    /// Fetch a customer's invoices.
    async fn fetch_invoices(
        &self,
        customer: &CustomerId,
    ) -> Result<ListEnvelope<Invoice>, StripeError>;

    /// Fetch all plans.
    async fn fetch_plans(&self) -> Result<ListEnvelope<Plan>, StripeError>;

    /// Fetch a plan.
    async fn fetch_plan(&self, id: &PlanId) -> Result<Plan, StripeError>;

    /// Fetch a subscription.
    async fn fetch_subscription(&self, id: &SubscriptionId) -> Result<Subscription, StripeError>;

    /// Preview a customer's next invoice.
    async fn fetch_upcoming_invoice(&self, customer: &CustomerId) -> Result<Invoice, StripeError>;

    /// Invoice a customer now.
    async fn invoice_customer(&self, customer: &CustomerId) -> Result<Invoice, StripeError>;

    /// Replace a customer's payment source.
    async fn update_customer(
        &self,
        id: &CustomerId,
        token: &TokenId,
    ) -> Result<Customer, StripeError>;

    /// Set the text printed on a customer's invoices.
    async fn update_customer_extra_invoice_info(
        &self,
        id: &CustomerId,
        extra_invoice_info: &str,
    ) -> Result<Customer, StripeError>;

    /// Change a subscription's plan or quantity.
    ///
    /// Fails with [`StripeError::NoRequest`] if the subscription has no items.
    async fn update_subscription(
        &self,
        current: &Subscription,
        plan: &PlanId,
        quantity: u32,
        prorate: Option<bool>,
    ) -> Result<Subscription, StripeError>;

    /// URL of the Stripe.js script for front-end integration.
    fn js(&self) -> &str {
        STRIPE_JS_URL
    }
}

/// Stripe API client.
///
/// Pairs an [`Executor`] with a credential. Cloning is cheap and clones share
/// one connection pool.
#[derive(Debug, Clone)]
pub struct StripeClient {
    executor: Executor,
    credential: Credential,
}

impl StripeClient {
    /// Create a new Stripe client.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(secret_key: impl Into<String>) -> Result<Self, StripeError> {
        Self::with_options(Credential::secret_key(secret_key), &ClientOptions::default())
    }

    /// Create a new Stripe client with custom options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn with_options(
        credential: Credential,
        options: &ClientOptions,
    ) -> Result<Self, StripeError> {
        Ok(Self {
            executor: Executor::new(options)?,
            credential,
        })
    }

    /// Create a client from a loaded [`StripeConfig`].
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: StripeConfig) -> Result<Self, StripeError> {
        Self::with_options(config.credential, &config.options)
    }

    /// The executor requests are sent through.
    #[must_use]
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}

#[async_trait]
impl StripeApi for StripeClient {
    async fn cancel_subscription(&self, id: &SubscriptionId) -> Result<Subscription, StripeError> {
        let request = endpoints::cancel_subscription(id);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn create_customer(
        &self,
        token: &TokenId,
        description: Option<&str>,
        email: Option<&EmailAddress>,
        vat_number: Option<&Vat>,
    ) -> Result<Customer, StripeError> {
        let request = endpoints::create_customer(token, description, email, vat_number);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn create_subscription(
        &self,
        customer: &CustomerId,
        plan: &PlanId,
        quantity: u32,
        coupon: Option<&CouponId>,
    ) -> Result<Subscription, StripeError> {
        let request = endpoints::create_subscription(customer, plan, quantity, coupon);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_coupon(&self, id: &CouponId) -> Result<Coupon, StripeError> {
        let request = endpoints::fetch_coupon(id);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_customer(&self, id: &CustomerId) -> Result<Customer, StripeError> {
        let request = endpoints::fetch_customer(id);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_invoice(&self, id: &InvoiceId) -> Result<Invoice, StripeError> {
        let request = endpoints::fetch_invoice(id);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_invoices(
        &self,
        customer: &CustomerId,
    ) -> Result<ListEnvelope<Invoice>, StripeError> {
        let request = endpoints::fetch_invoices(customer);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_plans(&self) -> Result<ListEnvelope<Plan>, StripeError> {
        let request = endpoints::fetch_plans();
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_plan(&self, id: &PlanId) -> Result<Plan, StripeError> {
        let request = endpoints::fetch_plan(id);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_subscription(&self, id: &SubscriptionId) -> Result<Subscription, StripeError> {
        let request = endpoints::fetch_subscription(id);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn fetch_upcoming_invoice(&self, customer: &CustomerId) -> Result<Invoice, StripeError> {
        let request = endpoints::fetch_upcoming_invoice(customer);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn invoice_customer(&self, customer: &CustomerId) -> Result<Invoice, StripeError> {
        let request = endpoints::invoice_customer(customer);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn update_customer(
        &self,
        id: &CustomerId,
        token: &TokenId,
    ) -> Result<Customer, StripeError> {
        let request = endpoints::update_customer(id, token);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn update_customer_extra_invoice_info(
        &self,
        id: &CustomerId,
        extra_invoice_info: &str,
    ) -> Result<Customer, StripeError> {
        let request = endpoints::update_customer_extra_invoice_info(id, extra_invoice_info);
        self.executor.execute(&self.credential, Some(request)).await
    }

    async fn update_subscription(
        &self,
        current: &Subscription,
        plan: &PlanId,
        quantity: u32,
        prorate: Option<bool>,
    ) -> Result<Subscription, StripeError> {
        let request = endpoints::update_subscription(current, plan, quantity, prorate);
        self.executor.execute(&self.credential, request).await
    }
}
