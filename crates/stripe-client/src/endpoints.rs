//! One request builder per Stripe endpoint.
//!
//! These functions are pure: they only assemble a path, a method and form
//! parameters into a [`Request`]. Authentication and I/O happen in the
//! [`Executor`](crate::Executor).

use stripe_core::{
    Coupon, CouponId, Customer, CustomerId, EmailAddress, Invoice, InvoiceId, ListEnvelope, Plan,
    PlanId, Subscription, SubscriptionId, TokenId, Vat, EXTRA_INVOICE_INFO_KEY,
};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::form::{Param, Params};
use crate::request::{Method, Request};

/// Upper bound Stripe accepts for `limit` on list endpoints.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Unreserved characters (RFC 3986) stay literal in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape an id for use as one path segment.
fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Escape an id for use as a query string value.
fn query_value(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes()).collect()
}

/// Cancel a subscription at the end of its current period.
#[must_use]
pub fn cancel_subscription(id: &SubscriptionId) -> Request<Subscription> {
    Request::new(
        format!("subscriptions/{}?expand[]=customer", segment(id.as_str())),
        Method::Delete(Params::new().with("at_period_end", true)),
    )
}

/// Create a customer with the card behind `token` as its source.
#[must_use]
pub fn create_customer(
    token: &TokenId,
    description: Option<&str>,
    email: Option<&EmailAddress>,
    vat_number: Option<&Vat>,
) -> Request<Customer> {
    Request::new(
        "customers",
        Method::Post(
            Params::new()
                .with("business_vat_id", vat_number.map(Vat::as_str))
                .with("description", description)
                .with("email", email.map(EmailAddress::as_str))
                .with("source", token.as_str()),
        ),
    )
}

/// Subscribe `customer` to `plan` with `quantity` seats.
#[must_use]
pub fn create_subscription(
    customer: &CustomerId,
    plan: &PlanId,
    quantity: u32,
    coupon: Option<&CouponId>,
) -> Request<Subscription> {
    let item = Params::new()
        .with("plan", plan.as_str())
        .with("quantity", quantity);

    Request::new(
        "subscriptions?expand[]=customer",
        Method::Post(
            Params::new()
                .with("customer", customer.as_str())
                .with("items", vec![Param::from(item)])
                .with("coupon", coupon.map(CouponId::as_str)),
        ),
    )
}

/// Fetch a coupon.
#[must_use]
pub fn fetch_coupon(id: &CouponId) -> Request<Coupon> {
    Request::get(format!("coupons/{}", segment(id.as_str())))
}

/// Fetch a customer.
#[must_use]
pub fn fetch_customer(id: &CustomerId) -> Request<Customer> {
    Request::get(format!("customers/{}", segment(id.as_str())))
}

/// Fetch an invoice with its charge expanded.
#[must_use]
pub fn fetch_invoice(id: &InvoiceId) -> Request<Invoice> {
    Request::get(format!("invoices/{}?expand[]=charge", segment(id.as_str())))
}

/// Fetch up to [`MAX_PAGE_SIZE`] of a customer's invoices, charges expanded.
#[must_use]
pub fn fetch_invoices(customer: &CustomerId) -> Request<ListEnvelope<Invoice>> {
    Request::get(format!(
        "invoices?customer={}&expand[]=data.charge&limit={MAX_PAGE_SIZE}",
        query_value(customer.as_str())
    ))
}

/// Fetch all plans.
#[must_use]
pub fn fetch_plans() -> Request<ListEnvelope<Plan>> {
    Request::get("plans")
}

/// Fetch a plan.
#[must_use]
pub fn fetch_plan(id: &PlanId) -> Request<Plan> {
    Request::get(format!("plans/{}", segment(id.as_str())))
}

/// Fetch a subscription with its customer expanded.
#[must_use]
pub fn fetch_subscription(id: &SubscriptionId) -> Request<Subscription> {
    Request::get(format!("subscriptions/{}?expand[]=customer", segment(id.as_str())))
}

/// Preview the customer's next invoice.
#[must_use]
pub fn fetch_upcoming_invoice(customer: &CustomerId) -> Request<Invoice> {
    Request::get(format!(
        "invoices/upcoming?customer={}&expand[]=charge",
        query_value(customer.as_str())
    ))
}

/// Invoice the customer now for any pending items.
#[must_use]
pub fn invoice_customer(customer: &CustomerId) -> Request<Invoice> {
    Request::new(
        "invoices",
        Method::Post(Params::new().with("customer", customer.as_str())),
    )
}

/// Replace the customer's payment source with the card behind `token`.
#[must_use]
pub fn update_customer(id: &CustomerId, token: &TokenId) -> Request<Customer> {
    Request::new(
        format!("customers/{}", segment(id.as_str())),
        Method::Post(Params::new().with("source", token.as_str())),
    )
}

/// Store text to print on the customer's invoices.
#[must_use]
pub fn update_customer_extra_invoice_info(
    id: &CustomerId,
    extra_invoice_info: &str,
) -> Request<Customer> {
    Request::new(
        format!("customers/{}", segment(id.as_str())),
        Method::Post(Params::new().with(
            "metadata",
            Params::new().with(EXTRA_INVOICE_INFO_KEY, extra_invoice_info),
        )),
    )
}

/// Move a subscription's first item to `plan` with `quantity` seats.
///
/// Any coupon on the subscription is cleared. Returns `None` when the
/// subscription has no items, in which case there is nothing to update.
#[must_use]
pub fn update_subscription(
    current: &Subscription,
    plan: &PlanId,
    quantity: u32,
    prorate: Option<bool>,
) -> Option<Request<Subscription>> {
    let item = current.items.first()?;

    let item = Params::new()
        .with("id", item.id.as_str())
        .with("plan", plan.as_str())
        .with("quantity", quantity);

    Some(Request::new(
        format!(
            "subscriptions/{}?expand[]=customer",
            segment(current.id.as_str())
        ),
        Method::Post(
            Params::new()
                .with("coupon", "")
                .with("items", vec![Param::from(item)])
                .with("prorate", prorate),
        ),
    ))
}
