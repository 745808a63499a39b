//! Core types for the Stripe API binding.
//!
//! This crate provides the domain models returned by the Stripe endpoints the
//! client talks to:
//!
//! - **Identifiers**: `CustomerId`, `SubscriptionId`, `PlanId`, `CouponId`, ...
//! - **Customers**: `Customer`, `Card`, `Brand`
//! - **Subscriptions**: `Subscription`, `SubscriptionItem`, `SubscriptionStatus`
//! - **Plans**: `Plan`, `Coupon`, `Discount`
//! - **Invoices**: `Invoice`, `Charge`, `LineItem`
//! - **Envelopes**: `ListEnvelope`, `StripeErrorEnvelope`, `Expandable`
//!
//! # Timestamps
//!
//! Stripe encodes every date as integer seconds since the Unix epoch. All date
//! fields here are `DateTime<Utc>` decoded with `chrono::serde::ts_seconds`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod customer;
pub mod envelope;
pub mod error;
pub mod ids;
pub mod invoice;
pub mod money;
pub mod plan;
pub mod subscription;

pub use customer::{Brand, Card, Customer, EXTRA_INVOICE_INFO_KEY};
pub use envelope::{Expandable, ListEnvelope, StripeErrorDetail, StripeErrorEnvelope};
pub use error::IdError;
pub use ids::{
    CardId, ChargeId, CouponId, CustomerId, EmailAddress, InvoiceId, PlanId, SubscriptionId,
    SubscriptionItemId, TokenId, Vat,
};
pub use invoice::{Charge, Invoice, LineItem};
pub use money::{Cents, Currency};
pub use plan::{Coupon, CouponDuration, Discount, Interval, Plan};
pub use subscription::{Subscription, SubscriptionItem, SubscriptionStatus};
