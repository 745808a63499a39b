//! Subscriptions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::envelope::{Expandable, ListEnvelope};
use crate::ids::{CustomerId, SubscriptionId, SubscriptionItemId};
use crate::plan::{Discount, Plan};

/// Stripe subscription object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: SubscriptionId,
    /// When the subscription was canceled.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,
    /// Whether the subscription ends at the close of the current period.
    #[serde(default)]
    pub cancel_at_period_end: bool,
    /// Created timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// Start of the current billing period.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub current_period_start: DateTime<Utc>,
    /// End of the current billing period.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub current_period_end: DateTime<Utc>,
    /// The customer, expanded when requested with `expand[]=customer`.
    pub customer: Expandable<CustomerId, Customer>,
    /// Applied discount.
    #[serde(default)]
    pub discount: Option<Discount>,
    /// When the subscription ended.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
    /// Line items. Plan changes are applied to the first item.
    pub items: ListEnvelope<SubscriptionItem>,
    /// The subscribed plan.
    pub plan: Plan,
    /// Number of seats.
    pub quantity: u32,
    /// Start of the subscription.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub start: DateTime<Utc>,
    /// Current status.
    pub status: SubscriptionStatus,
}

impl Subscription {
    /// Check if the subscription is in a state that grants access.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            SubscriptionStatus::Active | SubscriptionStatus::Trialing | SubscriptionStatus::PastDue
        )
    }

    /// Check if the subscription will renew at the end of the current period.
    #[must_use]
    pub fn is_renewing(&self) -> bool {
        self.status != SubscriptionStatus::Canceled && !self.cancel_at_period_end
    }

    /// The customer's id, whether or not the customer was expanded.
    #[must_use]
    pub fn customer_id(&self) -> &CustomerId {
        match &self.customer {
            Expandable::Id(id) => id,
            Expandable::Object(customer) => &customer.id,
        }
    }
}

/// A single line item of a subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItem {
    /// Item ID.
    pub id: SubscriptionItemId,
    /// Created timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// The item's plan.
    pub plan: Plan,
    /// Number of seats.
    pub quantity: u32,
}

/// Status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// Subscription is active.
    Active,
    /// Subscription was canceled.
    Canceled,
    /// Initial payment has not completed.
    Incomplete,
    /// Initial payment never completed and the subscription expired.
    IncompleteExpired,
    /// Payment failed, subscription is past due.
    PastDue,
    /// In a trial period.
    Trialing,
    /// Retries exhausted without payment.
    Unpaid,
}
