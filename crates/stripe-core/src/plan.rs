//! Plans and coupons.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CouponId, PlanId};
use crate::money::{Cents, Currency};

/// Stripe plan object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan ID.
    pub id: PlanId,
    /// Price per unit per interval.
    pub amount: Cents,
    /// Created timestamp.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// Currency.
    pub currency: Currency,
    /// Billing interval.
    pub interval: Interval,
    /// Number of intervals between billings.
    #[serde(default = "default_interval_count")]
    pub interval_count: u32,
    /// Metadata.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Display name.
    #[serde(default)]
    pub nickname: Option<String>,
}

fn default_interval_count() -> u32 {
    1
}

/// Billing interval of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
}

/// Stripe coupon object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    /// Coupon ID.
    pub id: CouponId,
    /// Fixed amount taken off, if this is an amount coupon.
    #[serde(default)]
    pub amount_off: Option<Cents>,
    /// How long the discount applies.
    pub duration: CouponDuration,
    /// Number of months for a `repeating` coupon.
    #[serde(default)]
    pub duration_in_months: Option<u32>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Percentage taken off, if this is a percentage coupon.
    #[serde(default)]
    pub percent_off: Option<f64>,
    /// Whether the coupon can still be redeemed.
    #[serde(default)]
    pub valid: bool,
}

impl Coupon {
    /// Apply this coupon to `amount`. Never returns a negative amount.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn discount(&self, amount: Cents) -> Cents {
        if let Some(off) = self.amount_off {
            return Cents(amount.0.saturating_sub(off.0).max(0));
        }
        if let Some(percent) = self.percent_off {
            let discounted = amount.0 as f64 * (1.0 - percent / 100.0);
            return Cents(discounted.round().max(0.0) as i64);
        }
        amount
    }
}

/// How long a coupon applies after redemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CouponDuration {
    /// Applies to every invoice.
    Forever,
    /// Applies to the first invoice only.
    Once,
    /// Applies for `duration_in_months`.
    Repeating,
}

/// A coupon applied to a customer or subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    /// The applied coupon.
    pub coupon: Coupon,
}
