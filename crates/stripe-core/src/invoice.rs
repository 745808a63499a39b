//! Invoices and charges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::Card;
use crate::envelope::{Expandable, ListEnvelope};
use crate::ids::{ChargeId, CustomerId, InvoiceId, SubscriptionId};
use crate::money::Cents;
use crate::plan::{Discount, Plan};

/// Stripe invoice object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Invoice ID. Absent on upcoming invoices, which are previews.
    #[serde(default)]
    pub id: Option<InvoiceId>,
    /// Amount due.
    pub amount_due: Cents,
    /// Amount paid.
    #[serde(default)]
    pub amount_paid: Cents,
    /// The charge, expanded when requested with `expand[]=charge`.
    #[serde(default)]
    pub charge: Option<Expandable<ChargeId, Charge>>,
    /// Whether the invoice is closed to further payment attempts.
    #[serde(default)]
    pub closed: Option<bool>,
    /// Billed customer.
    pub customer: CustomerId,
    /// Created timestamp.
    #[serde(alias = "date", with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// Applied discount.
    #[serde(default)]
    pub discount: Option<Discount>,
    /// Line items.
    pub lines: ListEnvelope<LineItem>,
    /// Human readable invoice number.
    #[serde(default)]
    pub number: Option<String>,
    /// Whether the invoice has been paid.
    #[serde(default)]
    pub paid: bool,
    /// Start of the billed period.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub period_start: DateTime<Utc>,
    /// End of the billed period.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub period_end: DateTime<Utc>,
    /// Subscription being billed.
    #[serde(default)]
    pub subscription: Option<SubscriptionId>,
    /// Total before discounts.
    pub subtotal: Cents,
    /// Total after discounts.
    pub total: Cents,
}

impl Invoice {
    /// The expanded charge, if the invoice was fetched with `expand[]=charge`.
    #[must_use]
    pub fn expanded_charge(&self) -> Option<&Charge> {
        self.charge.as_ref()?.as_object()
    }
}

/// Stripe charge object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge ID.
    pub id: ChargeId,
    /// Amount charged.
    pub amount: Cents,
    /// Card that was charged.
    #[serde(default)]
    pub source: Option<Card>,
}

/// A line on an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line ID.
    pub id: String,
    /// Amount for this line.
    pub amount: Cents,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Plan billed on this line.
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Quantity.
    #[serde(default)]
    pub quantity: u32,
    /// Subscription the line belongs to.
    #[serde(default)]
    pub subscription: Option<SubscriptionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_decodes_expanded_charge() {
        let invoice: Invoice = serde_json::from_str(
            r#"{
                "id": "in_test",
                "amount_due": 1700,
                "amount_paid": 1700,
                "charge": {"id": "ch_test", "amount": 1700, "source": {
                    "id": "card_test", "brand": "Visa", "exp_month": 1,
                    "exp_year": 2030, "last4": "4242"}},
                "customer": "cus_test",
                "date": 1517356800,
                "lines": {"object": "list", "has_more": false, "data": [
                    {"id": "sli_test", "amount": 1700, "quantity": 1, "subscription": "sub_test"}
                ]},
                "number": "0001",
                "paid": true,
                "period_start": 1517356800,
                "period_end": 1519776000,
                "subscription": "sub_test",
                "subtotal": 1700,
                "total": 1700
            }"#,
        )
        .unwrap();

        assert_eq!(invoice.expanded_charge().map(|c| c.amount), Some(Cents(1700)));
        assert_eq!(invoice.created.timestamp(), 1_517_356_800);
        assert_eq!(invoice.lines.data.len(), 1);
    }

    #[test]
    fn malformed_expanded_charge_names_missing_field() {
        let err = serde_json::from_str::<Invoice>(
            r#"{"amount_due": 0, "customer": "cus_test", "created": 1517356800,
                "charge": {"id": "ch_1"},
                "lines": {"data": []}, "period_start": 1517356800,
                "period_end": 1517356800, "subtotal": 0, "total": 0}"#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("missing field `amount`"), "{err}");
    }

    #[test]
    fn upcoming_invoice_has_no_id() {
        let invoice: Invoice = serde_json::from_str(
            r#"{"amount_due": 0, "customer": "cus_test", "created": 1517356800,
                "lines": {"data": []}, "period_start": 1517356800,
                "period_end": 1517356800, "subtotal": 0, "total": 0}"#,
        )
        .unwrap();

        assert!(invoice.id.is_none());
        assert!(invoice.charge.is_none());
    }
}
