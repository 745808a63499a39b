//! Customers and their payment sources.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::envelope::ListEnvelope;
use crate::ids::{CardId, CustomerId, EmailAddress, Vat};

/// Metadata key holding free-form text printed on every invoice.
pub const EXTRA_INVOICE_INFO_KEY: &str = "extraInvoiceInfo";

/// Stripe customer object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: CustomerId,
    /// Created timestamp.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created: Option<DateTime<Utc>>,
    /// Business VAT number.
    #[serde(default)]
    pub business_vat_id: Option<Vat>,
    /// Default payment source.
    #[serde(default)]
    pub default_source: Option<CardId>,
    /// Description.
    #[serde(default)]
    pub description: Option<String>,
    /// Customer email.
    #[serde(default)]
    pub email: Option<EmailAddress>,
    /// Metadata attached to the customer.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    /// Attached payment sources.
    #[serde(default)]
    pub sources: Option<ListEnvelope<Card>>,
}

impl Customer {
    /// The extra invoice text stored in the customer's metadata.
    #[must_use]
    pub fn extra_invoice_info(&self) -> Option<&str> {
        self.metadata
            .get(EXTRA_INVOICE_INFO_KEY)
            .map(String::as_str)
    }

    /// The customer's default card, looked up among its sources.
    #[must_use]
    pub fn default_card(&self) -> Option<&Card> {
        let default = self.default_source.as_ref()?;
        self.sources
            .as_ref()?
            .data
            .iter()
            .find(|card| &card.id == default)
    }
}

/// A card attached to a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card source ID.
    pub id: CardId,
    /// Card brand.
    pub brand: Brand,
    /// Owning customer.
    #[serde(default)]
    pub customer: Option<CustomerId>,
    /// Expiration month (1-12).
    pub exp_month: u8,
    /// Expiration year.
    pub exp_year: u16,
    /// Last four digits.
    pub last4: String,
}

/// Card brand as Stripe spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brand {
    /// Visa.
    Visa,
    /// American Express.
    #[serde(rename = "American Express")]
    AmericanExpress,
    /// MasterCard.
    MasterCard,
    /// Discover.
    Discover,
    /// JCB.
    #[serde(rename = "JCB")]
    Jcb,
    /// Diners Club.
    #[serde(rename = "Diners Club")]
    DinersClub,
    /// `UnionPay`.
    UnionPay,
    /// Any brand Stripe could not identify.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_reads_extra_invoice_info() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": "cus_test",
                "object": "customer",
                "created": 1517356800,
                "email": "blob@example.com",
                "metadata": {"extraInvoiceInfo": "VAT: 1234567890"}
            }"#,
        )
        .unwrap();

        assert_eq!(customer.extra_invoice_info(), Some("VAT: 1234567890"));
        assert_eq!(customer.created.map(|c| c.timestamp()), Some(1_517_356_800));
    }

    #[test]
    fn default_card_is_found_among_sources() {
        let customer: Customer = serde_json::from_str(
            r#"{
                "id": "cus_test",
                "default_source": "card_test",
                "sources": {"object": "list", "has_more": false, "data": [
                    {"id": "card_test", "brand": "Visa", "customer": "cus_test",
                     "exp_month": 1, "exp_year": 2030, "last4": "4242"}
                ]}
            }"#,
        )
        .unwrap();

        let card = customer.default_card().unwrap();
        assert_eq!(card.brand, Brand::Visa);
        assert_eq!(card.last4, "4242");
    }

    #[test]
    fn unknown_brand_is_tolerated() {
        let brand: Brand = serde_json::from_str(r#""Cartes Bancaires""#).unwrap();
        assert_eq!(brand, Brand::Unknown);
    }
}
