//! Identifier types for Stripe objects.
//!
//! Every Stripe object is addressed by an opaque string such as `cus_123` or
//! `sub_456`. Wrapping each in its own newtype keeps a customer id from being
//! passed where a plan id is expected.
//!
//! # Macro-based ID Types
//!
//! The `string_id_type!` macro generates the newtypes so that every identifier
//! gets the same serialization, parsing, and display behavior.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IdError;

/// Macro to define a string-backed identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with implementations for:
/// - `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `Serialize`, `Deserialize` (as a bare string, rejecting empty values)
/// - `FromStr`, `Display`, `Debug`
/// - `TryFrom<String>`, `Into<String>`, `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// string_id_type!(WidgetId, "A widget identifier.");
/// let id: WidgetId = "wid_123".parse().unwrap();
/// assert_eq!(id.as_str(), "wid_123");
/// ```
macro_rules! string_id_type {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create an identifier, rejecting empty strings.
            ///
            /// # Errors
            ///
            /// Returns [`IdError::Empty`] if `value` is empty or only whitespace.
            pub fn new(value: impl Into<String>) -> Result<Self, IdError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(IdError::Empty(stringify!($name)));
                }
                Ok(Self(value))
            }

            /// Return the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id_type!(CustomerId, "A Stripe customer identifier (`cus_...`).");
string_id_type!(SubscriptionId, "A Stripe subscription identifier (`sub_...`).");
string_id_type!(
    SubscriptionItemId,
    "A Stripe subscription item identifier (`si_...`).\n\nUpdating a subscription's plan targets its first item by this id."
);
string_id_type!(PlanId, "A Stripe plan identifier.\n\nPlan ids are chosen by the account owner, e.g. `individual-monthly`.");
string_id_type!(CouponId, "A Stripe coupon identifier.");
string_id_type!(InvoiceId, "A Stripe invoice identifier (`in_...`).");
string_id_type!(ChargeId, "A Stripe charge identifier (`ch_...`).");
string_id_type!(CardId, "A Stripe card source identifier (`card_...`).");
string_id_type!(
    TokenId,
    "A single-use card token (`tok_...`) produced by Stripe.js in the browser."
);
string_id_type!(EmailAddress, "A customer email address.");
string_id_type!(Vat, "A customer's business VAT number.");
