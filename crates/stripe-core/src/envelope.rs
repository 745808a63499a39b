//! Wrapper objects shared by every Stripe endpoint.

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::{MapAccessDeserializer, StrDeserializer};
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Stripe list response wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    /// Data items.
    pub data: Vec<T>,
    /// Whether there are more items.
    #[serde(default)]
    pub has_more: bool,
    /// URL for the list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl<T> ListEnvelope<T> {
    /// Build a single page holding `data`.
    #[must_use]
    pub fn new(data: Vec<T>) -> Self {
        Self {
            data,
            has_more: false,
            url: None,
        }
    }

    /// The first item of the page, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }
}

impl<T> Default for ListEnvelope<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A field that is either a bare id or, when requested with `expand[]`, the full object.
///
/// A string decodes as the id and an object as `T`. A malformed object keeps
/// the error `T` reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Expandable<I, T> {
    /// Only the identifier was returned.
    Id(I),
    /// The expanded object.
    Object(Box<T>),
}

impl<I, T> Expandable<I, T> {
    /// The expanded object, if the field was expanded.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }
}

impl<'de, I, T> Deserialize<'de> for Expandable<I, T>
where
    I: Deserialize<'de>,
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ExpandableVisitor<I, T>(PhantomData<fn() -> (I, T)>);

        impl<'de, I, T> Visitor<'de> for ExpandableVisitor<I, T>
        where
            I: Deserialize<'de>,
            T: Deserialize<'de>,
        {
            type Value = Expandable<I, T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an id string or an expanded object")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                I::deserialize(StrDeserializer::<E>::new(value)).map(Expandable::Id)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                T::deserialize(MapAccessDeserializer::new(map))
                    .map(|object| Expandable::Object(Box::new(object)))
            }
        }

        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

/// Stripe API error response.
///
/// Returned in place of the requested object when Stripe rejects a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeErrorEnvelope {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type (`invalid_request_error`, `card_error`, ...).
    #[serde(rename = "type")]
    pub error_type: String,
    /// Human readable message.
    #[serde(default)]
    pub message: Option<String>,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Decline code for card errors.
    #[serde(default)]
    pub decline_code: Option<String>,
    /// Parameter that caused the error.
    #[serde(default)]
    pub param: Option<String>,
    /// Link to Stripe's documentation for this error.
    #[serde(default)]
    pub doc_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_envelope_defaults_has_more() {
        let list: ListEnvelope<u32> = serde_json::from_str(r#"{"object":"list","data":[1,2]}"#).unwrap();
        assert_eq!(list.data, vec![1, 2]);
        assert!(!list.has_more);
        assert_eq!(list.first(), Some(&1));
    }

    #[test]
    fn expandable_accepts_id_or_object() {
        #[derive(Debug, PartialEq, Deserialize, Serialize)]
        struct Thing {
            id: String,
            name: String,
        }

        let id: Expandable<String, Thing> = serde_json::from_str(r#""thing_1""#).unwrap();
        assert_eq!(id, Expandable::Id("thing_1".to_string()));
        assert!(id.as_object().is_none());

        let object: Expandable<String, Thing> =
            serde_json::from_str(r#"{"id":"thing_1","name":"Blob"}"#).unwrap();
        assert_eq!(object.as_object().map(|t| t.name.as_str()), Some("Blob"));
    }

    #[test]
    fn malformed_expanded_object_keeps_field_error() {
        #[derive(Debug, Deserialize)]
        struct Thing {
            #[allow(dead_code)]
            id: String,
            #[allow(dead_code)]
            name: String,
        }

        let err = serde_json::from_str::<Expandable<String, Thing>>(r#"{"id":"thing_1"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{err}");

        let err = serde_json::from_str::<Expandable<String, Thing>>("42").unwrap_err();
        assert!(
            err.to_string().contains("an id string or an expanded object"),
            "{err}"
        );
    }

    #[test]
    fn error_envelope_decodes_partial_detail() {
        let envelope: StripeErrorEnvelope = serde_json::from_str(
            r#"{"error":{"type":"invalid_request_error","message":"No such customer: cus_x","param":"id"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.error_type, "invalid_request_error");
        assert_eq!(envelope.error.param.as_deref(), Some("id"));
        assert!(envelope.error.code.is_none());
    }
}
