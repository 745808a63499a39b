//! Form encoding for Stripe request parameters.
//!
//! Stripe takes `application/x-www-form-urlencoded` bodies and spells nested
//! values with brackets: `metadata[key]=value`, `items[0][plan]=value`.
//! [`Params`] is an insertion-ordered bag of [`Param`] values that flattens to
//! that syntax. Absent values are dropped before encoding.

use url::form_urlencoded;

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A scalar value, sent as-is (an empty string is still sent).
    Value(String),
    /// A nested mapping, flattened as `key[child]`.
    Map(Params),
    /// An indexed list, flattened as `key[0]`, `key[1]`, ...
    List(Vec<Param>),
    /// No value. The entry is omitted from the encoded output.
    Absent,
}

impl From<&str> for Param {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for Param {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<bool> for Param {
    fn from(value: bool) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<u32> for Param {
    fn from(value: u32) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<Params> for Param {
    fn from(value: Params) -> Self {
        Self::Map(value)
    }
}

impl From<Vec<Param>> for Param {
    fn from(value: Vec<Param>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<Param>> From<Option<T>> for Param {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// An ordered set of named parameters.
///
/// Keys keep the order they were first inserted in, so encoding is deterministic.
/// Inserting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, Param)>,
}

impl Params {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Param>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Param>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up a parameter by its top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Whether encoding would produce no pairs at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flatten().is_empty()
    }

    /// Flatten into `(key, value)` pairs using bracket syntax, before percent-encoding.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            flatten_into(key.clone(), value, &mut pairs);
        }
        pairs
    }

    /// Encode as `application/x-www-form-urlencoded`.
    ///
    /// The same output is valid as a query string fragment.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.flatten())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Param>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

fn flatten_into(key: String, value: &Param, pairs: &mut Vec<(String, String)>) {
    match value {
        Param::Absent => {}
        Param::Value(value) => pairs.push((key, value.clone())),
        Param::Map(params) => {
            for (child, value) in &params.entries {
                flatten_into(format!("{key}[{child}]"), value, pairs);
            }
        }
        Param::List(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten_into(format!("{key}[{index}]"), value, pairs);
            }
        }
    }
}
