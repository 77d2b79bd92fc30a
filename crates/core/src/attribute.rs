//! Attach attributes to rendered nodes.
use smol_str::SmolStr;

use std::collections::BTreeMap;
use std::fmt;

/// The value of an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// A textual value, like `href="/home"`.
    Text(String),
    /// A numeric value, like `tabindex="-1"`.
    Integer(i64),
    /// A boolean attribute, like `disabled`.
    ///
    /// `false` values are not written when rendering.
    Bool(bool),
}

impl Value {
    /// Returns the text of the [`Value`], if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the number held by the [`Value`], if it is numeric.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the flag held by the [`Value`], if it is boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

/// A set of named attributes, kept sorted by name.
///
/// Setting an attribute that already exists replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: BTreeMap<SmolStr, Value>,
}

impl Attributes {
    /// Creates an empty set of [`Attributes`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the attribute with the given name, replacing any previous value.
    pub fn set(&mut self, name: impl Into<SmolStr>, value: impl Into<Value>) {
        let _ = self.entries.insert(name.into(), value.into());
    }

    /// Sets the attribute with the given name and returns the [`Attributes`].
    #[must_use]
    pub fn with(mut self, name: impl Into<SmolStr>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    /// Returns the value of the attribute with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns `true` if an attribute with the given name is set.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes the attribute with the given name, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    /// Copies every attribute of `other` into these [`Attributes`].
    ///
    /// Values in `other` win over existing ones.
    pub fn merge(&mut self, other: Attributes) {
        self.entries.extend(other.entries);
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the attributes in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
    K: Into<SmolStr>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
