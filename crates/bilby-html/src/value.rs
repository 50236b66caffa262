//! The interpolation value model.
//!
//! Dispatch over interpolated values is an explicit sum type rather than
//! runtime type inspection: each variant corresponds to one capability the
//! dispatcher may use. [`Value::Markup`] renders as trusted markup,
//! [`Value::Map`] can serialize as an attribute set, and booleans, lists,
//! and maps can supply per-attribute representations. Everything has a
//! generic textual form via [`Display`](core::fmt::Display), which is the
//! documented last-resort fallback in every disposition.

use core::fmt;
use std::collections::BTreeMap;

use crate::html::HTML;

/// A typed value interpolated into a document under construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Pre-escaped, trusted markup. Inserted verbatim in text position.
    Markup(HTML),
    /// Plain text. Entity-escaped in text position.
    String(String),
    /// An integer, rendered in decimal.
    Integer(i64),
    /// A floating-point number, rendered with the shortest round-trip form.
    Float(f64),
    /// A boolean. Subject to the boolean-attribute rules in attribute
    /// position.
    Bool(bool),
    /// An ordered sequence of values.
    List(Vec<Value>),
    /// An ordered collection of key-value pairs. Duplicate keys are
    /// permitted; serialization sorts stably, so duplicates keep their
    /// relative input order.
    Map(Vec<(String, Value)>),
}

impl Value {
    /// Build a [`Value::Map`] from key-value pairs, preserving input order.
    #[must_use]
    pub fn entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl fmt::Display for Value {
    /// The generic textual conversion: scalars render as expected, markup
    /// renders verbatim, lists as `[a, b]`, and maps as `{k: v}` in entry
    /// order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markup(markup) => f.write_str(markup.as_str()),
            Self::String(text) => f.write_str(text),
            Self::Integer(number) => write!(f, "{number}"),
            Self::Float(number) => write!(f, "{number}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

impl From<HTML> for Value {
    fn from(markup: HTML) -> Self {
        Self::Markup(markup)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Integer(number)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Integer(i64::from(number))
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(f64::from(number))
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<String> + Ord,
    V: Into<Value>,
{
    fn from(entries: BTreeMap<K, V>) -> Self {
        Self::entries(entries)
    }
}
