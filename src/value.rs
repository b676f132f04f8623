//! The document template tree.
//!
//! This module provides [`Template`], the sum-typed AST a render starts
//! from: ordinary JSON scalars, arrays, and insertion-ordered objects, plus
//! [`Template::Lazy`] nodes that act as holes to be filled by streaming a
//! [`LazyRegion`](crate::LazyRegion) at write time.
//!
//! ## Core Types
//!
//! - [`Template`]: any node of the document tree
//! - [`Number`]: an integer or finite float (JSON has no Infinity/NaN; a
//!   non-finite float is rejected when the skeleton is encoded)
//!
//! ## Usage Patterns
//!
//! ### Creating templates
//!
//! ```rust
//! use json_drip::{Template, Number};
//!
//! // From primitives
//! let null = Template::Null;
//! let boolean = Template::from(true);
//! let number = Template::from(42);
//! let text = Template::from("hello");
//!
//! // Using the template! macro
//! use json_drip::template;
//! let doc = template!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Embedding a lazy region
//!
//! ```rust
//! use json_drip::{LazyRegion, Template, TemplateMap, to_string};
//!
//! let mut root = TemplateMap::new();
//! root.insert(
//!     "articles".to_string(),
//!     Template::Lazy(LazyRegion::from_values(vec![Template::from("first")])),
//! );
//! root.insert("total".to_string(), Template::from(1));
//!
//! let out = to_string(Template::Object(root)).unwrap();
//! assert_eq!(out, "{\"articles\":[\"first\"],\"total\":1}");
//! ```

use crate::{LazyRegion, TemplateMap};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;

/// A node of the document template tree.
///
/// All variants except `Lazy` are plain JSON values encoded up front by the
/// structure encoder. `Lazy` nodes are skipped during encoding and filled in
/// later, item by item, by the sequence streamer.
///
/// Templates are single-use: streaming consumes the tree together with the
/// sources its regions own.
#[derive(Debug, Default)]
pub enum Template {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Template>),
    Object(TemplateMap),
    Lazy(LazyRegion),
}

/// An integer or floating-point JSON number.
///
/// JSON cannot represent Infinity or NaN; such floats are accepted here and
/// rejected with an encoding error once the node is serialized, before any
/// bytes are written.
///
/// # Examples
///
/// ```rust
/// use json_drip::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Returns `true` if this number can be written as JSON, i.e. it is an
    /// integer or a finite float.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Integer(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and floats with no fractional part
    /// that fit in i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Template {
    /// Returns `true` if the node is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Template::Null)
    }

    /// Returns `true` if the node is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Template::Bool(_))
    }

    /// Returns `true` if the node is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Template::Number(_))
    }

    /// Returns `true` if the node is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Template::String(_))
    }

    /// Returns `true` if the node is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Template::Array(_))
    }

    /// Returns `true` if the node is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Template::Object(_))
    }

    /// Returns `true` if the node is a lazy region.
    #[inline]
    #[must_use]
    pub const fn is_lazy(&self) -> bool {
        matches!(self, Template::Lazy(_))
    }

    /// If the node is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Template::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the node is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::Template;
    ///
    /// assert_eq!(Template::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Template::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Template::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the node is an i64 integer or a whole-number float, returns it.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Template::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the node is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Template>> {
        match self {
            Template::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the node is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&TemplateMap> {
        match self {
            Template::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Counts the lazy regions reachable from this node, in document order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::{LazyRegion, Template};
    ///
    /// let doc = Template::Array(vec![
    ///     Template::from(1),
    ///     Template::Lazy(LazyRegion::from_values(vec![])),
    /// ]);
    /// assert_eq!(doc.region_count(), 1);
    /// ```
    #[must_use]
    pub fn region_count(&self) -> usize {
        match self {
            Template::Lazy(_) => 1,
            Template::Array(items) => items.iter().map(Template::region_count).sum(),
            Template::Object(map) => map.values().map(Template::region_count).sum(),
            _ => 0,
        }
    }
}

// Lazy nodes carry a consumed-once source and have no meaningful equality;
// two regions never compare equal, even to themselves.
impl PartialEq for Template {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Template::Null, Template::Null) => true,
            (Template::Bool(a), Template::Bool(b)) => a == b,
            (Template::Number(a), Template::Number(b)) => a == b,
            (Template::String(a), Template::String(b)) => a == b,
            (Template::Array(a), Template::Array(b)) => a == b,
            (Template::Object(a), Template::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Serialize for Template {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Template::Null => serializer.serialize_unit(),
            Template::Bool(b) => serializer.serialize_bool(*b),
            Template::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Template::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Template::String(s) => serializer.serialize_str(s),
            Template::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Template::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Template::Lazy(_) => Err(serde::ser::Error::custom(
                "lazy region cannot be serialized eagerly; stream the template instead",
            )),
        }
    }
}

// From implementations for creating Template nodes from primitives
impl From<bool> for Template {
    fn from(value: bool) -> Self {
        Template::Bool(value)
    }
}

impl From<i8> for Template {
    fn from(value: i8) -> Self {
        Template::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Template {
    fn from(value: i16) -> Self {
        Template::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Template {
    fn from(value: i32) -> Self {
        Template::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Template {
    fn from(value: i64) -> Self {
        Template::Number(Number::Integer(value))
    }
}

impl From<u8> for Template {
    fn from(value: u8) -> Self {
        Template::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Template {
    fn from(value: u16) -> Self {
        Template::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Template {
    fn from(value: u32) -> Self {
        Template::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for Template {
    fn from(value: f32) -> Self {
        Template::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Template {
    fn from(value: f64) -> Self {
        Template::Number(Number::Float(value))
    }
}

impl From<String> for Template {
    fn from(value: String) -> Self {
        Template::String(value)
    }
}

impl From<&str> for Template {
    fn from(value: &str) -> Self {
        Template::String(value.to_string())
    }
}

impl From<Vec<Template>> for Template {
    fn from(value: Vec<Template>) -> Self {
        Template::Array(value)
    }
}

impl From<TemplateMap> for Template {
    fn from(value: TemplateMap) -> Self {
        Template::Object(value)
    }
}

impl From<LazyRegion> for Template {
    fn from(value: LazyRegion) -> Self {
        Template::Lazy(value)
    }
}

impl From<DateTime<Utc>> for Template {
    fn from(value: DateTime<Utc>) -> Self {
        Template::String(value.to_rfc3339())
    }
}
