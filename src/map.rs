//! Ordered map type for document objects.
//!
//! This module provides [`TemplateMap`], a wrapper around [`IndexMap`] that
//! maintains insertion order for object members. Order matters here: the
//! renderer's contract is that streamed output is byte-for-byte what a
//! non-streamed encode of the same template would produce, and that only
//! holds if object members serialize in a deterministic, caller-controlled
//! order.
//!
//! ## Examples
//!
//! ```rust
//! use json_drip::{Template, TemplateMap};
//!
//! let mut map = TemplateMap::new();
//! map.insert("name".to_string(), Template::from("Alice"));
//! map.insert("age".to_string(), Template::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

/// An insertion-ordered map of string keys to template nodes.
///
/// # Examples
///
/// ```rust
/// use json_drip::{Template, TemplateMap};
///
/// let mut map = TemplateMap::new();
/// map.insert("first".to_string(), Template::from(1));
/// map.insert("second".to_string(), Template::from(2));
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Default, PartialEq)]
pub struct TemplateMap(IndexMap<String, crate::Template>);

impl TemplateMap {
    /// Creates an empty `TemplateMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::TemplateMap;
    ///
    /// let map = TemplateMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        TemplateMap(IndexMap::new())
    }

    /// Creates an empty `TemplateMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TemplateMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use json_drip::{Template, TemplateMap};
    ///
    /// let mut map = TemplateMap::new();
    /// assert!(map.insert("key".to_string(), Template::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Template::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Template) -> Option<crate::Template> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Template> {
        self.0.get(key)
    }

    /// Returns the number of members in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Template> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Template> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Template> {
        self.0.iter()
    }
}

impl From<HashMap<String, crate::Template>> for TemplateMap {
    fn from(map: HashMap<String, crate::Template>) -> Self {
        TemplateMap(map.into_iter().collect())
    }
}

impl IntoIterator for TemplateMap {
    type Item = (String, crate::Template);
    type IntoIter = indexmap::map::IntoIter<String, crate::Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, crate::Template)> for TemplateMap {
    fn from_iter<T: IntoIterator<Item = (String, crate::Template)>>(iter: T) -> Self {
        TemplateMap(IndexMap::from_iter(iter))
    }
}
