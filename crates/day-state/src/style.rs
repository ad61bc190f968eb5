//! Opaque style fragments and ordered style layering.
//!
//! The resolver never interprets style properties. A [`StyleFragment`] is a
//! JSON object handed through verbatim; a [`StyleStack`] is an ordered list
//! of fragments where a later fragment overrides an earlier one on key
//! collision, the same rule a renderer applies to an array of styles.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A bag of style properties, e.g. `{"backgroundColor": "#5ce600"}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment(Map<String, Value>);

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert `value` under `key` only when present.
    pub fn insert_opt<V: Into<Value>>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.0.insert(key.to_string(), v.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Copy every property of `other` into `self`, overriding existing keys.
    fn overlay(&mut self, other: &StyleFragment) {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

impl From<Map<String, Value>> for StyleFragment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for StyleFragment {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Ordered style layers for one surface of a day cell.
///
/// Empty fragments are dropped on push, so `layers()` only lists fragments
/// that contribute at least one property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleStack(Vec<StyleFragment>);

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, fragment: &StyleFragment) {
        if !fragment.is_empty() {
            self.0.push(fragment.clone());
        }
    }

    pub fn push_opt(&mut self, fragment: Option<&StyleFragment>) {
        if let Some(f) = fragment {
            self.push(f);
        }
    }

    pub fn layers(&self) -> &[StyleFragment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Merge all layers into one fragment; later layers win on collision.
    pub fn flatten(&self) -> StyleFragment {
        let mut merged = StyleFragment::new();
        for layer in &self.0 {
            merged.overlay(layer);
        }
        merged
    }
}

impl<'a> Extend<&'a StyleFragment> for StyleStack {
    fn extend<I: IntoIterator<Item = &'a StyleFragment>>(&mut self, iter: I) {
        for fragment in iter {
            self.push(fragment);
        }
    }
}
