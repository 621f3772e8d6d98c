//! Profile - one level chosen for each attribute.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::OrderedMap;

/// A product profile: attribute name → level.
///
/// Enumerated profiles carry exactly one level for every attribute of the
/// specification. Profiles read from results or market-simulation input may
/// be partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Profile {
    levels: OrderedMap<String>,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the level for an attribute.
    pub fn with(mut self, attribute: impl Into<String>, level: impl Into<String>) -> Self {
        self.levels.insert(attribute, level.into());
        self
    }

    /// Returns the level chosen for an attribute.
    pub fn level(&self, attribute: &str) -> Option<&str> {
        self.levels.get(attribute).map(String::as_str)
    }

    /// Iterates over (attribute, level) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.levels.iter().map(|(k, v)| (k, v.as_str()))
    }

    /// Number of attributes with an assigned level.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns true if no attribute has a level.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Counts the attributes of `self` whose level differs in `other`.
    ///
    /// An attribute missing from `other` counts as a difference.
    pub fn diff_count(&self, other: &Profile) -> usize {
        self.iter()
            .filter(|(attr, level)| other.level(attr) != Some(*level))
            .count()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Profile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            levels: iter.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_count_counts_differing_attributes() {
        let a = Profile::new().with("price", "low").with("brand", "X");
        let b = Profile::new().with("price", "high").with("brand", "X");
        let c = Profile::new().with("price", "high").with("brand", "Y");

        assert_eq!(a.diff_count(&a), 0);
        assert_eq!(a.diff_count(&b), 1);
        assert_eq!(a.diff_count(&c), 2);
    }

    #[test]
    fn diff_count_treats_missing_attribute_as_different() {
        let full = Profile::new().with("price", "low").with("brand", "X");
        let partial = Profile::new().with("price", "low");
        assert_eq!(full.diff_count(&partial), 1);
    }

    #[test]
    fn displays_as_attribute_level_pairs() {
        let p = Profile::new().with("price", "$10").with("size", "large");
        assert_eq!(p.to_string(), "price=$10, size=large");
    }

    #[test]
    fn serializes_as_ordered_map() {
        let p = Profile::new().with("size", "L").with("color", "red");
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"size":"L","color":"red"}"#);

        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
