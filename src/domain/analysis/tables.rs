//! Utility and importance tables.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OrderedMap;

/// Attribute → level → part-worth utility, zero-centered per attribute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UtilityTable {
    attributes: OrderedMap<OrderedMap<f64>>,
}

impl UtilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) the level utilities for an attribute.
    pub fn insert(&mut self, attribute: impl Into<String>, levels: OrderedMap<f64>) {
        self.attributes.insert(attribute, levels);
    }

    /// Returns the level utilities of an attribute.
    pub fn attribute(&self, attribute: &str) -> Option<&OrderedMap<f64>> {
        self.attributes.get(attribute)
    }

    /// Returns the utility of one level.
    pub fn get(&self, attribute: &str, level: &str) -> Option<f64> {
        self.attributes
            .get(attribute)
            .and_then(|levels| levels.get(level))
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OrderedMap<f64>)> {
        self.attributes.iter()
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, OrderedMap<f64>)> for UtilityTable {
    fn from_iter<I: IntoIterator<Item = (K, OrderedMap<f64>)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// Attribute → importance percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportanceTable {
    attributes: OrderedMap<f64>,
}

impl ImportanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, attribute: impl Into<String>, importance: f64) {
        self.attributes.insert(attribute, importance);
    }

    pub fn get(&self, attribute: &str) -> Option<f64> {
        self.attributes.get(attribute).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.attributes.iter().map(|(k, v)| (k, *v))
    }

    /// Sum of all percentages: 100 or 0.
    pub fn total(&self) -> f64 {
        self.attributes.values().sum()
    }

    /// Attributes ordered by importance, highest first. Ties keep table order.
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_lookup_by_attribute_and_level() {
        let table: UtilityTable = vec![(
            "color",
            vec![("red", 0.5), ("blue", -0.5)]
                .into_iter()
                .collect::<OrderedMap<f64>>(),
        )]
        .into_iter()
        .collect();

        assert_eq!(table.get("color", "red"), Some(0.5));
        assert_eq!(table.get("color", "green"), None);
        assert_eq!(table.get("size", "red"), None);
    }

    #[test]
    fn importance_ranked_is_descending_and_stable() {
        let mut table = ImportanceTable::new();
        table.insert("brand", 25.0);
        table.insert("price", 50.0);
        table.insert("size", 25.0);

        let ranked: Vec<_> = table.ranked().into_iter().map(|(k, _)| k).collect();
        assert_eq!(ranked, vec!["price", "brand", "size"]);
        assert!((table.total() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn utility_table_serializes_as_nested_map() {
        let table: UtilityTable = vec![(
            "color",
            vec![("red", 0.0)].into_iter().collect::<OrderedMap<f64>>(),
        )]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"color":{"red":0.0}}"#);
    }
}
