//! Attribute Specification - the attribute → levels definition of a study.

use serde::{Deserialize, Serialize, Serializer};

use super::{OrderedMap, ValidationError};

/// Validated, ordered mapping from attribute name to its levels.
///
/// Guarantees at least one attribute, non-blank unique attribute names, and
/// at least one non-blank level per attribute with no repeated levels.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "OrderedMap<Vec<String>>")]
pub struct AttributeSpec {
    attributes: OrderedMap<Vec<String>>,
}

impl AttributeSpec {
    /// Validates and wraps an attribute → levels map.
    pub fn try_new(attributes: OrderedMap<Vec<String>>) -> Result<Self, ValidationError> {
        if attributes.is_empty() {
            return Err(ValidationError::empty_field("attributes"));
        }

        for (name, levels) in attributes.iter() {
            if name.trim().is_empty() {
                return Err(ValidationError::invalid_format(
                    "attributes",
                    "attribute names cannot be blank",
                ));
            }

            let field = format!("attributes.{}", name);
            if levels.is_empty() {
                return Err(ValidationError::empty_field(field));
            }

            for (idx, level) in levels.iter().enumerate() {
                if level.trim().is_empty() {
                    return Err(ValidationError::invalid_format(
                        field,
                        "levels cannot be blank",
                    ));
                }
                if levels[..idx].contains(level) {
                    return Err(ValidationError::duplicate_key(field, level.clone()));
                }
            }
        }

        Ok(Self { attributes })
    }

    /// Creates a builder for constructing a specification.
    pub fn builder() -> AttributeSpecBuilder {
        AttributeSpecBuilder::default()
    }

    /// Iterates over (attribute, levels) in specification order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.attributes.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Iterates over attribute names in specification order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys()
    }

    /// Returns the levels for an attribute.
    pub fn levels(&self, attribute: &str) -> Option<&[String]> {
        self.attributes.get(attribute).map(Vec::as_slice)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Always false for a validated specification.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Size of the full factorial: the product of all level counts.
    pub fn total_profiles(&self) -> usize {
        self.attributes
            .values()
            .fold(1usize, |acc, levels| acc.saturating_mul(levels.len()))
    }
}

impl TryFrom<OrderedMap<Vec<String>>> for AttributeSpec {
    type Error = ValidationError;

    fn try_from(value: OrderedMap<Vec<String>>) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl Serialize for AttributeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.attributes.serialize(serializer)
    }
}

/// Builder for constructing AttributeSpec instances.
#[derive(Debug, Default)]
pub struct AttributeSpecBuilder {
    attributes: OrderedMap<Vec<String>>,
}

impl AttributeSpecBuilder {
    /// Adds an attribute with its levels.
    pub fn attribute(
        mut self,
        name: impl Into<String>,
        levels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.attributes
            .insert(name, levels.into_iter().map(Into::into).collect());
        self
    }

    /// Validates and builds the specification.
    pub fn build(self) -> Result<AttributeSpec, ValidationError> {
        AttributeSpec::try_new(self.attributes)
    }
}
