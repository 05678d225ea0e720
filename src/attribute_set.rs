use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use tracing::{debug, warn};

use crate::attribute::{Attribute, AttributeKind, AttributeType};
use crate::error::{Result, SchemaError};

/// Ordered, append-only registry of attributes.
///
/// An attribute's id is its position in the registry. Names are unique, and at
/// most one attribute is designated as the class attribute. Mutation needs
/// `&mut self` and only ever appends, so ids handed out earlier stay valid.
#[derive(Clone, Debug, Default)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
    // Name of each attribute to its position in `attributes`
    name_ids: HashMap<String, usize>,
    class_attribute: Option<usize>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        AttributeSet {
            attributes: Vec::with_capacity(capacity),
            name_ids: HashMap::with_capacity(capacity),
            class_attribute: None,
        }
    }

    /// Builds a new attribute with the next free id and appends it.
    ///
    /// Returns the assigned id. Nothing is changed if the name is already
    /// taken or the value list does not fit the type.
    pub fn add_attribute(
        &mut self,
        name: &str,
        attr_type: AttributeType,
        nominal_values: Option<Vec<String>>,
    ) -> Result<usize> {
        if self.contains(name) {
            return Err(SchemaError::DuplicateAttributeName(name.to_string()));
        }
        let id = self.attributes.len();
        let attr = Attribute::new(name, id, attr_type, nominal_values)?;
        Ok(self.append(attr))
    }

    /// Appends a pre-built attribute as is.
    ///
    /// The attribute keeps the id it was built with, but lookups go by
    /// position: the returned id is the one the registry resolves.
    pub fn push_attribute(&mut self, attr: Attribute) -> Result<usize> {
        if self.contains(attr.name()) {
            return Err(SchemaError::DuplicateAttributeName(attr.name().to_string()));
        }
        let position = self.attributes.len();
        if attr.id() != position {
            warn!(
                "Attribute {} claims id {} but is stored at position {}",
                attr.name(),
                attr.id(),
                position
            );
        }
        Ok(self.append(attr))
    }

    fn append(&mut self, attr: Attribute) -> usize {
        let id = self.attributes.len();
        debug!(
            "Adding attribute {} as {} ({:?}, {} values)",
            attr.name(),
            id,
            attr.attribute_type(),
            attr.num_values()
        );
        self.name_ids.insert(attr.name().to_string(), id);
        self.attributes.push(attr);
        id
    }

    pub fn attribute_by_id(&self, id: usize) -> Result<&Attribute> {
        self.attributes.get(id).ok_or(SchemaError::OutOfRange {
            id,
            count: self.attributes.len(),
        })
    }

    pub fn attribute_by_name(&self, name: &str) -> Result<&Attribute> {
        let id = self.id_of(name)?;
        self.attribute_by_id(id)
    }

    /// Position of the named attribute.
    pub fn id_of(&self, name: &str) -> Result<usize> {
        self.name_ids
            .get(name)
            .copied()
            .ok_or_else(|| SchemaError::UnknownAttributeName(name.to_string()))
    }

    pub fn nominal_value_id(&self, attr_name: &str, value: &str) -> Result<usize> {
        self.attribute_by_name(attr_name)?.nominal_value_id(value)
    }

    pub fn nominal_value_id_by_id(&self, attr_id: usize, value: &str) -> Result<usize> {
        self.attribute_by_id(attr_id)?.nominal_value_id(value)
    }

    pub fn nominal_value_name(&self, attr_id: usize, value_id: usize) -> Result<&str> {
        self.attribute_by_id(attr_id)?.nominal_value_name(value_id)
    }

    pub fn num_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// All attributes in id order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Attribute> {
        self.attributes.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_ids.contains_key(name)
    }

    /// Designates the named attribute as the class attribute, replacing any
    /// earlier designation.
    pub fn set_class(&mut self, name: &str) -> Result<()> {
        let id = self.id_of(name)?;
        debug!("Class attribute set to {} ({})", name, id);
        self.class_attribute = Some(id);
        Ok(())
    }

    pub fn class_attr_id(&self) -> Result<usize> {
        self.class_attribute.ok_or(SchemaError::NoClassAttributeSet)
    }

    pub fn class_attr_name(&self) -> Result<&str> {
        Ok(self.class_attribute()?.name())
    }

    pub fn class_attribute(&self) -> Result<&Attribute> {
        self.attribute_by_id(self.class_attr_id()?)
    }

    /// Number of classes, i.e. the size of the class attribute's domain.
    pub fn num_classes(&self) -> Result<usize> {
        let class = self.class_attribute()?;
        match class.kind() {
            AttributeKind::Nominal(info) => Ok(info.num_values()),
            AttributeKind::Continuous => Err(SchemaError::type_mismatch(class.name())),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ATTRIBUTES:")?;
        for (id, attr) in self.attributes.iter().enumerate() {
            let marker = if self.class_attribute == Some(id) {
                " (class)"
            } else {
                ""
            };
            writeln!(f, "{}, {}{}", attr.name(), id, marker)?;
            match attr.kind() {
                AttributeKind::Nominal(info) => {
                    writeln!(f, "Nominal values:")?;
                    writeln!(
                        f,
                        "{}",
                        info.values()
                            .iter()
                            .enumerate()
                            .map(|(value_id, value)| format!("{}, {}", value, value_id))
                            .join("\n")
                    )?;
                }
                AttributeKind::Continuous => writeln!(f, "Continuous")?,
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
