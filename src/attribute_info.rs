use std::collections::HashMap;

use crate::error::{Result, SchemaError};

/// Value domain of a nominal attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NominalAttributeInfo {
    // The attribute's values, indexed by value id
    values: Vec<String>,

    // Mapping of values to ids
    hashtable: HashMap<String, usize>,
}

impl NominalAttributeInfo {
    pub fn new(attribute_values: Vec<String>, attribute_name: &str) -> Result<Self> {
        if attribute_values.is_empty() {
            return Err(SchemaError::EmptyNominalDomain(attribute_name.to_string()));
        }

        let mut values = Vec::with_capacity(attribute_values.len());
        let mut hashtable = HashMap::with_capacity(attribute_values.len());

        for (i, value) in attribute_values.into_iter().enumerate() {
            if hashtable.contains_key(&value) {
                return Err(SchemaError::DuplicateValue {
                    attribute: attribute_name.to_string(),
                    value,
                });
            }

            values.push(value.clone());
            hashtable.insert(value, i);
        }

        Ok(Self { values, hashtable })
    }

    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.hashtable.get(value).copied()
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.hashtable.contains_key(value)
    }

    /// Value names in id order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn value_map(&self) -> &HashMap<String, usize> {
        &self.hashtable
    }
}
