use std::collections::HashMap;

use crate::attribute_info::NominalAttributeInfo;
use crate::error::{Result, SchemaError};

/// Type flag used when building an attribute from a name and a value list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Nominal,
    Continuous,
}

/// What an attribute holds: a closed value domain, or nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    Nominal(NominalAttributeInfo),
    Continuous,
}

/// One field of a dataset schema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    name: String,
    id: usize,
    kind: AttributeKind,
}

impl Attribute {
    /// Builds an attribute from a type flag and its nominal values.
    ///
    /// Nominal attributes need a non-empty list without duplicate labels, and
    /// value ids follow the order of the list. Continuous attributes take
    /// `None` (or an empty list); any values passed for them are rejected
    /// rather than dropped.
    pub fn new(
        name: impl Into<String>,
        id: usize,
        attr_type: AttributeType,
        nominal_values: Option<Vec<String>>,
    ) -> Result<Self> {
        let name = name.into();
        let kind = match attr_type {
            AttributeType::Nominal => {
                let values = nominal_values.unwrap_or_default();
                AttributeKind::Nominal(NominalAttributeInfo::new(values, &name)?)
            }
            AttributeType::Continuous => match nominal_values {
                Some(values) if !values.is_empty() => {
                    return Err(SchemaError::UnexpectedNominalValues(name));
                }
                _ => AttributeKind::Continuous,
            },
        };
        Ok(Attribute { name, id, kind })
    }

    pub fn nominal<S: Into<String>>(
        name: impl Into<String>,
        id: usize,
        values: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let values = values.into_iter().map(Into::into).collect();
        Self::new(name, id, AttributeType::Nominal, Some(values))
    }

    pub fn continuous(name: impl Into<String>, id: usize) -> Self {
        Attribute {
            name: name.into(),
            id,
            kind: AttributeKind::Continuous,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The id this attribute was built with. Inside an `AttributeSet` the
    /// position is authoritative; see `AttributeSet::push_attribute`.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn attribute_type(&self) -> AttributeType {
        match self.kind {
            AttributeKind::Nominal(_) => AttributeType::Nominal,
            AttributeKind::Continuous => AttributeType::Continuous,
        }
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self.kind, AttributeKind::Nominal(_))
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self.kind, AttributeKind::Continuous)
    }

    /// Size of the value domain; zero for continuous attributes.
    pub fn num_values(&self) -> usize {
        match &self.kind {
            AttributeKind::Nominal(info) => info.num_values(),
            AttributeKind::Continuous => 0,
        }
    }

    pub fn has_value(&self, value: &str) -> bool {
        match &self.kind {
            AttributeKind::Nominal(info) => info.has_value(value),
            AttributeKind::Continuous => false,
        }
    }

    pub fn nominal_value_id(&self, value: &str) -> Result<usize> {
        self.info()?
            .index_of(value)
            .ok_or_else(|| SchemaError::unknown_value(&self.name, value))
    }

    pub fn nominal_value_name(&self, value_id: usize) -> Result<&str> {
        let info = self.info()?;
        info.value(value_id)
            .ok_or_else(|| SchemaError::InvalidValueId {
                attribute: self.name.clone(),
                id: value_id,
                count: info.num_values(),
            })
    }

    pub fn nominal_value_map(&self) -> Result<&HashMap<String, usize>> {
        Ok(self.info()?.value_map())
    }

    /// Value names in value-id order.
    pub fn nominal_values(&self) -> Result<&[String]> {
        Ok(self.info()?.values())
    }

    fn info(&self) -> Result<&NominalAttributeInfo> {
        match &self.kind {
            AttributeKind::Nominal(info) => Ok(info),
            AttributeKind::Continuous => Err(SchemaError::type_mismatch(&self.name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color() -> Attribute {
        Attribute::nominal("color", 0, ["red", "green", "blue"]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let attr = color();
        assert_eq!(attr.name(), "color");
        assert_eq!(attr.id(), 0);
        assert_eq!(attr.attribute_type(), AttributeType::Nominal);
        assert!(attr.is_nominal());
        assert!(!attr.is_continuous());
        assert_eq!(attr.num_values(), 3);

        let height = Attribute::continuous("height", 4);
        assert_eq!(height.id(), 4);
        assert_eq!(height.attribute_type(), AttributeType::Continuous);
        assert_eq!(height.kind(), &AttributeKind::Continuous);
        assert_eq!(height.num_values(), 0);
    }

    #[test]
    fn test_nominal_lookups() {
        let attr = color();
        assert_eq!(attr.nominal_value_id("green"), Ok(1));
        assert_eq!(attr.nominal_value_name(1), Ok("green"));
        assert_eq!(
            attr.nominal_value_id("purple"),
            Err(SchemaError::unknown_value("color", "purple"))
        );
        assert_eq!(
            attr.nominal_value_name(3),
            Err(SchemaError::InvalidValueId {
                attribute: "color".to_string(),
                id: 3,
                count: 3,
            })
        );
    }

    #[test]
    fn test_value_round_trip() {
        let attr = color();
        for value in attr.nominal_values().unwrap() {
            let id = attr.nominal_value_id(value).unwrap();
            assert_eq!(attr.nominal_value_name(id).unwrap(), value);
        }
        let map = attr.nominal_value_map().unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map["blue"], 2);
    }

    #[test]
    fn test_continuous_has_no_domain() {
        let attr = Attribute::continuous("height", 0);
        let mismatch = SchemaError::type_mismatch("height");
        assert_eq!(attr.nominal_value_id("tall").unwrap_err(), mismatch);
        assert_eq!(attr.nominal_value_name(0).unwrap_err(), mismatch);
        assert_eq!(attr.nominal_value_map().unwrap_err(), mismatch);
        assert_eq!(attr.nominal_values().unwrap_err(), mismatch);
        assert!(!attr.has_value("tall"));
    }

    #[test]
    fn test_new_checks_domain_against_type() {
        let err = Attribute::new("a", 0, AttributeType::Nominal, None).unwrap_err();
        assert_eq!(err, SchemaError::EmptyNominalDomain("a".to_string()));

        let err = Attribute::new("a", 0, AttributeType::Nominal, Some(vec![])).unwrap_err();
        assert_eq!(err, SchemaError::EmptyNominalDomain("a".to_string()));

        let err = Attribute::new(
            "h",
            0,
            AttributeType::Continuous,
            Some(vec!["tall".to_string()]),
        )
        .unwrap_err();
        assert_eq!(err, SchemaError::UnexpectedNominalValues("h".to_string()));

        let attr = Attribute::new("h", 2, AttributeType::Continuous, Some(vec![])).unwrap();
        assert!(attr.is_continuous());
        let attr = Attribute::new("h", 2, AttributeType::Continuous, None).unwrap();
        assert_eq!(attr, Attribute::continuous("h", 2));
    }
}
