//! Errors raised by attribute and registry lookups.

use thiserror::Error;

/// Errors that can occur when building or querying an attribute schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No attribute with this name is registered.
    #[error("unknown attribute: {0}")]
    UnknownAttributeName(String),

    /// Attribute id outside `[0, count)`.
    #[error("attribute id {id} out of range (count {count})")]
    OutOfRange {
        /// Requested id.
        id: usize,
        /// Number of registered attributes.
        count: usize,
    },

    /// Nominal value id outside the attribute's value domain.
    #[error("invalid value id {id} for attribute {attribute} ({count} values)")]
    InvalidValueId {
        /// Attribute name.
        attribute: String,
        /// Requested value id.
        id: usize,
        /// Size of the value domain.
        count: usize,
    },

    /// Value name not in the attribute's value domain.
    #[error("unknown value {value} for attribute {attribute}")]
    UnknownValue {
        /// Attribute name.
        attribute: String,
        /// Requested value name.
        value: String,
    },

    /// Nominal value lookup on a continuous attribute.
    #[error("attribute {attribute} is continuous and has no nominal values")]
    TypeMismatch {
        /// Attribute name.
        attribute: String,
    },

    /// An attribute with this name is already registered.
    #[error("duplicate attribute name: {0}")]
    DuplicateAttributeName(String),

    /// Class attribute queried before any designation.
    #[error("no class attribute set")]
    NoClassAttributeSet,

    /// Nominal attribute built without any values.
    #[error("nominal attribute {0} needs at least one value")]
    EmptyNominalDomain(String),

    /// Continuous attribute built with a value list.
    #[error("continuous attribute {0} cannot have nominal values")]
    UnexpectedNominalValues(String),

    /// The same label appears twice in a nominal value list.
    #[error("nominal attribute {attribute} has duplicate label {value}")]
    DuplicateValue {
        /// Attribute name.
        attribute: String,
        /// Repeated label.
        value: String,
    },
}

impl SchemaError {
    /// Creates a type mismatch error for the named attribute.
    #[must_use]
    pub fn type_mismatch(attribute: impl Into<String>) -> Self {
        Self::TypeMismatch {
            attribute: attribute.into(),
        }
    }

    /// Creates an unknown value error.
    #[must_use]
    pub fn unknown_value(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnknownValue {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchemaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SchemaError::UnknownAttributeName("age".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("unknown attribute"));
        assert!(msg.contains("age"));
    }

    #[test]
    fn error_out_of_range() {
        let err = SchemaError::OutOfRange { id: 7, count: 3 };
        let msg = format!("{err}");
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn error_unknown_value() {
        let err = SchemaError::unknown_value("color", "purple");
        let msg = format!("{err}");
        assert!(msg.contains("color"));
        assert!(msg.contains("purple"));
    }

    #[test]
    fn error_type_mismatch() {
        let err = SchemaError::type_mismatch("height");
        assert_eq!(
            err,
            SchemaError::TypeMismatch {
                attribute: "height".to_string()
            }
        );
        assert!(format!("{err}").contains("continuous"));
    }
}
