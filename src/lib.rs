//! Schema registry for tabular learning datasets.
//!
//! An [`AttributeSet`] records an ordered collection of attributes. Each one
//! has a name, a dense id given by its position, and a type: nominal, with a
//! closed domain of values that get their own dense ids, or continuous. One
//! attribute can be designated as the class attribute.
//!
//! ```
//! use attrset::{AttributeSet, AttributeType};
//!
//! # fn main() -> attrset::Result<()> {
//! let mut attributes = AttributeSet::new();
//! attributes.add_attribute(
//!     "color",
//!     AttributeType::Nominal,
//!     Some(vec!["red".into(), "green".into(), "blue".into()]),
//! )?;
//! attributes.add_attribute("age", AttributeType::Continuous, None)?;
//! attributes.set_class("color")?;
//!
//! assert_eq!(attributes.nominal_value_id("color", "green")?, 1);
//! assert_eq!(attributes.class_attr_id()?, 0);
//! # Ok(())
//! # }
//! ```

mod attribute;
mod attribute_info;
mod attribute_set;
mod error;

pub use attribute::{Attribute, AttributeKind, AttributeType};
pub use attribute_info::NominalAttributeInfo;
pub use attribute_set::AttributeSet;
pub use error::{Result, SchemaError};
