//! Style engine: attributes, rules, class paths, cascade.

pub mod attribute;
pub mod class;
pub mod rule;
pub mod cascade;

pub use attribute::{Attribute, AttributeParseError, Color};
pub use cascade::{ResolvedStyle, StyleCascade};
pub use rule::{Style, StyleRule, StyleTable};
