//! Constraint types for version matching

mod comparator;
mod operator;

pub use comparator::{ComparatorError, VersionComparator};
pub use operator::{parse_operator, InvalidOperatorError, Operator, UnsupportedOperatorError};
