//! Version constraint parsing and evaluation
//!
//! A constraint is an optional comparison operator followed by a version,
//! e.g. `>=1.2.3`. This crate splits such strings, parses the version part and
//! answers whether a candidate version is allowed by the constraint.

pub mod constraint;
mod semver;
mod version;

pub use constraint::{
    parse_operator, ComparatorError, InvalidOperatorError, Operator, UnsupportedOperatorError,
    VersionComparator,
};
pub use semver::{Semver, SemverError};
pub use version::{Version, VersionParseError};
