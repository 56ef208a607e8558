//! VersionComparator - a single operator + version constraint

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::operator::{parse_operator, InvalidOperatorError, Operator, UnsupportedOperatorError};
use crate::version::{Version, VersionParseError};

/// Error building a comparator from a constraint string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparatorError {
    #[error("failed to parse operator")]
    Operator(#[source] InvalidOperatorError),
    #[error("failed to parse version")]
    Version(#[source] VersionParseError),
}

/// A constraint made of an operator token and a bound version.
///
/// The zero value (an empty operator and a bound with empty raw text) allows
/// every candidate. A comparator never changes after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionComparator {
    bound: Version,
    operator: String,
}

impl VersionComparator {
    /// Create a comparator from its parts without validating the operator
    pub fn new(bound: Version, operator: impl Into<String>) -> Self {
        VersionComparator {
            bound,
            operator: operator.into(),
        }
    }

    /// Parse a constraint such as `>=1.2.3`.
    ///
    /// An empty string yields the zero value comparator.
    pub fn parse(raw: &str) -> Result<Self, ComparatorError> {
        let operator = parse_operator(raw).map_err(ComparatorError::Operator)?;
        if raw.is_empty() {
            return Ok(Self::default());
        }

        let bound = Version::parse(&raw[operator.len()..]).map_err(ComparatorError::Version)?;

        Ok(VersionComparator {
            bound,
            operator: operator.to_string(),
        })
    }

    /// The version candidates are compared against
    pub fn bound(&self) -> &Version {
        &self.bound
    }

    /// The operator token as written
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// True when no operator and no version were given
    pub fn is_unconstrained(&self) -> bool {
        self.operator.is_empty() && self.bound.raw().is_empty()
    }

    /// Check whether `candidate` satisfies this constraint
    pub fn allows(&self, candidate: &Version) -> Result<bool, UnsupportedOperatorError> {
        let allowed = match Operator::from_token(&self.operator)? {
            Operator::Equal => self.bound.is_equal_to(candidate),
            Operator::GreaterThan => self.bound.is_older_than(candidate),
            Operator::LessThan => self.bound.is_newer_than(candidate),
            Operator::GreaterThanOrEqual => self.bound.is_older_than_or_equal_to(candidate),
            Operator::LessThanOrEqual => self.bound.is_newer_than_or_equal_to(candidate),
            // Nothing given upstream means anything goes
            Operator::Unspecified if self.bound.raw().is_empty() => true,
            Operator::Unspecified => self.bound.is_equal_to(candidate),
        };

        Ok(allowed)
    }
}

impl FromStr for VersionComparator {
    type Err = ComparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VersionComparator::parse(s)
    }
}

impl fmt::Display for VersionComparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            return write!(f, "*");
        }
        write!(f, "{}{}", self.operator, self.bound.raw())
    }
}
