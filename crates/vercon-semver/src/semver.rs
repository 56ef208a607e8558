//! Semver facade providing high-level version operations

use thiserror::Error;

use crate::constraint::{ComparatorError, Operator, UnsupportedOperatorError, VersionComparator};
use crate::version::{Version, VersionParseError};

/// Any failure of a facade operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemverError {
    #[error(transparent)]
    Constraint(#[from] ComparatorError),
    #[error(transparent)]
    Version(#[from] VersionParseError),
    #[error(transparent)]
    UnsupportedOperator(#[from] UnsupportedOperatorError),
}

/// Main facade for semantic versioning operations
pub struct Semver;

impl Semver {
    /// Check if a version satisfies a constraint
    pub fn satisfies(version: &str, constraint: &str) -> Result<bool, SemverError> {
        let comparator = VersionComparator::parse(constraint)?;
        let version = Version::parse(version)?;
        Ok(comparator.allows(&version)?)
    }

    /// Return all versions that satisfy the given constraint, in input order.
    ///
    /// Versions that do not parse are skipped.
    pub fn satisfied_by(versions: &[&str], constraint: &str) -> Result<Vec<String>, SemverError> {
        let comparator = VersionComparator::parse(constraint)?;
        // Fail on an unknown operator even when there is nothing to filter
        Operator::from_token(comparator.operator())?;

        let mut allowed = Vec::new();
        for raw in versions {
            let version = match Version::parse(raw) {
                Ok(v) => v,
                Err(e) => {
                    log::debug!("Skipping {}", e);
                    continue;
                }
            };
            if comparator.allows(&version)? {
                allowed.push(raw.to_string());
            }
        }

        Ok(allowed)
    }

    /// Sort versions in ascending order
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, true)
    }

    /// Sort versions in descending order (reverse sort)
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, false)
    }

    fn usort(versions: &[&str], ascending: bool) -> Vec<String> {
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, raw)| match Version::parse(raw) {
                Ok(v) => Some((v, i)),
                Err(e) => {
                    log::debug!("Skipping {}", e);
                    None
                }
            })
            .collect();

        parsed.sort_by(|(a, _), (b, _)| if ascending { a.cmp(b) } else { b.cmp(a) });

        // Return original versions in sorted order
        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
