//! Version values used as constraint bounds and candidates

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    // MAJOR[.MINOR[.PATCH]][-PRERELEASE][+BUILD] with an optional leading v
    static ref VERSION_RE: Regex = Regex::new(
        r"^[vV]?(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:-([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?(?:\+([0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*))?$"
    ).unwrap();
}

/// Error returned when a string is not a valid version
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid version string \"{0}\"")]
pub struct VersionParseError(pub String);

/// A single dot separated prerelease identifier.
///
/// Numeric identifiers sort before alphanumeric ones, which is what the
/// variant order gives us through the derived `Ord`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Identifier {
    Numeric(u64),
    AlphaNumeric(String),
}

impl Identifier {
    fn parse(part: &str) -> Self {
        if part.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = part.parse() {
                return Identifier::Numeric(n);
            }
        }
        Identifier::AlphaNumeric(part.to_string())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(n) => write!(f, "{}", n),
            Identifier::AlphaNumeric(s) => write!(f, "{}", s),
        }
    }
}

/// A parsed version.
///
/// Equality and ordering use version precedence only: build metadata and the
/// raw source text never take part in a comparison. The default value is
/// `0.0.0` with empty raw text, which constraints treat as "no version given".
#[derive(Debug, Clone, Default)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    pre: Vec<Identifier>,
    build: Vec<String>,
    raw: String,
}

impl Version {
    /// Parse a version string such as `1.2.3`, `v2`, or `1.0.0-rc.1+build.5`
    pub fn parse(raw: &str) -> Result<Self, VersionParseError> {
        let caps = VERSION_RE
            .captures(raw.trim())
            .ok_or_else(|| VersionParseError(raw.to_string()))?;

        let number = |idx: usize| -> Result<u64, VersionParseError> {
            match caps.get(idx) {
                Some(m) => m
                    .as_str()
                    .parse()
                    .map_err(|_| VersionParseError(raw.to_string())),
                None => Ok(0),
            }
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            pre: caps
                .get(4)
                .map(|m| m.as_str().split('.').map(Identifier::parse).collect())
                .unwrap_or_default(),
            build: caps
                .get(5)
                .map(|m| m.as_str().split('.').map(str::to_string).collect())
                .unwrap_or_default(),
            raw: raw.to_string(),
        })
    }

    /// The text this version was parsed from, untouched
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Major version number
    pub fn major(&self) -> u64 {
        self.major
    }

    /// Minor version number, 0 when omitted
    pub fn minor(&self) -> u64 {
        self.minor
    }

    /// Patch version number, 0 when omitted
    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// True when a prerelease part such as `-rc.1` is present
    pub fn is_prerelease(&self) -> bool {
        !self.pre.is_empty()
    }

    /// Check if self == other
    pub fn is_equal_to(&self, other: &Version) -> bool {
        self.precedence(other) == Ordering::Equal
    }

    /// Check if self < other
    pub fn is_older_than(&self, other: &Version) -> bool {
        self.precedence(other) == Ordering::Less
    }

    /// Check if self > other
    pub fn is_newer_than(&self, other: &Version) -> bool {
        self.precedence(other) == Ordering::Greater
    }

    /// Check if self <= other
    pub fn is_older_than_or_equal_to(&self, other: &Version) -> bool {
        self.precedence(other) != Ordering::Greater
    }

    /// Check if self >= other
    pub fn is_newer_than_or_equal_to(&self, other: &Version) -> bool {
        self.precedence(other) != Ordering::Less
    }

    fn precedence(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (self.pre.is_empty(), other.pre.is_empty()) {
                (true, true) => Ordering::Equal,
                // A release outranks any of its prereleases
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.pre.cmp(&other.pre),
            })
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.precedence(other)
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            let pre: Vec<String> = self.pre.iter().map(|id| id.to_string()).collect();
            write!(f, "-{}", pre.join("."))?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build.join("."))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_full() {
        let version = v("1.2.3-rc.1+build.5");
        assert_eq!(version.major(), 1);
        assert_eq!(version.minor(), 2);
        assert_eq!(version.patch(), 3);
        assert!(version.is_prerelease());
        assert_eq!(version.raw(), "1.2.3-rc.1+build.5");
        assert_eq!(version.to_string(), "1.2.3-rc.1+build.5");
    }

    #[test]
    fn test_parse_partial_and_prefixed() {
        assert_eq!(v("2").to_string(), "2.0.0");
        assert_eq!(v("2.4").to_string(), "2.4.0");
        assert_eq!(v("v1.0.1").to_string(), "1.0.1");
        assert_eq!(v("V3.2.1").to_string(), "3.2.1");
        // raw keeps the input as written
        assert_eq!(v(" v1.0 ").raw(), " v1.0 ");
    }

    #[test]
    fn test_parse_fails() {
        for input in ["", " ", "a", "1.", "1.2.3.4", "1.2.3-", "1.2.3+", "=1.0.0", "1.0.0 || 2.0.0", "99999999999999999999"] {
            let err = Version::parse(input).unwrap_err();
            assert_eq!(err, VersionParseError(input.to_string()), "input {:?}", input);
        }
    }

    #[test]
    fn test_from_str() {
        let version: Version = "1.2.3".parse().unwrap();
        assert!(version.is_equal_to(&v("1.2.3")));
        assert!("nope".parse::<Version>().is_err());
    }

    #[test]
    fn test_default_is_zero_with_empty_raw() {
        let zero = Version::default();
        assert_eq!(zero.raw(), "");
        assert_eq!(zero.to_string(), "0.0.0");
        assert!(zero.is_equal_to(&v("0.0.0")));
    }

    #[test]
    fn test_predicates() {
        let a = v("1.2.3");
        let b = v("1.3.0");

        assert!(a.is_older_than(&b));
        assert!(!b.is_older_than(&a));
        assert!(b.is_newer_than(&a));
        assert!(!a.is_newer_than(&a));
        assert!(a.is_older_than_or_equal_to(&a));
        assert!(a.is_older_than_or_equal_to(&b));
        assert!(!b.is_older_than_or_equal_to(&a));
        assert!(b.is_newer_than_or_equal_to(&b));
        assert!(b.is_newer_than_or_equal_to(&a));
        assert!(!a.is_newer_than_or_equal_to(&b));
        assert!(a.is_equal_to(&v("v1.2.3")));
        assert!(!a.is_equal_to(&b));
    }

    #[test]
    fn test_prerelease_precedence() {
        // Ordering example from semver.org
        let ordered = [
            "1.0.0-alpha",
            "1.0.0-alpha.1",
            "1.0.0-alpha.beta",
            "1.0.0-beta",
            "1.0.0-beta.2",
            "1.0.0-beta.11",
            "1.0.0-rc.1",
            "1.0.0",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]).is_older_than(&v(pair[1])), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_build_metadata_ignored() {
        assert!(v("1.0.0+build.1").is_equal_to(&v("1.0.0+build.2")));
        assert_eq!(v("1.0.0+a"), v("1.0.0"));
    }

    #[test]
    fn test_ord_agrees_with_predicates() {
        let mut versions = vec![v("2.0.0"), v("1.0.0-beta"), v("1.10.0"), v("1.2.0")];
        versions.sort();
        let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
        assert_eq!(sorted, vec!["1.0.0-beta", "1.2.0", "1.10.0", "2.0.0"]);
    }
}
