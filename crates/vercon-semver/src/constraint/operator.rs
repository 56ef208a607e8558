//! Operator types for version constraints

use std::fmt;
use thiserror::Error;

/// Longest operator token a constraint may start with
const MAX_OPERATOR_LEN: usize = 2;

/// Comparison operators for version constraints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// No operator written in front of the version
    Unspecified,
    /// Equal (= or ==)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
}

/// The constraint starts with more comparison characters than any operator has
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator \"{operator}\" in constraint \"{raw}\"")]
pub struct InvalidOperatorError {
    pub operator: String,
    pub raw: String,
}

/// The operator token is not one the evaluator knows how to apply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported operator \"{0}\"")]
pub struct UnsupportedOperatorError(pub String);

impl Operator {
    /// Resolve an operator token as written in a constraint
    pub fn from_token(token: &str) -> Result<Self, UnsupportedOperatorError> {
        match token {
            "" => Ok(Operator::Unspecified),
            "=" | "==" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            _ => Err(UnsupportedOperatorError(token.to_string())),
        }
    }

    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Unspecified => "",
            Operator::Equal => "==",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
        }
    }

    /// Get all supported operator tokens
    pub fn supported_operators() -> &'static [&'static str] {
        &["", "=", "==", "<", "<=", ">", ">="]
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Split the operator off the front of a raw constraint.
///
/// Returns the leading run of `=`, `<` and `>` characters, which may be empty.
/// The token is not checked against the supported set here; only its length
/// is. Unknown two character tokens surface when the constraint is evaluated.
pub fn parse_operator(raw: &str) -> Result<&str, InvalidOperatorError> {
    let len = raw
        .bytes()
        .take_while(|b| matches!(b, b'=' | b'<' | b'>'))
        .count();
    let operator = &raw[..len];

    if len > MAX_OPERATOR_LEN {
        let err = InvalidOperatorError {
            operator: operator.to_string(),
            raw: raw.to_string(),
        };
        log::error!("{}", err);
        return Err(err);
    }

    if operator.is_empty() {
        log::debug!("No operator in constraint \"{}\"", raw);
    }

    Ok(operator)
}
