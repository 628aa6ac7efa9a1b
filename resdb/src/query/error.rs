//! Errors raised while running a select.

use crate::types::StatementId;

/// Why a term has no value for a statement.
#[derive(Debug, PartialEq, Eq)]
pub enum TermError {
    /// An attribute term met a statement with a different predicate.
    MissingAttribute { attribute: String },
    /// Text that a conversion could not parse.
    Conversion {
        input: String,
        target: &'static str,
    },
    /// A conversion was applied to a value of the wrong type.
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl TermError {
    /// Attach the statement the failure happened on.
    #[must_use]
    pub fn at(self, statement_id: StatementId) -> QueryError {
        match self {
            Self::MissingAttribute { attribute } => QueryError::MissingAttribute {
                statement_id,
                attribute,
            },
            Self::Conversion { input, target } => QueryError::Conversion {
                statement_id,
                input,
                target,
            },
            Self::TypeMismatch { expected, found } => QueryError::TypeMismatch {
                statement_id,
                expected,
                found,
            },
        }
    }
}

/// Errors that can occur during query execution.
///
/// A projection never substitutes a default for a value it cannot
/// produce; the whole select fails with one of these instead.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryError {
    /// A conversion could not parse the text of a matched statement.
    Conversion {
        statement_id: StatementId,
        input: String,
        target: &'static str,
    },
    /// The projected attribute is not the predicate of a matched statement.
    MissingAttribute {
        statement_id: StatementId,
        attribute: String,
    },
    /// The projected value does not have the requested type.
    TypeMismatch {
        statement_id: StatementId,
        expected: &'static str,
        found: &'static str,
    },
}

impl QueryError {
    /// The statement the failure is tied to.
    #[must_use]
    pub const fn statement_id(&self) -> StatementId {
        match self {
            Self::Conversion { statement_id, .. }
            | Self::MissingAttribute { statement_id, .. }
            | Self::TypeMismatch { statement_id, .. } => *statement_id,
        }
    }
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conversion {
                statement_id,
                input,
                target,
            } => write!(
                f,
                "statement {statement_id}: cannot convert '{input}' to {target}"
            ),
            Self::MissingAttribute {
                statement_id,
                attribute,
            } => write!(
                f,
                "statement {statement_id}: predicate is not attribute '{attribute}'"
            ),
            Self::TypeMismatch {
                statement_id,
                expected,
                found,
            } => write!(
                f,
                "statement {statement_id}: expected {expected} value, found {found}"
            ),
        }
    }
}

impl std::error::Error for QueryError {}
