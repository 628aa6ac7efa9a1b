//! Query engine implementation.
//!
//! The `QueryEngine` evaluates an expression against the statements of a
//! database:
//! 1. membership sets and subqueries are resolved once (`ResolvedExpr`)
//! 2. statements are scanned in ascending id order
//! 3. every match is handed to the projection
//!
//! Results therefore always come out in insertion order.

use super::context::ResolvedExpr;
use super::error::{QueryError, TermError};
use super::projection::Projection;
use super::types::{Expr, Term, Value};
use crate::store::ResourceDatabase;
use crate::types::Statement;
use crate::types::resource_id::parse_statement_ref;

/// Returned by `reified_id` for text that is not a statement reference.
pub const NOT_REIFIED: i64 = -1;

/// The query engine evaluates queries against a database.
pub struct QueryEngine<'a> {
    statements: &'a [Statement],
}

impl<'a> QueryEngine<'a> {
    /// Create a new query engine over a database.
    ///
    /// The engine borrows the database, so the set of statements it sees
    /// cannot change while it exists.
    #[must_use]
    pub fn new(database: &'a ResourceDatabase) -> Self {
        Self {
            statements: database.as_slice(),
        }
    }

    /// Run `expr` and project every match.
    pub fn execute<P: Projection + ?Sized>(
        &self,
        projection: &P,
        expr: &Expr,
    ) -> Result<Vec<P::Output>, QueryError> {
        let mut results = Vec::new();
        for statement in self.matching(expr)? {
            results.push(projection.project(statement)?);
        }
        tracing::debug!(
            "select {expr}: {} of {} statements matched",
            results.len(),
            self.statements.len()
        );
        Ok(results)
    }

    /// Statements matching `expr`, in id order.
    pub fn matching(&self, expr: &Expr) -> Result<Vec<&'a Statement>, QueryError> {
        let resolved = ResolvedExpr::resolve(expr, self)?;
        Ok(self
            .statements
            .iter()
            .filter(|statement| resolved.matches(statement))
            .collect())
    }

    /// Count the statements matching `expr`.
    pub fn count(&self, expr: &Expr) -> Result<usize, QueryError> {
        let resolved = ResolvedExpr::resolve(expr, self)?;
        Ok(self
            .statements
            .iter()
            .filter(|statement| resolved.matches(statement))
            .count())
    }
}

/// Evaluate a term against one statement.
pub(crate) fn evaluate_term(term: &Term, statement: &Statement) -> Result<Value, TermError> {
    match term {
        Term::Subject => Ok(Value::Text(statement.subject_text())),
        Term::Predicate => Ok(Value::Text(statement.predicate().to_owned())),
        Term::Object => Ok(Value::Text(statement.object_text())),
        Term::StatementId => Ok(Value::Integer(statement.id())),
        Term::ObjectKind => Ok(Value::Kind(statement.kind())),
        Term::Attribute(name) => {
            if statement.predicate() == name {
                Ok(Value::Text(statement.object_text()))
            } else {
                Err(TermError::MissingAttribute {
                    attribute: name.as_str().to_owned(),
                })
            }
        }
        Term::ParseInt(inner) => match evaluate_term(inner, statement)? {
            Value::Text(text) => text.parse::<i64>().map(Value::Integer).map_err(|_| {
                TermError::Conversion {
                    input: text,
                    target: "integer",
                }
            }),
            Value::Integer(n) => Ok(Value::Integer(n)),
            other @ Value::Kind(_) => Err(TermError::TypeMismatch {
                expected: "text",
                found: other.type_name(),
            }),
        },
        Term::ReifiedId(inner) => match evaluate_term(inner, statement)? {
            Value::Text(text) => Ok(Value::Integer(
                parse_statement_ref(&text).unwrap_or(NOT_REIFIED),
            )),
            other => Err(TermError::TypeMismatch {
                expected: "text",
                found: other.type_name(),
            }),
        },
    }
}
