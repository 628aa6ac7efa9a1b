//! Per-select evaluation context.
//!
//! Before a select scans the store, every membership set in its expression
//! is materialized once: literal value lists are hashed, subqueries are run
//! against the same statements. The resulting `ResolvedExpr` mirrors the
//! expression tree and lives only for the duration of that select, so
//! nothing is shared across calls or threads.

use std::collections::HashSet;

use super::engine::{QueryEngine, evaluate_term};
use super::error::QueryError;
use super::types::{CompareOp, Expr, Scalar, Term, Value, ValueSet};
use crate::types::Statement;

/// An expression with its membership sets materialized.
#[derive(Debug)]
pub enum ResolvedExpr<'e> {
    Everything,
    Compare {
        term: &'e Term,
        op: CompareOp,
        rhs: &'e Scalar,
    },
    MemberOf {
        term: &'e Term,
        set: HashSet<Value>,
    },
    And(Box<Self>, Box<Self>),
    Or(Box<Self>, Box<Self>),
    Not(Box<Self>),
}

impl<'e> ResolvedExpr<'e> {
    /// Resolve all membership sets in `expr`.
    ///
    /// Subqueries run through `engine`, which resolves their own nested
    /// subqueries the same way.
    pub fn resolve(expr: &'e Expr, engine: &QueryEngine<'_>) -> Result<Self, QueryError> {
        Ok(match expr {
            Expr::Everything => Self::Everything,
            Expr::Compare { term, op, rhs } => Self::Compare { term, op: *op, rhs },
            Expr::MemberOf { term, set } => Self::MemberOf {
                term,
                set: materialize(set, engine)?,
            },
            Expr::And(left, right) => Self::And(
                Box::new(Self::resolve(left, engine)?),
                Box::new(Self::resolve(right, engine)?),
            ),
            Expr::Or(left, right) => Self::Or(
                Box::new(Self::resolve(left, engine)?),
                Box::new(Self::resolve(right, engine)?),
            ),
            Expr::Not(inner) => Self::Not(Box::new(Self::resolve(inner, engine)?)),
        })
    }

    /// Check whether a statement satisfies the expression.
    ///
    /// A term without a value for the statement makes its comparison
    /// false. Evaluation has no side effects, so short-circuiting is not
    /// observable.
    #[must_use]
    pub fn matches(&self, statement: &Statement) -> bool {
        match self {
            Self::Everything => true,
            Self::Compare { term, op, rhs } => {
                let Ok(left) = evaluate_term(term, statement) else {
                    return false;
                };
                match rhs {
                    Scalar::Value(right) => left.compare(*op, right),
                    Scalar::Term(right) => evaluate_term(right, statement)
                        .is_ok_and(|right| left.compare(*op, &right)),
                }
            }
            Self::MemberOf { term, set } => {
                evaluate_term(term, statement).is_ok_and(|value| set.contains(&value))
            }
            Self::And(left, right) => left.matches(statement) && right.matches(statement),
            Self::Or(left, right) => left.matches(statement) || right.matches(statement),
            Self::Not(inner) => !inner.matches(statement),
        }
    }
}

fn materialize(set: &ValueSet, engine: &QueryEngine<'_>) -> Result<HashSet<Value>, QueryError> {
    match set {
        ValueSet::Values(values) => Ok(values.iter().map(Value::clone_value).collect()),
        ValueSet::Query(query) => {
            let values = engine.execute(&query.projection, &query.filter)?;
            tracing::trace!(
                "resolved subquery select({}, {}) to {} values",
                query.projection,
                query.filter,
                values.len()
            );
            Ok(values.into_iter().collect())
        }
    }
}
