//! Invariant checking for deterministic simulation testing.
//!
//! Every check runs real selects against the database and compares the
//! result ids with what the store contents or the boolean algebra demand.

use std::collections::BTreeSet;

use crate::query::Expr;
use crate::query::dsl::{everything, not, predicate, statement_id};
use crate::store::ResourceDatabase;
use crate::types::{Statement, StatementId, UNASSIGNED_ID};

/// An invariant violation detected during simulation.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violation.
    pub description: String,
    /// Operation index where it was detected.
    pub operation_index: usize,
    /// Additional context.
    pub context: String,
}

/// Checker for database invariants.
pub struct InvariantChecker {
    /// Detected violations.
    violations: Vec<InvariantViolation>,
}

impl Default for InvariantChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantChecker {
    /// Create a new invariant checker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Get all violations.
    #[must_use]
    pub fn violations(&self) -> &[InvariantViolation] {
        &self.violations
    }

    /// Check if any violations were detected.
    #[must_use]
    pub const fn has_violations(&self) -> bool {
        !self.violations.is_empty()
    }

    /// Clear all recorded violations.
    pub fn clear(&mut self) {
        self.violations.clear();
    }

    /// Add a violation.
    pub fn add_violation(&mut self, violation: InvariantViolation) {
        self.violations.push(violation);
    }

    fn violation(&mut self, description: &str, operation_index: usize, context: String) {
        self.violations.push(InvariantViolation {
            description: description.to_string(),
            operation_index,
            context,
        });
    }

    /// Check the result of one `add_statement` call.
    ///
    /// `valid` is whether the inserted statement was valid, `count_before`
    /// the statement count before the call.
    pub fn check_insert(
        &mut self,
        database: &ResourceDatabase,
        valid: bool,
        count_before: usize,
        returned: StatementId,
        operation_index: usize,
    ) {
        let expected_count = if valid { count_before + 1 } else { count_before };
        if database.statement_count() != expected_count {
            self.violation(
                "Statement count changed unexpectedly",
                operation_index,
                format!(
                    "expected {expected_count}, found {}",
                    database.statement_count()
                ),
            );
        }

        let expected_id = if valid {
            StatementId::try_from(count_before).unwrap_or(StatementId::MAX)
        } else {
            UNASSIGNED_ID
        };
        if returned != expected_id {
            self.violation(
                "add_statement returned the wrong id",
                operation_index,
                format!("expected {expected_id}, got {returned}"),
            );
        }
    }

    /// Check that the statement at position `n` has id `n`.
    pub fn check_dense_ids(&mut self, database: &ResourceDatabase, operation_index: usize) {
        for (position, statement) in database.statements().enumerate() {
            if usize::try_from(statement.id()).ok() != Some(position) {
                self.violation(
                    "Statement id does not match its position",
                    operation_index,
                    format!("position {position} holds {statement}"),
                );
            }
            if !statement.is_valid() {
                self.violation(
                    "Invalid statement stored",
                    operation_index,
                    statement.to_string(),
                );
            }
        }
    }

    /// Check that `predicate == name` selects exactly what a plain scan finds.
    pub fn check_predicate_scan(
        &mut self,
        database: &ResourceDatabase,
        name: &str,
        operation_index: usize,
    ) {
        let expected: Vec<StatementId> = database
            .statements()
            .filter(|statement| statement.predicate() == name)
            .map(Statement::id)
            .collect();
        let Some(found) = self.ids(database, &predicate().equals(name), operation_index) else {
            return;
        };
        if found != expected {
            self.violation(
                "Predicate select disagrees with scan",
                operation_index,
                format!("predicate {name}: expected {expected:?}, found {found:?}"),
            );
        }
    }

    /// Check the boolean algebra on two expressions.
    ///
    /// - results come back in ascending id order
    /// - `!a` selects the complement of `a`
    /// - `a && b` selects the intersection, `a || b` the union
    pub fn check_algebra(
        &mut self,
        database: &ResourceDatabase,
        a: &Expr,
        b: &Expr,
        operation_index: usize,
    ) {
        let Some(all) = self.ids(database, &everything(), operation_index) else {
            return;
        };
        let Some(left) = self.ids(database, a, operation_index) else {
            return;
        };
        let Some(right) = self.ids(database, b, operation_index) else {
            return;
        };

        if !left.windows(2).all(|pair| pair[0] < pair[1]) {
            self.violation(
                "Results not in ascending id order",
                operation_index,
                format!("{a}: {left:?}"),
            );
        }

        let left_set: BTreeSet<StatementId> = left.iter().copied().collect();
        let right_set: BTreeSet<StatementId> = right.iter().copied().collect();

        let complement: Vec<StatementId> = all
            .iter()
            .copied()
            .filter(|id| !left_set.contains(id))
            .collect();
        self.expect_ids(database, &not(a.clone_value()), &complement, operation_index);

        let intersection: Vec<StatementId> =
            left_set.intersection(&right_set).copied().collect();
        self.expect_ids(
            database,
            &a.clone_value().and(b.clone_value()),
            &intersection,
            operation_index,
        );

        let union: Vec<StatementId> = left_set.union(&right_set).copied().collect();
        self.expect_ids(
            database,
            &a.clone_value().or(b.clone_value()),
            &union,
            operation_index,
        );
    }

    fn expect_ids(
        &mut self,
        database: &ResourceDatabase,
        expr: &Expr,
        expected: &[StatementId],
        operation_index: usize,
    ) {
        let Some(found) = self.ids(database, expr, operation_index) else {
            return;
        };
        if found != expected {
            self.violation(
                "Boolean combination selected the wrong statements",
                operation_index,
                format!("{expr}: expected {expected:?}, found {found:?}"),
            );
        }
    }

    fn ids(
        &mut self,
        database: &ResourceDatabase,
        expr: &Expr,
        operation_index: usize,
    ) -> Option<Vec<StatementId>> {
        match database.select(&statement_id().as_int(), expr) {
            Ok(ids) => Some(ids),
            Err(e) => {
                self.violation(
                    "Select failed",
                    operation_index,
                    format!("{expr}: {e}"),
                );
                None
            }
        }
    }
}
