//! Reproducible random statements and expressions.
//!
//! Values are drawn from small pools so that generated expressions
//! actually hit stored statements.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::query::Expr;
use crate::query::dsl::{
    attribute, everything, not, object, parse_int, predicate, reified_id, resource_type,
    statement_id, subject, subquery,
};
use crate::types::{ObjectKind, Statement, StatementId};

/// Configuration for statement and expression generation.
#[derive(Debug, Clone)]
pub struct StatementGenConfig {
    /// Probability of generating an invalid statement (0.0 - 1.0).
    pub invalid_rate: f64,
    /// Probability of generating a reifying statement (0.0 - 1.0).
    pub reification_rate: f64,
    /// Maximum nesting depth of generated expressions.
    pub max_expr_depth: u32,
    /// Number of distinct subjects.
    pub subject_pool_size: usize,
    /// Number of distinct predicates.
    pub predicate_pool_size: usize,
}

impl Default for StatementGenConfig {
    fn default() -> Self {
        Self {
            invalid_rate: 0.1,
            reification_rate: 0.1,
            max_expr_depth: 3,
            subject_pool_size: 6,
            predicate_pool_size: 4,
        }
    }
}

/// Generator for random statements and expressions.
pub struct StatementGenerator {
    rng: StdRng,
    config: StatementGenConfig,
}

impl StatementGenerator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64, config: StatementGenConfig) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Generate a statement. `stored` is the number of statements already
    /// in the database, used to pick reification targets.
    pub fn statement(&mut self, stored: StatementId) -> Statement {
        if self.rng.random::<f64>() < self.config.invalid_rate {
            return self.invalid_statement();
        }

        let pred = self.predicate_name();
        if stored > 0 && self.rng.random::<f64>() < self.config.reification_rate {
            let target = self.rng.random_range(0..stored);
            let verdict = if self.rng.random_bool(0.5) { "true" } else { "false" };
            return Statement::literal(target, pred, verdict);
        }

        let subj = self.subject_name();
        if self.rng.random_bool(0.5) {
            Statement::literal(subj, pred, self.rng.random_range(0..10_i64).to_string())
        } else {
            Statement::resource(subj, pred, self.subject_name())
        }
    }

    fn invalid_statement(&mut self) -> Statement {
        match self.rng.random_range(0..3) {
            0 => Statement::literal("", self.predicate_name(), "x"),
            1 => Statement::literal(self.subject_name(), self.predicate_name(), ""),
            _ => Statement::new(self.subject_name(), self.predicate_name(), "x", ObjectKind::Invalid),
        }
    }

    /// Generate an expression.
    pub fn expr(&mut self) -> Expr {
        self.expr_at(self.config.max_expr_depth)
    }

    fn expr_at(&mut self, depth: u32) -> Expr {
        if depth == 0 || self.rng.random_bool(0.4) {
            return self.leaf();
        }
        match self.rng.random_range(0..4) {
            0 => self.expr_at(depth - 1).and(self.expr_at(depth - 1)),
            1 => self.expr_at(depth - 1).or(self.expr_at(depth - 1)),
            2 => not(self.expr_at(depth - 1)),
            _ => subject().equals(subquery(subject(), self.expr_at(depth - 1))),
        }
    }

    fn leaf(&mut self) -> Expr {
        match self.rng.random_range(0..9) {
            0 => everything(),
            1 => predicate().equals(self.predicate_name()),
            2 => subject().equals(self.subject_name()),
            3 => object().equals(self.subject_name()),
            4 => parse_int(object()).greater_than(self.rng.random_range(0..10_i64)),
            5 => attribute(self.predicate_name()).not_equals(self.rng.random_range(0..10_i64).to_string()),
            6 => resource_type().equals(ObjectKind::Resource),
            7 => statement_id().less_than(self.rng.random_range(0..50_i64)),
            _ => reified_id(subject()).greater_or_equal(0),
        }
    }

    /// Pick a predicate from the pool.
    pub fn predicate_name(&mut self) -> String {
        format!("p{}", self.rng.random_range(0..self.config.predicate_pool_size))
    }

    /// Pick a subject from the pool.
    pub fn subject_name(&mut self) -> String {
        format!("s{}", self.rng.random_range(0..self.config.subject_pool_size))
    }
}
