//! Main simulator harness for deterministic simulation testing.
//!
//! The simulator inserts generated statements into a fresh database and
//! runs the invariant checks after every operation.

// Simulation code legitimately needs cloning for test data
#![allow(clippy::disallowed_methods)]

use super::invariants::{InvariantChecker, InvariantViolation};
use super::statement_gen::{StatementGenConfig, StatementGenerator};
use crate::store::ResourceDatabase;

/// Configuration for the simulator.
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    /// Random seed for reproducibility.
    pub seed: u64,
    /// Statement and expression generation configuration.
    pub statement_config: StatementGenConfig,
    /// Run the query checks every this many inserts.
    pub query_interval: usize,
}

impl SimulatorConfig {
    /// Create a new simulator config with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            statement_config: StatementGenConfig::default(),
            query_interval: 1,
        }
    }

    /// Set the statement configuration.
    #[must_use]
    pub const fn with_statement_config(mut self, config: StatementGenConfig) -> Self {
        self.statement_config = config;
        self
    }

    /// Set the invalid statement rate.
    #[must_use]
    pub const fn with_invalid_rate(mut self, rate: f64) -> Self {
        self.statement_config.invalid_rate = rate;
        self
    }

    /// Run the query checks less often (for faster testing).
    #[must_use]
    pub const fn with_query_interval(mut self, interval: usize) -> Self {
        self.query_interval = interval;
        self
    }
}

/// Results from a simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The seed used for this simulation.
    pub seed: u64,
    /// Number of insert operations performed.
    pub operations: u64,
    /// Number of statements stored.
    pub stored: u64,
    /// Number of invalid statements rejected.
    pub rejected: u64,
    /// Number of query checks run.
    pub query_checks: u64,
    /// Invariant violations detected.
    pub invariant_violations: Vec<InvariantViolation>,
}

impl SimulationResult {
    /// Check if the simulation passed (no invariant violations).
    #[must_use]
    pub const fn passed(&self) -> bool {
        self.invariant_violations.is_empty()
    }
}

/// The main simulator harness.
pub struct Simulator {
    config: SimulatorConfig,
    generator: StatementGenerator,
    checker: InvariantChecker,
}

impl Simulator {
    /// Create a new simulator with the given configuration.
    #[must_use]
    pub fn new(config: SimulatorConfig) -> Self {
        let generator = StatementGenerator::new(config.seed, config.statement_config.clone());
        Self {
            config,
            generator,
            checker: InvariantChecker::new(),
        }
    }

    /// Run the simulation for a given number of inserts.
    pub fn run(&mut self, operation_count: usize) -> SimulationResult {
        let mut database = ResourceDatabase::new();
        let mut stored = 0;
        let mut rejected = 0;
        let mut query_checks = 0;
        let interval = self.config.query_interval.max(1);

        for index in 0..operation_count {
            let statement = self.generator.statement(database.next_id());
            let valid = statement.is_valid();
            let count_before = database.statement_count();
            let id = database.add_statement(statement);
            self.checker
                .check_insert(&database, valid, count_before, id, index);
            if valid {
                stored += 1;
            } else {
                rejected += 1;
            }

            if (index + 1) % interval == 0 {
                self.checker.check_dense_ids(&database, index);
                let name = self.generator.predicate_name();
                self.checker.check_predicate_scan(&database, &name, index);
                let a = self.generator.expr();
                let b = self.generator.expr();
                self.checker.check_algebra(&database, &a, &b, index);
                query_checks += 1;
            }
        }

        tracing::debug!(
            "simulation seed={} stored={stored} rejected={rejected} violations={}",
            self.config.seed,
            self.checker.violations().len()
        );

        SimulationResult {
            seed: self.config.seed,
            operations: stored + rejected,
            stored,
            rejected,
            query_checks,
            invariant_violations: self.checker.violations().to_vec(),
        }
    }

    /// Get the invariant checker.
    #[must_use]
    pub const fn checker(&self) -> &InvariantChecker {
        &self.checker
    }
}
