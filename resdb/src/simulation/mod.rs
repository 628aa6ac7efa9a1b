//! Deterministic Simulation Testing (DST) infrastructure.
//!
//! This module provides tools for testing the database with:
//! - Reproducible random statement and expression generation
//! - Invariant checking after each operation
//!
//! # Design Principles
//!
//! 1. All randomness is seeded for reproducibility
//! 2. Given the same seed, execution is identical
//! 3. Checks go through the public select API, never through internals
//!
//! # Usage
//!
//! ```
//! use resdb::simulation::{Simulator, SimulatorConfig};
//!
//! let config = SimulatorConfig::new(12345).with_invalid_rate(0.2);
//! let mut sim = Simulator::new(config);
//! let result = sim.run(100);
//!
//! assert!(result.invariant_violations.is_empty());
//! ```

mod invariants;
mod simulator;
mod statement_gen;

pub use invariants::{InvariantChecker, InvariantViolation};
pub use simulator::{SimulationResult, Simulator, SimulatorConfig};
pub use statement_gen::{StatementGenConfig, StatementGenerator};
