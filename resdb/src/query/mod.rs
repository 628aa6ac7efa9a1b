//! Query engine for the resource database.
//!
//! This module provides a small declarative query algebra over stored
//! statements. It supports:
//! - Term comparisons (subject, predicate, object, id, object kind)
//! - Attribute shortcuts (`attribute(name).equals(value)`)
//! - AND / OR / NOT
//! - Set membership against earlier results or nested subqueries
//! - Typed projections of the matching statements
//!
//! # Example
//!
//! ```
//! use resdb::ResourceDatabase;
//! use resdb::query::dsl::*;
//!
//! let mut db = ResourceDatabase::new();
//! db.add_statement(ResourceDatabase::literal("Topi", "my:kids", "6"));
//! db.add_statement(ResourceDatabase::resource("Topi", "my:wife", "Anna"));
//!
//! let wives = db
//!     .select(
//!         &object().as_text(),
//!         &predicate().equals("my:wife").and(subject().equals(subquery(
//!             subject(),
//!             predicate().equals("my:kids").and(parse_int(object()).greater_than(5)),
//!         ))),
//!     )
//!     .unwrap();
//! assert_eq!(wives, vec!["Anna".to_owned()]);
//! ```

pub mod context;
pub mod dsl;
pub mod engine;
pub mod error;
pub mod projection;
pub mod types;

pub use context::ResolvedExpr;
pub use engine::{NOT_REIFIED, QueryEngine};
pub use error::{QueryError, TermError};
pub use projection::{Convert, FromValue, Projection, Typed, WholeStatement};
pub use types::{CompareOp, Expr, Operand, Scalar, Subquery, Term, Value, ValueSet};
