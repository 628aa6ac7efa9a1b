#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]
// Life of a query:
// 1. Caller builds statements with the factory helpers
// 2. `add_statement` validates, assigns the next id and appends
// 3. Caller builds an expression with the `query::dsl` combinators
// 4. `select`:
//     - Resolve membership sets and subqueries once
//     - Scan statements in id order
//     - Project each match
//
// System components:
//  - Statement types (`types`)
//  - Append-only store (`store`)
//  - Query algebra and engine (`query`)
//  - Text import and tool configuration (`import`, `config`)

pub mod config;
pub mod import;
pub mod query;
pub mod simulation;
pub mod store;
pub mod types;


pub use query::{Expr, QueryError, Term, Value};
pub use store::{ResourceDatabase, SharedDatabaseError, SharedResourceDatabase};
pub use types::{Object, ObjectKind, ResourceId, Statement, StatementId, UNASSIGNED_ID};
