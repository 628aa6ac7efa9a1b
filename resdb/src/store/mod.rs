//! In-memory statement storage.
//!
//! # Usage
//!
//! ```
//! use resdb::store::ResourceDatabase;
//!
//! let mut db = ResourceDatabase::new();
//!
//! // Claim: Topi is the designer.
//! let claim = db.add_statement(ResourceDatabase::resource("PiiResourceDatabase", "my:designer", "Topi"));
//!
//! // Reification: a statement about the claim.
//! db.add_statement(ResourceDatabase::literal(claim, "my:evaluation", "true"));
//!
//! assert_eq!(db.statement_count(), 2);
//! assert_eq!(db.statement(1).map(|s| s.subject_text()), Some("[0]".to_owned()));
//! ```

mod database;
mod shared;

pub use database::ResourceDatabase;
pub use shared::{SharedDatabaseError, SharedResourceDatabase};
