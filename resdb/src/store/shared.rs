//! Thread-safe handle to a resource database.
//!
//! # Thread Safety
//!
//! The handle uses `RwLock` for single-writer/many-reader access:
//! - Any number of selects can run at the same time
//! - Inserts acquire exclusive access, so a select never observes a
//!   half-finished insert and always sees a consistent snapshot
//!
//! Nothing is cancellable; callers needing bounded latency have to bound
//! the database size themselves.

use std::sync::{Arc, RwLock};

use super::ResourceDatabase;
use crate::query::{Expr, Projection, QueryError};
use crate::types::{Statement, StatementId};

/// A cloneable, shareable resource database.
#[derive(Debug, Default)]
pub struct SharedResourceDatabase {
    database: Arc<RwLock<ResourceDatabase>>,
}

impl SharedResourceDatabase {
    /// Wrap a database for sharing.
    #[must_use]
    pub fn new(database: ResourceDatabase) -> Self {
        Self {
            database: Arc::new(RwLock::new(database)),
        }
    }

    /// Create another handle to the same database.
    #[must_use]
    #[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected
    pub fn share(&self) -> Self {
        Self {
            database: Arc::clone(&self.database),
        }
    }

    /// Add a statement under the write lock. See [`ResourceDatabase::add_statement`].
    pub fn add_statement(&self, statement: Statement) -> Result<StatementId, SharedDatabaseError> {
        let mut database = self
            .database
            .write()
            .map_err(|_| SharedDatabaseError::LockPoisoned)?;
        Ok(database.add_statement(statement))
    }

    /// Number of stored statements.
    pub fn statement_count(&self) -> Result<usize, SharedDatabaseError> {
        self.read(ResourceDatabase::statement_count)
    }

    /// Run a select under the read lock. See [`ResourceDatabase::select`].
    pub fn select<P: Projection + ?Sized>(
        &self,
        projection: &P,
        expr: &Expr,
    ) -> Result<Vec<P::Output>, SharedDatabaseError> {
        Ok(self.read(|database| database.select(projection, expr))??)
    }

    /// Run `f` with shared access to the database.
    pub fn read<T>(&self, f: impl FnOnce(&ResourceDatabase) -> T) -> Result<T, SharedDatabaseError> {
        let database = self
            .database
            .read()
            .map_err(|_| SharedDatabaseError::LockPoisoned)?;
        Ok(f(&database))
    }

    /// Remove every statement under the write lock.
    pub fn clear(&self) -> Result<(), SharedDatabaseError> {
        self.database
            .write()
            .map_err(|_| SharedDatabaseError::LockPoisoned)?
            .clear();
        Ok(())
    }
}

/// Errors from a shared database handle.
#[derive(Debug, PartialEq, Eq)]
pub enum SharedDatabaseError {
    /// A thread panicked while holding the lock.
    LockPoisoned,
    /// The select itself failed.
    Query(QueryError),
}

impl std::fmt::Display for SharedDatabaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LockPoisoned => write!(f, "database lock poisoned"),
            Self::Query(e) => write!(f, "query error: {e}"),
        }
    }
}

impl std::error::Error for SharedDatabaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LockPoisoned => None,
            Self::Query(e) => Some(e),
        }
    }
}

impl From<QueryError> for SharedDatabaseError {
    fn from(e: QueryError) -> Self {
        Self::Query(e)
    }
}
