//! The resource database.
//!
//! An append-only, insertion-ordered collection of statements. Ids are
//! dense: the statement at position `n` has id `n`.

use std::io;

use crate::query::{Expr, Projection, QueryEngine, QueryError, WholeStatement};
use crate::types::{ResourceId, Statement, StatementId, UNASSIGNED_ID};

/// A database of statements about resources.
///
/// This is the main entry point of the crate. It owns every stored
/// statement; queries borrow it.
///
/// # Invariants
///
/// - `statements[n].id() == n` for every stored statement.
/// - Only valid statements are stored.
#[derive(Debug, Default)]
pub struct ResourceDatabase {
    statements: Vec<Statement>,
}

impl ResourceDatabase {
    /// Create an empty database.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Create a statement whose object references another resource.
    ///
    /// The statement is not inserted.
    #[must_use]
    pub fn resource(
        subject: impl Into<ResourceId>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Statement {
        Statement::resource(subject, predicate, object)
    }

    /// Create a statement whose object is a string literal.
    ///
    /// The statement is not inserted.
    #[must_use]
    pub fn literal(
        subject: impl Into<ResourceId>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Statement {
        Statement::literal(subject, predicate, object)
    }

    /// Add a statement and return its id.
    ///
    /// Any id set by the caller is overwritten. Invalid statements are not
    /// stored and yield [`UNASSIGNED_ID`] (-1) without consuming an id.
    /// Identical triples are stored again under a new id.
    pub fn add_statement(&mut self, mut statement: Statement) -> StatementId {
        if !statement.is_valid() {
            tracing::debug!("rejected invalid statement: {statement}");
            return UNASSIGNED_ID;
        }
        let id = self.next_id();
        statement.set_id(id);
        self.statements.push(statement);
        id
    }

    /// Id the next valid statement will get.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)] // Vec lengths never exceed i64::MAX
    pub const fn next_id(&self) -> StatementId {
        self.statements.len() as StatementId
    }

    /// Number of stored statements.
    #[must_use]
    pub const fn statement_count(&self) -> usize {
        self.statements.len()
    }

    /// Check if the database is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Look up a statement by id.
    #[must_use]
    pub fn statement(&self, id: StatementId) -> Option<&Statement> {
        usize::try_from(id).ok().and_then(|index| self.statements.get(index))
    }

    /// All statements in id order.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    pub(crate) fn as_slice(&self) -> &[Statement] {
        &self.statements
    }

    /// Remove every statement. All previously returned ids become invalid
    /// and numbering restarts at 0.
    pub fn clear(&mut self) {
        tracing::debug!("clearing {} statements", self.statements.len());
        self.statements.clear();
    }

    /// Run a query and project every matching statement, in id order.
    ///
    /// # Errors
    ///
    /// Fails if the projection (or a subquery's projection) cannot produce
    /// a value for some matching statement.
    pub fn select<P: Projection + ?Sized>(
        &self,
        projection: &P,
        expr: &Expr,
    ) -> Result<Vec<P::Output>, QueryError> {
        QueryEngine::new(self).execute(projection, expr)
    }

    /// Copies of all statements matching `expr`, in id order.
    pub fn select_statements(&self, expr: &Expr) -> Result<Vec<Statement>, QueryError> {
        self.select(&WholeStatement, expr)
    }

    /// Dump lines, one per statement, in id order.
    ///
    /// The format is that of [`Statement`]'s `Display`:
    /// `<id>: <subject> <predicate> "<literal>"` or `... <resource>`.
    pub fn dump_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.statements.iter().map(ToString::to_string)
    }

    /// Log every dump line at info level.
    pub fn dump(&self) {
        tracing::info!("resource database: {} statements", self.statements.len());
        for line in self.dump_lines() {
            tracing::info!("{line}");
        }
    }

    /// Write every dump line to `out`.
    pub fn write_dump<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.dump_lines() {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
