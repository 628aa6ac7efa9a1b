//! Statement import from text.
//!
//! One statement per line, four tab-separated fields:
//!
//! ```text
//! # kind     subject               predicate       object
//! resource   PiiResourceDatabase   my:designer     Topi
//! literal    [0]                   my:evaluation   true
//! ```
//!
//! `kind` is `literal` or `resource`. Blank lines and lines starting with
//! `#` are skipped. A subject or object written `[n]` refers to the
//! statement with id `n`.

use std::path::Path;

use crate::store::ResourceDatabase;
use crate::types::{ObjectKind, Statement, UNASSIGNED_ID};

/// Parse one line into a statement.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str) -> Result<Option<Statement>, String> {
    let trimmed = line.trim_end_matches(['\r', '\n']);
    if trimmed.trim().is_empty() || trimmed.trim_start().starts_with('#') {
        return Ok(None);
    }

    let fields: Vec<&str> = trimmed.split('\t').collect();
    let [kind, subject, predicate, object] = fields.as_slice() else {
        return Err(format!(
            "expected 4 tab-separated fields, got {}",
            fields.len()
        ));
    };

    let kind = match kind.trim() {
        "literal" => ObjectKind::Literal,
        "resource" => ObjectKind::Resource,
        other => return Err(format!("unknown statement kind '{other}'")),
    };

    Ok(Some(Statement::new(*subject, *predicate, *object, kind)))
}

/// Add every statement in `text` to `database`.
///
/// Statements before a failing line stay in the database.
///
/// # Errors
///
/// Returns an error naming the 1-based line of the first malformed or
/// invalid statement.
pub fn import_str(database: &mut ResourceDatabase, text: &str) -> Result<usize, ImportError> {
    let mut imported = 0;
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let statement = parse_line(line).map_err(|message| ImportError::Parse {
            line: line_number,
            message,
        })?;
        let Some(statement) = statement else {
            continue;
        };
        if database.add_statement(statement) == UNASSIGNED_ID {
            return Err(ImportError::InvalidStatement { line: line_number });
        }
        imported += 1;
    }
    tracing::debug!("imported {imported} statements");
    Ok(imported)
}

/// Add every statement in the file at `path` to `database`.
pub fn import_file(database: &mut ResourceDatabase, path: &Path) -> Result<usize, ImportError> {
    let text = std::fs::read_to_string(path)?;
    import_str(database, &text)
}

/// Errors that can occur while importing statements.
#[derive(Debug)]
pub enum ImportError {
    /// Reading the input failed.
    Io(std::io::Error),
    /// A line is not in the expected format.
    Parse { line: usize, message: String },
    /// A line parsed but describes an invalid statement.
    InvalidStatement { line: usize },
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { line, message } => write!(f, "line {line}: {message}"),
            Self::InvalidStatement { line } => write!(
                f,
                "line {line}: invalid statement (empty subject or object)"
            ),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } | Self::InvalidStatement { .. } => None,
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
