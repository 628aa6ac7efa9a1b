//! Projections: turning matched statements into result values.
//!
//! A select hands every matching statement to a [`Projection`] and
//! collects the outputs in scan order. Provided projections:
//! - [`Term`] yields a [`Value`]
//! - [`Typed`] yields a concrete type such as `String` or `i64`
//! - [`WholeStatement`] yields a copy of the statement
//! - [`Convert`] wraps a caller-supplied conversion function

use std::marker::PhantomData;

use super::engine::evaluate_term;
use super::error::{QueryError, TermError};
use super::types::{Term, Value};
use crate::types::{ObjectKind, Statement};

/// Maps a matched statement to a result value.
pub trait Projection {
    /// The result type.
    type Output;

    /// Project one statement.
    ///
    /// # Errors
    ///
    /// Returns an error tied to the statement if the value cannot be
    /// produced. The select is aborted in that case.
    fn project(&self, statement: &Statement) -> Result<Self::Output, QueryError>;
}

impl Projection for Term {
    type Output = Value;

    fn project(&self, statement: &Statement) -> Result<Value, QueryError> {
        evaluate_term(self, statement).map_err(|e| e.at(statement.id()))
    }
}

/// Types a [`Value`] can be converted into.
pub trait FromValue: Sized {
    /// Name of the type, used in error messages.
    const TYPE_NAME: &'static str;

    /// Convert, handing the value back on a type mismatch.
    fn from_value(value: Value) -> Result<Self, Value>;
}

impl FromValue for Value {
    const TYPE_NAME: &'static str = "any";

    fn from_value(value: Value) -> Result<Self, Value> {
        Ok(value)
    }
}

impl FromValue for String {
    const TYPE_NAME: &'static str = "text";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Text(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl FromValue for i64 {
    const TYPE_NAME: &'static str = "integer";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Integer(n) => Ok(n),
            other => Err(other),
        }
    }
}

impl FromValue for ObjectKind {
    const TYPE_NAME: &'static str = "kind";

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Kind(kind) => Ok(kind),
            other => Err(other),
        }
    }
}

/// A term projected into a concrete type.
#[derive(Debug)]
pub struct Typed<T> {
    term: Term,
    output: PhantomData<fn() -> T>,
}

impl<T: FromValue> Typed<T> {
    /// Wrap a term.
    #[must_use]
    pub const fn new(term: Term) -> Self {
        Self {
            term,
            output: PhantomData,
        }
    }

    /// The wrapped term.
    #[must_use]
    pub const fn term(&self) -> &Term {
        &self.term
    }
}

impl<T: FromValue> Projection for Typed<T> {
    type Output = T;

    fn project(&self, statement: &Statement) -> Result<T, QueryError> {
        let value = self.term.project(statement)?;
        T::from_value(value).map_err(|value| {
            TermError::TypeMismatch {
                expected: T::TYPE_NAME,
                found: value.type_name(),
            }
            .at(statement.id())
        })
    }
}

/// Projects the whole statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct WholeStatement;

impl Projection for WholeStatement {
    type Output = Statement;

    fn project(&self, statement: &Statement) -> Result<Statement, QueryError> {
        Ok(statement.clone_value())
    }
}

/// A caller-supplied conversion.
///
/// ```
/// use resdb::query::QueryError;
/// use resdb::query::projection::{Convert, Projection};
/// use resdb::types::Statement;
///
/// let shout = Convert::new(|s: &Statement| Ok::<_, QueryError>(s.object_text().to_uppercase()));
/// let statement = Statement::literal("Topi", "my:title", "cto");
/// assert_eq!(shout.project(&statement), Ok("CTO".to_owned()));
/// ```
pub struct Convert<F> {
    convert: F,
}

impl<F> Convert<F> {
    /// Wrap a conversion function.
    pub const fn new(convert: F) -> Self {
        Self { convert }
    }
}

impl<F, T> Projection for Convert<F>
where
    F: Fn(&Statement) -> Result<T, QueryError>,
{
    type Output = T;

    fn project(&self, statement: &Statement) -> Result<T, QueryError> {
        (self.convert)(statement)
    }
}
