//! Query types for the resource statement query algebra.
//!
//! This module defines the expression tree evaluated by the query engine:
//! - `Value` - what a term yields for a statement
//! - `Term` - a selector (subject, predicate, ...) or a conversion of one
//! - `Expr` - comparisons, set membership and logical combinations
//! - `Subquery` - a nested select whose results feed a membership test
//!
//! Expressions are pure descriptions. They never reference a database;
//! the engine binds them to one when a select runs.

use std::cmp::Ordering;
use std::fmt;

use crate::types::ObjectKind;

/// A value produced by a term or a projection.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Raw text.
    Text(String),
    /// An integer (statement ids, parsed literals).
    Integer(i64),
    /// An object kind tag.
    Kind(ObjectKind),
}

impl Value {
    /// Name of the value's type, used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Kind(_) => "kind",
        }
    }

    /// Get the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Get the integer if this is an integer value.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Compare two values.
    ///
    /// Values of different types never compare equal and have no order.
    /// Texts order lexicographically, integers numerically, kinds only
    /// support equality.
    #[must_use]
    pub fn compare(&self, op: CompareOp, other: &Self) -> bool {
        match op {
            CompareOp::Eq => self == other,
            CompareOp::Ne => self != other,
            _ => self.order(other).is_some_and(|ordering| op.accepts(ordering)),
        }
    }

    fn order(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Create a copy of this value.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Text(text) => Self::Text(text.as_str().to_owned()),
            Self::Integer(n) => Self::Integer(*n),
            Self::Kind(kind) => Self::Kind(*kind),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "\"{text}\""),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<ObjectKind> for Value {
    fn from(kind: ObjectKind) -> Self {
        Self::Kind(kind)
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl CompareOp {
    /// Check whether an ordering between left and right satisfies this operator.
    #[must_use]
    pub const fn accepts(self, ordering: Ordering) -> bool {
        match self {
            Self::Eq => matches!(ordering, Ordering::Equal),
            Self::Ne => !matches!(ordering, Ordering::Equal),
            Self::Lt => matches!(ordering, Ordering::Less),
            Self::Le => !matches!(ordering, Ordering::Greater),
            Self::Gt => matches!(ordering, Ordering::Greater),
            Self::Ge => !matches!(ordering, Ordering::Less),
        }
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A term evaluated against one statement.
#[derive(Debug, PartialEq, Eq)]
pub enum Term {
    /// Subject text (`"[n]"` for statement references).
    Subject,
    /// Predicate text.
    Predicate,
    /// Object text.
    Object,
    /// Id of the statement.
    StatementId,
    /// Kind of the object.
    ObjectKind,
    /// Object text, present only when the predicate equals the name.
    Attribute(String),
    /// The inner term's text parsed as an integer.
    ParseInt(Box<Self>),
    /// The statement id inside a `"[n]"` token, or -1 for anything else.
    ReifiedId(Box<Self>),
}

impl Term {
    /// Create a copy of this term.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Subject => Self::Subject,
            Self::Predicate => Self::Predicate,
            Self::Object => Self::Object,
            Self::StatementId => Self::StatementId,
            Self::ObjectKind => Self::ObjectKind,
            Self::Attribute(name) => Self::Attribute(name.as_str().to_owned()),
            Self::ParseInt(inner) => Self::ParseInt(Box::new(inner.clone_value())),
            Self::ReifiedId(inner) => Self::ReifiedId(Box::new(inner.clone_value())),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Subject => f.write_str("subject"),
            Self::Predicate => f.write_str("predicate"),
            Self::Object => f.write_str("object"),
            Self::StatementId => f.write_str("statement_id"),
            Self::ObjectKind => f.write_str("resource_type"),
            Self::Attribute(name) => write!(f, "attribute({name})"),
            Self::ParseInt(inner) => write!(f, "parse_int({inner})"),
            Self::ReifiedId(inner) => write!(f, "reified_id({inner})"),
        }
    }
}

/// Right-hand side of a scalar comparison.
#[derive(Debug, PartialEq, Eq)]
pub enum Scalar {
    /// A constant.
    Value(Value),
    /// Another term evaluated on the same statement.
    Term(Term),
}

impl Scalar {
    /// Create a copy of this operand.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Value(value) => Self::Value(value.clone_value()),
            Self::Term(term) => Self::Term(term.clone_value()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "{value}"),
            Self::Term(term) => write!(f, "{term}"),
        }
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Implement `From<$source>` for an operand type by going through `Value`.
macro_rules! from_value_types {
    ($target:ty; $($source:ty),+) => {
        $(
            impl From<$source> for $target {
                fn from(value: $source) -> Self {
                    Self::from(Value::from(value))
                }
            }
        )+
    };
}

from_value_types!(Scalar; &str, String, i64, i32, ObjectKind);

impl From<Term> for Scalar {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

/// A nested select whose projected values form a membership set.
#[derive(Debug, PartialEq, Eq)]
pub struct Subquery {
    /// What each matching statement contributes to the set.
    pub projection: Term,
    /// Which statements contribute.
    pub filter: Expr,
}

impl Subquery {
    /// Create a new subquery.
    #[must_use]
    pub const fn new(projection: Term, filter: Expr) -> Self {
        Self { projection, filter }
    }

    /// Create a copy of this subquery.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        Self {
            projection: self.projection.clone_value(),
            filter: self.filter.clone_value(),
        }
    }
}

/// A finite set of values a term is tested against.
#[derive(Debug, PartialEq, Eq)]
pub enum ValueSet {
    /// Values already materialized, e.g. the result of an earlier select.
    Values(Vec<Value>),
    /// A subquery resolved once when the outer select starts.
    Query(Box<Subquery>),
}

impl ValueSet {
    /// Create a copy of this set.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Values(values) => Self::Values(values.iter().map(Value::clone_value).collect()),
            Self::Query(query) => Self::Query(Box::new(query.clone_value())),
        }
    }
}

impl fmt::Display for ValueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Values(values) => write!(f, "{{{} values}}", values.len()),
            Self::Query(query) => write!(f, "select({}, {})", query.projection, query.filter),
        }
    }
}

impl From<Vec<Value>> for ValueSet {
    fn from(values: Vec<Value>) -> Self {
        Self::Values(values)
    }
}

impl From<Vec<String>> for ValueSet {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values.into_iter().map(Value::Text).collect())
    }
}

impl From<Vec<i64>> for ValueSet {
    fn from(values: Vec<i64>) -> Self {
        Self::Values(values.into_iter().map(Value::Integer).collect())
    }
}

impl From<Subquery> for ValueSet {
    fn from(query: Subquery) -> Self {
        Self::Query(Box::new(query))
    }
}

/// Right-hand side of `equals` / `not_equals`: a scalar or a set.
#[derive(Debug, PartialEq, Eq)]
pub enum Operand {
    Scalar(Scalar),
    Set(ValueSet),
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Scalar(Scalar::Value(value))
    }
}

from_value_types!(Operand; &str, String, i64, i32, ObjectKind);

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Self::Scalar(Scalar::Term(term))
    }
}

impl From<ValueSet> for Operand {
    fn from(set: ValueSet) -> Self {
        Self::Set(set)
    }
}

impl From<Vec<Value>> for Operand {
    fn from(values: Vec<Value>) -> Self {
        Self::Set(values.into())
    }
}

impl From<Vec<String>> for Operand {
    fn from(values: Vec<String>) -> Self {
        Self::Set(values.into())
    }
}

impl From<Vec<i64>> for Operand {
    fn from(values: Vec<i64>) -> Self {
        Self::Set(values.into())
    }
}

impl From<Subquery> for Operand {
    fn from(query: Subquery) -> Self {
        Self::Set(query.into())
    }
}

/// A query expression.
#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
    /// Matches every statement.
    Everything,
    /// `term <op> rhs`.
    Compare { term: Term, op: CompareOp, rhs: Scalar },
    /// `term` is one of the values in `set`.
    MemberOf { term: Term, set: ValueSet },
    And(Box<Self>, Box<Self>),
    Or(Box<Self>, Box<Self>),
    Not(Box<Self>),
}

impl Expr {
    /// Create a copy of this expression.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Everything => Self::Everything,
            Self::Compare { term, op, rhs } => Self::Compare {
                term: term.clone_value(),
                op: *op,
                rhs: rhs.clone_value(),
            },
            Self::MemberOf { term, set } => Self::MemberOf {
                term: term.clone_value(),
                set: set.clone_value(),
            },
            Self::And(left, right) => {
                Self::And(Box::new(left.clone_value()), Box::new(right.clone_value()))
            }
            Self::Or(left, right) => {
                Self::Or(Box::new(left.clone_value()), Box::new(right.clone_value()))
            }
            Self::Not(inner) => Self::Not(Box::new(inner.clone_value())),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Everything => f.write_str("*"),
            Self::Compare { term, op, rhs } => write!(f, "{term} {op} {rhs}"),
            Self::MemberOf { term, set } => write!(f, "{term} in {set}"),
            Self::And(left, right) => write!(f, "({left} && {right})"),
            Self::Or(left, right) => write!(f, "({left} || {right})"),
            Self::Not(inner) => write!(f, "!{inner}"),
        }
    }
}
