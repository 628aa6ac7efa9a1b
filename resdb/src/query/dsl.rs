//! Combinators for building query expressions.
//!
//! ```
//! use resdb::query::dsl::*;
//!
//! // Wives of everyone with more than five kids.
//! let expr = predicate().equals("my:wife").and(subject().equals(subquery(
//!     subject(),
//!     predicate().equals("my:kids").and(parse_int(object()).greater_than(5)),
//! )));
//! assert_eq!(
//!     expr.to_string(),
//!     "(predicate == \"my:wife\" && subject in select(subject, \
//!      (predicate == \"my:kids\" && parse_int(object) > 5)))"
//! );
//! ```

use super::projection::{FromValue, Typed};
use super::types::{CompareOp, Expr, Operand, Scalar, Subquery, Term, ValueSet};

/// Subject of the statement.
#[must_use]
pub const fn subject() -> Term {
    Term::Subject
}

/// Predicate of the statement.
#[must_use]
pub const fn predicate() -> Term {
    Term::Predicate
}

/// Object of the statement.
#[must_use]
pub const fn object() -> Term {
    Term::Object
}

/// Id of the statement.
#[must_use]
pub const fn statement_id() -> Term {
    Term::StatementId
}

/// Kind of the statement's object, compared against [`crate::types::ObjectKind`].
#[must_use]
pub const fn resource_type() -> Term {
    Term::ObjectKind
}

/// Object of a statement whose predicate is `name`.
///
/// `attribute(name).equals(v)` matches exactly the statements with
/// `predicate == name && object == v`.
#[must_use]
pub fn attribute(name: impl Into<String>) -> Term {
    Term::Attribute(name.into())
}

/// Parse the text of `term` as an integer.
#[must_use]
pub fn parse_int(term: Term) -> Term {
    Term::ParseInt(Box::new(term))
}

/// Interpret a `"[n]"` token as `n`; anything else becomes -1.
#[must_use]
pub fn reified_id(term: Term) -> Term {
    Term::ReifiedId(Box::new(term))
}

/// A nested select usable as a membership operand.
#[must_use]
pub const fn subquery(projection: Term, filter: Expr) -> Subquery {
    Subquery::new(projection, filter)
}

/// Matches every statement.
#[must_use]
pub const fn everything() -> Expr {
    Expr::Everything
}

/// Both expressions hold.
#[must_use]
pub fn and(left: Expr, right: Expr) -> Expr {
    Expr::And(Box::new(left), Box::new(right))
}

/// At least one expression holds.
#[must_use]
pub fn or(left: Expr, right: Expr) -> Expr {
    Expr::Or(Box::new(left), Box::new(right))
}

/// The expression does not hold.
#[must_use]
pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

impl Term {
    fn compare(self, op: CompareOp, rhs: impl Into<Scalar>) -> Expr {
        Expr::Compare {
            term: self,
            op,
            rhs: rhs.into(),
        }
    }

    /// `self == rhs`. A set operand turns this into a membership test.
    #[must_use]
    pub fn equals(self, rhs: impl Into<Operand>) -> Expr {
        match rhs.into() {
            Operand::Scalar(rhs) => self.compare(CompareOp::Eq, rhs),
            Operand::Set(set) => self.is_in(set),
        }
    }

    /// `self != rhs`. A set operand turns this into a negated membership test.
    #[must_use]
    pub fn not_equals(self, rhs: impl Into<Operand>) -> Expr {
        match rhs.into() {
            Operand::Scalar(rhs) => self.compare(CompareOp::Ne, rhs),
            Operand::Set(set) => self.not_in(set),
        }
    }

    #[must_use]
    pub fn less_than(self, rhs: impl Into<Scalar>) -> Expr {
        self.compare(CompareOp::Lt, rhs)
    }

    #[must_use]
    pub fn less_or_equal(self, rhs: impl Into<Scalar>) -> Expr {
        self.compare(CompareOp::Le, rhs)
    }

    #[must_use]
    pub fn greater_than(self, rhs: impl Into<Scalar>) -> Expr {
        self.compare(CompareOp::Gt, rhs)
    }

    #[must_use]
    pub fn greater_or_equal(self, rhs: impl Into<Scalar>) -> Expr {
        self.compare(CompareOp::Ge, rhs)
    }

    /// The term's value is one of `set`.
    #[must_use]
    pub fn is_in(self, set: impl Into<ValueSet>) -> Expr {
        Expr::MemberOf {
            term: self,
            set: set.into(),
        }
    }

    /// The term's value is none of `set`.
    #[must_use]
    pub fn not_in(self, set: impl Into<ValueSet>) -> Expr {
        not(self.is_in(set))
    }

    /// Project this term as text.
    #[must_use]
    pub const fn as_text(self) -> Typed<String> {
        self.typed()
    }

    /// Project this term as an integer.
    #[must_use]
    pub const fn as_int(self) -> Typed<i64> {
        self.typed()
    }

    /// Project this term as any [`FromValue`] type.
    #[must_use]
    pub const fn typed<T: FromValue>(self) -> Typed<T> {
        Typed::new(self)
    }
}

impl Expr {
    /// `self && other`
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        and(self, other)
    }

    /// `self || other`
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        or(self, other)
    }
}
