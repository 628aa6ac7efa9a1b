//! Statements: the facts stored in a resource database.
//!
//! Each statement is composed of a subject, a predicate and an object.
//! The subject always refers to a resource about which the statement is
//! made, the predicate names the described aspect and the object holds
//! its value. The object is either a string literal or a reference to
//! another resource.

use std::fmt;

use super::resource_id::ResourceId;

/// Identifier assigned to a statement by the database.
pub type StatementId = i64;

/// Id of a statement that has not been stored.
pub const UNASSIGNED_ID: StatementId = -1;

/// How the object of a statement is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The statement has no usable object.
    Invalid,
    /// The object is a string literal.
    Literal,
    /// The object references another resource.
    Resource,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => f.write_str("invalid"),
            Self::Literal => f.write_str("literal"),
            Self::Resource => f.write_str("resource"),
        }
    }
}

/// The object of a statement.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Object {
    /// Plain text data.
    Literal(String),
    /// A reference to another resource.
    Resource(ResourceId),
}

impl Object {
    /// The kind tag of this object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match self {
            Self::Literal(_) => ObjectKind::Literal,
            Self::Resource(_) => ObjectKind::Resource,
        }
    }

    /// Boundary text of the object.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Literal(text) => text.as_str().to_owned(),
            Self::Resource(id) => id.to_text(),
        }
    }

    /// Check whether the object text is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Literal(text) => text.is_empty(),
            Self::Resource(id) => id.is_empty(),
        }
    }

    /// Create a copy of this object.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Literal(text) => Self::Literal(text.as_str().to_owned()),
            Self::Resource(id) => Self::Resource(id.clone_value()),
        }
    }
}

/// A statement about a resource.
///
/// Statements are plain values. The database assigns the id on insertion;
/// everything else is fixed at construction.
///
/// # Invariants
///
/// - A statement is valid iff the subject is non-empty, there is an object
///   and the object text is non-empty. The predicate may be empty.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Statement {
    subject: ResourceId,
    predicate: String,
    object: Option<Object>,
    id: StatementId,
}

impl Statement {
    /// Create a new, unstored statement.
    ///
    /// `subject` accepts text (`"[n]"` is read as a statement reference)
    /// or an integer statement id. With [`ObjectKind::Invalid`] the object
    /// text is discarded and the statement is invalid.
    #[must_use]
    pub fn new(
        subject: impl Into<ResourceId>,
        predicate: impl Into<String>,
        object: impl Into<String>,
        kind: ObjectKind,
    ) -> Self {
        let object = match kind {
            ObjectKind::Invalid => None,
            ObjectKind::Literal => Some(Object::Literal(object.into())),
            ObjectKind::Resource => Some(Object::Resource(ResourceId::from(object.into()))),
        };
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
            id: UNASSIGNED_ID,
        }
    }

    /// Create a statement whose object is a string literal.
    #[must_use]
    pub fn literal(
        subject: impl Into<ResourceId>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self::new(subject, predicate, object, ObjectKind::Literal)
    }

    /// Create a statement whose object references another resource.
    #[must_use]
    pub fn resource(
        subject: impl Into<ResourceId>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self::new(subject, predicate, object, ObjectKind::Resource)
    }

    /// Create an invalid statement.
    #[must_use]
    pub const fn invalid() -> Self {
        Self {
            subject: ResourceId::Name(String::new()),
            predicate: String::new(),
            object: None,
            id: UNASSIGNED_ID,
        }
    }

    /// Set a caller-chosen id, e.g. [`UNASSIGNED_ID`].
    #[must_use]
    pub const fn with_id(mut self, id: StatementId) -> Self {
        self.id = id;
        self
    }

    /// See if this is a valid statement.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.subject.is_empty() && self.object.as_ref().is_some_and(|o| !o.is_empty())
    }

    /// The subject resource.
    #[must_use]
    pub const fn subject(&self) -> &ResourceId {
        &self.subject
    }

    /// Boundary text of the subject.
    #[must_use]
    pub fn subject_text(&self) -> String {
        self.subject.to_text()
    }

    /// The predicate.
    #[must_use]
    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// The object, or `None` for an invalid statement.
    #[must_use]
    pub const fn object(&self) -> Option<&Object> {
        self.object.as_ref()
    }

    /// Boundary text of the object. Empty for an invalid statement.
    #[must_use]
    pub fn object_text(&self) -> String {
        self.object.as_ref().map(Object::text).unwrap_or_default()
    }

    /// The kind of the object.
    #[must_use]
    pub const fn kind(&self) -> ObjectKind {
        match &self.object {
            Some(object) => object.kind(),
            None => ObjectKind::Invalid,
        }
    }

    /// The id, or [`UNASSIGNED_ID`] if the statement was not stored.
    #[must_use]
    pub const fn id(&self) -> StatementId {
        self.id
    }

    /// Set the id. Only the database calls this, on insertion.
    pub(crate) const fn set_id(&mut self, id: StatementId) {
        self.id = id;
    }

    /// Create a copy of this statement.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        Self {
            subject: self.subject.clone_value(),
            predicate: self.predicate.as_str().to_owned(),
            object: self.object.as_ref().map(Object::clone_value),
            id: self.id,
        }
    }
}

impl Default for Statement {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {} ", self.id, self.subject, self.predicate)?;
        match &self.object {
            Some(Object::Literal(text)) => write!(f, "\"{text}\""),
            Some(Object::Resource(id)) => write!(f, "<{id}>"),
            None => f.write_str("(invalid)"),
        }
    }
}
