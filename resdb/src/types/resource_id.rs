//! Resource identifiers.
//!
//! A resource is either a named thing (`"Topi"`, `"SomeOperation"`) or a
//! statement stored in the database. The latter is how reification works:
//! a statement about a statement uses the stored statement's id as its
//! subject.
//!
//! At the textual boundary a statement reference is written `"[<id>]"`.
//! Internally it is kept as [`ResourceId::Statement`], so a subject built
//! from the integer `3` and one built from the text `"[3]"` are the same
//! value once constructed.

use std::fmt;

use super::statement::StatementId;

/// Identifier of the resource a statement talks about.
///
/// # Invariants
///
/// - `Name` never holds text that parses as a canonical `"[<id>]"`
///   reference when built through [`ResourceId::parse`] or `From<&str>`.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// A plain resource name.
    Name(String),
    /// A back-reference to a stored statement.
    Statement(StatementId),
}

impl ResourceId {
    /// Parse boundary text into a resource id.
    ///
    /// `"[n]"` where `n` is a canonical non-negative decimal becomes a
    /// statement reference. Anything else, including `"[007]"` or `"[-1]"`,
    /// stays a plain name so that formatting always reproduces the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use resdb::types::ResourceId;
    /// assert_eq!(ResourceId::parse("[12]"), ResourceId::Statement(12));
    /// assert_eq!(ResourceId::parse("Topi"), ResourceId::Name("Topi".to_owned()));
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        parse_statement_ref(text).map_or_else(|| Self::Name(text.to_owned()), Self::Statement)
    }

    /// The referenced statement id, if this is a reification reference.
    #[must_use]
    pub const fn statement_id(&self) -> Option<StatementId> {
        match self {
            Self::Statement(id) => Some(*id),
            Self::Name(_) => None,
        }
    }

    /// Check whether the boundary text of this id is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        match self {
            Self::Name(name) => name.is_empty(),
            Self::Statement(_) => false,
        }
    }

    /// Render the boundary text of this id.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Create a copy of this id.
    ///
    /// This is used instead of Clone to comply with project policy.
    #[must_use]
    pub fn clone_value(&self) -> Self {
        match self {
            Self::Name(name) => Self::Name(name.as_str().to_owned()),
            Self::Statement(id) => Self::Statement(*id),
        }
    }
}

/// Parse `"[n]"` into `n`, accepting only the canonical decimal form.
pub(crate) fn parse_statement_ref(text: &str) -> Option<StatementId> {
    let digits = text.strip_prefix('[')?.strip_suffix(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse::<StatementId>().ok()
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Statement(id) => write!(f, "[{id}]"),
        }
    }
}

impl From<&str> for ResourceId {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<String> for ResourceId {
    fn from(text: String) -> Self {
        parse_statement_ref(&text).map_or_else(|| Self::Name(text), Self::Statement)
    }
}

impl From<&String> for ResourceId {
    fn from(text: &String) -> Self {
        Self::parse(text)
    }
}

/// Negative ids never name a stored statement, so they become the same
/// plain name that their text form parses to.
impl From<StatementId> for ResourceId {
    fn from(id: StatementId) -> Self {
        if id < 0 {
            Self::Name(format!("[{id}]"))
        } else {
            Self::Statement(id)
        }
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        Self::from(StatementId::from(id))
    }
}
