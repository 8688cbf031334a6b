//! Error types for pattern matching, pattern descriptions and conversions.
//!
//! Every failure is surfaced immediately with the offending text attached and,
//! where a pattern was involved, that pattern's machine description. Nothing in
//! this crate retries or coerces; recovery belongs to the caller.
//!
//! ## Error Categories
//!
//! - **Validation**: text does not match its pattern ([`Error::NoMatch`])
//! - **Structure**: a separator split produced the wrong arity ([`Error::Structure`])
//! - **Parsing**: text matched coarsely but does not fit the target type ([`Error::Parse`])
//! - **Descriptions**: the factory could not rebuild a pattern
//!   ([`Error::UnknownTag`], [`Error::MalformedDescription`])
//! - **Construction**: invalid arguments to a pattern constructor
//!   ([`Error::CommasNotAllowed`], [`Error::InvalidRange`])
//!
//! A type with no supported shape never reaches runtime: it simply does not
//! implement [`Convert`](crate::Convert).
//!
//! ## Examples
//!
//! ```rust
//! use pattern_codec::{to_value, Error};
//!
//! let result: Result<Vec<u8>, Error> = to_value("1, 2, 300");
//! assert!(matches!(result, Err(Error::NoMatch { .. })));
//! ```

use crate::Pattern;
use thiserror::Error;

/// Represents all possible errors raised by patterns and conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Text failed to match a pattern
    #[error("The string \"{text}\" does not match the pattern \"{pattern}\"")]
    NoMatch { text: String, pattern: String },

    /// A structural split produced the wrong number of parts
    #[error("Structural mismatch in \"{text}\" for pattern \"{pattern}\": {msg}")]
    Structure {
        text: String,
        pattern: String,
        msg: String,
    },

    /// Text could not be converted to the target type
    #[error("Failed to convert from \"{text}\" to the type \"{target}\"")]
    Parse { text: String, target: &'static str },

    /// No pattern variant owns the leading tag of a description
    #[error("No pattern matches the description \"{0}\"")]
    UnknownTag(String),

    /// A known tag followed by a layout that could not be parsed
    #[error("Malformed {tag} description \"{description}\": {msg}")]
    MalformedDescription {
        tag: &'static str,
        description: String,
        msg: String,
    },

    /// A comma inside a multiple-selection option list
    #[error("A comma was found at position {position} of \"{text}\", but commas are not allowed here")]
    CommasNotAllowed { text: String, position: usize },

    /// Element count bounds with `max < min`
    #[error("The values {lower} and {upper} do not form a valid range")]
    InvalidRange { lower: u32, upper: u32 },

    /// A conversion was handed a pattern of the wrong variant
    #[error("I need a {expected} pattern to convert this type, found \"{found}\"")]
    PatternKind {
        expected: &'static str,
        found: String,
    },
}

impl Error {
    /// Creates a validation error for `text` against `pattern`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pattern_codec::{Error, Integer, Pattern};
    ///
    /// let pattern = Pattern::from(Integer::new(2, 5));
    /// let err = Error::no_match("6", &pattern);
    /// assert!(err.to_string().contains("[Integer range 2...5 (inclusive)]"));
    /// ```
    pub fn no_match(text: &str, pattern: &Pattern) -> Self {
        Error::NoMatch {
            text: text.to_string(),
            pattern: pattern.to_string(),
        }
    }

    /// Creates a structural error, e.g. a map entry without a key/value separator.
    pub fn structure(text: &str, pattern: &Pattern, msg: impl Into<String>) -> Self {
        Error::Structure {
            text: text.to_string(),
            pattern: pattern.to_string(),
            msg: msg.into(),
        }
    }

    /// Creates a parse error naming the Rust type that could not be produced.
    pub fn parse<T: ?Sized>(text: &str) -> Self {
        Error::Parse {
            text: text.to_string(),
            target: std::any::type_name::<T>(),
        }
    }

    /// Creates an error for a description no variant recognizes.
    pub fn unknown_tag(description: &str) -> Self {
        Error::UnknownTag(description.to_string())
    }

    /// Creates an error for a description whose tag is known but whose body is not.
    pub fn malformed(tag: &'static str, description: &str, msg: impl Into<String>) -> Self {
        Error::MalformedDescription {
            tag,
            description: description.to_string(),
            msg: msg.into(),
        }
    }

    /// Creates an error for a container conversion given the wrong pattern variant.
    pub fn pattern_kind(expected: &'static str, found: &Pattern) -> Self {
        Error::PatternKind {
            expected,
            found: found.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
