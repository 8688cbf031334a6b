//! Rebuilding patterns from their machine descriptions.
//!
//! Every machine description starts with a bracketed tag unique to its
//! variant (`[Integer`, `[List`, ...). [`pattern_factory`] reads that tag,
//! hands the description to the owning variant's `create`, and never guesses
//! when no tag matches.
//!
//! Container descriptions nest their sub-pattern descriptions between `<` and
//! `>`, so sub-pattern trees of any depth are recovered from text alone.
//! Angle brackets inside selection options or custom separators of a nested
//! pattern are not supported.
//!
//! ## Examples
//!
//! ```rust
//! use pattern_codec::{pattern_factory, OutputStyle};
//!
//! let description = "[List of <[Integer range 0...9 (inclusive)]> of length 1...3 (inclusive)]";
//! let pattern = pattern_factory(description).unwrap();
//! assert!(pattern.matches("1, 2, 3"));
//! assert_eq!(pattern.description(OutputStyle::Machine), description);
//!
//! assert!(pattern_factory("[Unknown]").is_err());
//! ```

use crate::pattern::{
    Anything, Bool, DirectoryName, Double, FileName, FileType, Integer, List, Map,
    MultipleSelection, Pattern, Selection,
};
use crate::{Error, Result};
use tracing::{debug, trace};

/// Reconstructs the pattern that produced `description`.
///
/// # Errors
///
/// Returns [`Error::UnknownTag`] if no variant owns the leading tag, and
/// [`Error::MalformedDescription`] if the owning variant cannot parse the rest.
pub fn pattern_factory(description: &str) -> Result<Pattern> {
    let tag = leading_tag(description);
    trace!(?tag, description, "dispatching pattern description");

    let pattern = match tag {
        Some(Integer::TAG) => Integer::create(description).map(Pattern::from),
        Some(Double::TAG) => Double::create(description).map(Pattern::from),
        Some(Selection::TAG) => Selection::create(description).map(Pattern::from),
        Some(List::TAG) => List::create(description).map(Pattern::from),
        Some(Map::TAG) => Map::create(description).map(Pattern::from),
        Some(MultipleSelection::TAG) => MultipleSelection::create(description).map(Pattern::from),
        Some(Bool::TAG) => Bool::create(description).map(Pattern::from),
        Some(Anything::TAG) => Anything::create(description).map(Pattern::from),
        Some(FileName::TAG) => FileName::create(description).map(Pattern::from),
        Some(DirectoryName::TAG) => DirectoryName::create(description).map(Pattern::from),
        _ => Err(Error::unknown_tag(description)),
    };

    if let Err(err) = &pattern {
        debug!(%err, "pattern description rejected");
    }
    pattern
}

/// The `[Name` prefix up to the first space or closing bracket.
fn leading_tag(description: &str) -> Option<&str> {
    if !description.starts_with('[') {
        return None;
    }
    let end = description.find(|c: char| c == ' ' || c == ']')?;
    Some(&description[..end])
}

/// The text between the tag and the final `]`.
fn body<'a>(description: &'a str, tag: &'static str) -> Result<&'a str> {
    description
        .strip_prefix(tag)
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| Error::malformed(tag, description, "missing closing bracket"))
}

/// Requires an empty body, for variants described by their tag alone.
fn bare(description: &str, tag: &'static str) -> Result<()> {
    if body(description, tag)?.is_empty() {
        Ok(())
    } else {
        Err(Error::malformed(tag, description, "unexpected text after tag"))
    }
}

/// Splits `text`, which starts just past an opening `<`, at its matching `>`.
fn split_balanced(text: &str) -> Option<(&str, &str)> {
    let mut depth = 1usize;
    for (pos, ch) in text.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    return Some((&text[..pos], &text[pos + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses `A...B` for a range body such as `" range A...B (inclusive)"`.
fn range<'a>(body: &'a str, tag: &'static str, description: &str) -> Result<(&'a str, &'a str)> {
    body.strip_prefix(" range ")
        .and_then(|rest| rest.strip_suffix(" (inclusive)"))
        .and_then(|rest| rest.split_once("..."))
        .ok_or_else(|| Error::malformed(tag, description, "expected `range A...B (inclusive)`"))
}

/// Length bounds and optional separator of a container description.
struct LengthTail {
    min_elements: u32,
    max_elements: u32,
    separator: Option<String>,
}

fn length_tail(rest: &str, tag: &'static str, description: &str) -> Result<LengthTail> {
    if rest.is_empty() {
        return Ok(LengthTail {
            min_elements: 0,
            max_elements: u32::MAX,
            separator: None,
        });
    }
    let malformed = |msg: &str| Error::malformed(tag, description, msg);

    let rest = rest
        .strip_prefix(" of length ")
        .ok_or_else(|| malformed("expected `of length`"))?;
    let (min, rest) = rest
        .split_once("...")
        .ok_or_else(|| malformed("expected `MIN...MAX`"))?;
    let (max, rest) = rest
        .split_once(" (inclusive)")
        .ok_or_else(|| malformed("expected `(inclusive)`"))?;
    let min_elements = min
        .parse::<u32>()
        .map_err(|_| malformed("invalid minimum length"))?;
    let max_elements = max
        .parse::<u32>()
        .map_err(|_| malformed("invalid maximum length"))?;

    let separator = if rest.is_empty() {
        None
    } else {
        let separator = rest
            .strip_prefix(" separated by <")
            .and_then(|sep| sep.strip_suffix('>'))
            .ok_or_else(|| malformed("expected `separated by <SEP>`"))?;
        Some(separator.to_string())
    };

    Ok(LengthTail {
        min_elements,
        max_elements,
        separator,
    })
}

impl Integer {
    /// Parses a description produced by [`Integer::description`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] if the layout does not parse.
    pub fn create(description: &str) -> Result<Self> {
        let body = body(description, Self::TAG)?;
        if body.is_empty() {
            return Ok(Integer::unbounded());
        }
        let (lower, upper) = range(body, Self::TAG, description)?;
        let parse = |text: &str| match text {
            "MIN_INT" => Some(Self::MIN_INT_VALUE),
            "MAX_INT" => Some(Self::MAX_INT_VALUE),
            _ => text.parse::<i128>().ok(),
        };
        match (parse(lower), parse(upper)) {
            (Some(lower), Some(upper)) => Ok(Integer::new(lower, upper)),
            _ => Err(Error::malformed(Self::TAG, description, "invalid integer bound")),
        }
    }
}

impl Double {
    /// Parses a description produced by [`Double::description`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] if the layout does not parse.
    pub fn create(description: &str) -> Result<Self> {
        let body = body(description, Self::TAG)?;
        if body.is_empty() {
            return Ok(Double::unbounded());
        }
        let (lower, upper) = range(body, Self::TAG, description)?;
        let parse = |text: &str| match text {
            "-MAX_DOUBLE" => Some(Self::MIN_DOUBLE_VALUE),
            "MAX_DOUBLE" => Some(Self::MAX_DOUBLE_VALUE),
            _ => text.parse::<f64>().ok(),
        };
        match (parse(lower), parse(upper)) {
            (Some(lower), Some(upper)) => Ok(Double::new(lower, upper)),
            _ => Err(Error::malformed(Self::TAG, description, "invalid double bound")),
        }
    }
}

/// Option list of `[Tag opt1|opt2 ]`.
fn option_sequence<'a>(description: &'a str, tag: &'static str) -> Result<&'a str> {
    body(description, tag)?
        .strip_prefix(' ')
        .and_then(|rest| rest.strip_suffix(' '))
        .ok_or_else(|| Error::malformed(tag, description, "expected ` options ]`"))
}

impl Selection {
    /// Parses a description produced by [`Selection::description`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] if the layout does not parse.
    pub fn create(description: &str) -> Result<Self> {
        option_sequence(description, Self::TAG).map(Selection::new)
    }
}

impl MultipleSelection {
    /// Parses a description produced by [`MultipleSelection::description`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] if the layout does not parse and
    /// [`Error::CommasNotAllowed`] if an option contains a comma.
    pub fn create(description: &str) -> Result<Self> {
        MultipleSelection::new(option_sequence(description, Self::TAG)?)
    }
}

impl List {
    /// Parses a description produced by [`List::description`], rebuilding the
    /// base pattern through [`pattern_factory`].
    ///
    /// # Errors
    ///
    /// Fails if the layout does not parse, if the base pattern cannot be
    /// rebuilt, or if the length range is inverted.
    pub fn create(description: &str) -> Result<Self> {
        let malformed = |msg: &str| Error::malformed(Self::TAG, description, msg);

        let rest = body(description, Self::TAG)?
            .strip_prefix(" of <")
            .ok_or_else(|| malformed("expected `of <PATTERN>`"))?;
        let (base, rest) = split_balanced(rest).ok_or_else(|| malformed("unbalanced `<`"))?;
        let base_pattern = pattern_factory(base)?;
        let tail = length_tail(rest, Self::TAG, description)?;

        List::new(
            base_pattern,
            tail.min_elements,
            tail.max_elements,
            tail.separator.as_deref().unwrap_or(","),
        )
    }
}

impl Map {
    /// Parses a description produced by [`Map::description`], rebuilding the
    /// key and value patterns through [`pattern_factory`].
    ///
    /// # Errors
    ///
    /// Fails if the layout does not parse, if a sub-pattern cannot be rebuilt,
    /// or if the length range is inverted.
    pub fn create(description: &str) -> Result<Self> {
        let malformed = |msg: &str| Error::malformed(Self::TAG, description, msg);

        let rest = body(description, Self::TAG)?
            .strip_prefix(" of <")
            .ok_or_else(|| malformed("expected `of <KEY>`"))?;
        let (key, rest) = split_balanced(rest).ok_or_else(|| malformed("unbalanced `<`"))?;
        let (key_value_separator, rest) = rest
            .split_once('<')
            .ok_or_else(|| malformed("expected `<VALUE>`"))?;
        let (value, rest) = split_balanced(rest).ok_or_else(|| malformed("unbalanced `<`"))?;

        let key_pattern = pattern_factory(key)?;
        let value_pattern = pattern_factory(value)?;
        let tail = length_tail(rest, Self::TAG, description)?;

        Map::new(
            key_pattern,
            value_pattern,
            tail.min_elements,
            tail.max_elements,
            tail.separator.as_deref().unwrap_or(","),
            key_value_separator,
        )
    }
}

impl Bool {
    /// Parses `[Bool]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] on any other text after the tag.
    pub fn create(description: &str) -> Result<Self> {
        bare(description, Self::TAG).map(|()| Bool::new())
    }
}

impl Anything {
    /// Parses `[Anything]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] on any other text after the tag.
    pub fn create(description: &str) -> Result<Self> {
        bare(description, Self::TAG).map(|()| Anything)
    }
}

impl FileName {
    /// Parses `[FileName (Type: input)]` or `[FileName (Type: output)]`.
    /// A bare `[FileName]` is an input file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] for any other file type text.
    pub fn create(description: &str) -> Result<Self> {
        match body(description, Self::TAG)? {
            "" | " (Type: input)" => Ok(FileName::new(FileType::Input)),
            " (Type: output)" => Ok(FileName::new(FileType::Output)),
            _ => Err(Error::malformed(
                Self::TAG,
                description,
                "expected `(Type: input)` or `(Type: output)`",
            )),
        }
    }
}

impl DirectoryName {
    /// Parses `[DirectoryName]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedDescription`] on any other text after the tag.
    pub fn create(description: &str) -> Result<Self> {
        bare(description, Self::TAG).map(|()| DirectoryName)
    }
}
