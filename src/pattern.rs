//! Pattern variants: validators that can describe themselves.
//!
//! This module provides the closed family of patterns and the [`Pattern`] enum
//! that dispatches over them. Every pattern can:
//!
//! - test a string with [`Pattern::matches`]
//! - render itself with [`Pattern::description`] in one of three [`OutputStyle`]s
//! - be copied with `clone()`, which deep-copies owned sub-patterns
//!
//! The [`OutputStyle::Machine`] description is canonical: feeding it to
//! [`pattern_factory`](crate::pattern_factory) rebuilds a pattern that accepts
//! exactly the same strings.
//!
//! ## Bounds
//!
//! [`Integer`] and [`Double`] take inclusive bounds. When the upper bound is
//! smaller than the lower bound, every number is accepted. [`List`] and
//! [`Map`] take an inclusive element count range; `max < min` is rejected at
//! construction.
//!
//! ## Examples
//!
//! ```rust
//! use pattern_codec::{Integer, List, Pattern};
//!
//! let pair = Pattern::from(List::new(Integer::default().into(), 2, 2, ",").unwrap());
//! assert!(pair.matches("1,2"));
//! assert!(!pair.matches("1,2,3"));
//! assert!(!pair.matches("1"));
//! ```

use crate::options::OutputStyle;
use crate::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validator for text plus a reconstructible canonical description.
///
/// Container variants own their sub-patterns outright, so cloning a `List`
/// clones its base pattern as well.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::{pattern_factory, OutputStyle, Pattern, Selection};
///
/// let pattern = Pattern::from(Selection::new("red | blue|black"));
/// let description = pattern.description(OutputStyle::Machine);
/// assert_eq!(description, "[Selection red|blue|black ]");
///
/// let rebuilt = pattern_factory(&description).unwrap();
/// assert_eq!(rebuilt, pattern);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    Integer(Integer),
    Double(Double),
    Selection(Selection),
    List(List),
    Map(Map),
    MultipleSelection(MultipleSelection),
    Bool(Bool),
    Anything(Anything),
    FileName(FileName),
    DirectoryName(DirectoryName),
}

impl Pattern {
    /// Returns `true` if `text` satisfies this pattern.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Pattern::Integer(p) => p.matches(text),
            Pattern::Double(p) => p.matches(text),
            Pattern::Selection(p) => p.matches(text),
            Pattern::List(p) => p.matches(text),
            Pattern::Map(p) => p.matches(text),
            Pattern::MultipleSelection(p) => p.matches(text),
            Pattern::Bool(p) => p.matches(text),
            Pattern::Anything(p) => p.matches(text),
            Pattern::FileName(p) => p.matches(text),
            Pattern::DirectoryName(p) => p.matches(text),
        }
    }

    /// Renders this pattern in the requested style.
    ///
    /// Only [`OutputStyle::Machine`] output is guaranteed to round-trip
    /// through [`pattern_factory`](crate::pattern_factory).
    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match self {
            Pattern::Integer(p) => p.description(style),
            Pattern::Double(p) => p.description(style),
            Pattern::Selection(p) => p.description(style),
            Pattern::List(p) => p.description(style),
            Pattern::Map(p) => p.description(style),
            Pattern::MultipleSelection(p) => p.description(style),
            Pattern::Bool(p) => p.description(style),
            Pattern::Anything(p) => p.description(style),
            Pattern::FileName(p) => p.description(style),
            Pattern::DirectoryName(p) => p.description(style),
        }
    }

    /// Returns the variant name, e.g. `"List"`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Pattern::Integer(_) => "Integer",
            Pattern::Double(_) => "Double",
            Pattern::Selection(_) => "Selection",
            Pattern::List(_) => "List",
            Pattern::Map(_) => "Map",
            Pattern::MultipleSelection(_) => "MultipleSelection",
            Pattern::Bool(_) => "Bool",
            Pattern::Anything(_) => "Anything",
            Pattern::FileName(_) => "FileName",
            Pattern::DirectoryName(_) => "DirectoryName",
        }
    }

    /// Returns the inner [`List`] if this is a list pattern.
    #[inline]
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match self {
            Pattern::List(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the inner [`Map`] if this is a map pattern.
    #[inline]
    #[must_use]
    pub const fn as_map(&self) -> Option<&Map> {
        match self {
            Pattern::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description(OutputStyle::Machine))
    }
}

impl Serialize for Pattern {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let description = String::deserialize(deserializer)?;
        crate::pattern_factory(&description).map_err(de::Error::custom)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Pattern {
                fn from(pattern: $variant) -> Self {
                    Pattern::$variant(pattern)
                }
            }
        )*
    };
}

impl_from_variant!(
    Integer,
    Double,
    Selection,
    List,
    Map,
    MultipleSelection,
    Bool,
    Anything,
    FileName,
    DirectoryName,
);

/// Splits `text` on `separator` and trims every token.
///
/// Trailing whitespace is ignored. Blank text yields no tokens, and a single
/// trailing separator does not produce a trailing empty token.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::split_list;
///
/// assert_eq!(split_list("1, 2 ,3", ","), vec!["1", "2", "3"]);
/// assert_eq!(split_list("1,2,", ","), vec!["1", "2"]);
/// assert_eq!(split_list("1, 2, ", ","), vec!["1", "2"]);
/// assert!(split_list("", ",").is_empty());
/// assert!(split_list("  ", ",").is_empty());
/// ```
#[must_use]
pub fn split_list<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let text = text.trim_end();
    if text.is_empty() {
        return Vec::new();
    }
    let mut tokens: Vec<&str> = text.split(separator).map(str::trim).collect();
    if text.ends_with(separator) {
        tokens.pop();
    }
    tokens
}

/// Collapses spaces around `|` in an option list.
fn normalize_options(sequence: &str) -> String {
    let mut sequence = sequence.to_string();
    while let Some(pos) = sequence.find(" |") {
        sequence.replace_range(pos..pos + 2, "|");
    }
    while let Some(pos) = sequence.find("| ") {
        sequence.replace_range(pos..pos + 2, "|");
    }
    sequence
}

/// Renders a float as shortest round-trip text, switching to exponential
/// notation outside `[1e-5, 1e16)`.
pub(crate) fn format_float<T>(value: T, magnitude: f64) -> String
where
    T: fmt::Display + fmt::LowerExp,
{
    if magnitude == 0.0 || (1e-5..1e16).contains(&magnitude) {
        format!("{value}")
    } else {
        format!("{value:e}")
    }
}

/// Optional sign, digits with an optional fraction, optional exponent.
fn is_float_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start.min(bytes.len())..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut pos = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(pos);
    pos += int_digits;
    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = digits_from(pos);
        pos += frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return false;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = digits_from(pos);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }
    pos == bytes.len()
}

/// Text matching a base-10 integer, optionally within inclusive bounds.
///
/// With `upper < lower` the pattern accepts every integer that fits in an
/// `i128`.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::Integer;
///
/// let digit = Integer::new(2, 5);
/// assert!(digit.matches("3"));
/// assert!(!digit.matches("6"));
///
/// let anything = Integer::new(5, 2);
/// assert!(anything.matches("-1000"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Integer {
    lower_bound: i128,
    upper_bound: i128,
}

impl Integer {
    /// Default lower bound, described as `MIN_INT`.
    pub const MIN_INT_VALUE: i128 = i128::MIN;
    /// Default upper bound, described as `MAX_INT`.
    pub const MAX_INT_VALUE: i128 = i128::MAX;
    pub(crate) const TAG: &'static str = "[Integer";

    #[must_use]
    pub const fn new(lower_bound: i128, upper_bound: i128) -> Self {
        Integer {
            lower_bound,
            upper_bound,
        }
    }

    /// An Integer with inverted bounds, described as the bare `[Integer]`.
    #[must_use]
    pub const fn unbounded() -> Self {
        Integer::new(Self::MAX_INT_VALUE, Self::MIN_INT_VALUE)
    }

    #[must_use]
    pub const fn lower_bound(&self) -> i128 {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_bound(&self) -> i128 {
        self.upper_bound
    }

    /// Returns `false` when the bounds are inverted and therefore ignored.
    #[must_use]
    pub const fn is_bounded(&self) -> bool {
        self.lower_bound <= self.upper_bound
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let Ok(value) = text.trim().parse::<i128>() else {
            return false;
        };
        !self.is_bounded() || (self.lower_bound..=self.upper_bound).contains(&value)
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        if !self.is_bounded() {
            return match style {
                OutputStyle::Machine => format!("{}]", Self::TAG),
                OutputStyle::Text | OutputStyle::LaTeX => "An integer".to_string(),
            };
        }
        let lower = style.escape(&Self::format_bound(self.lower_bound));
        let upper = style.escape(&Self::format_bound(self.upper_bound));
        match style {
            OutputStyle::Machine => {
                format!("{} range {lower}...{upper} (inclusive)]", Self::TAG)
            }
            OutputStyle::Text => format!("An integer n such that {lower} <= n <= {upper}"),
            OutputStyle::LaTeX => {
                format!("An integer $n$ such that ${lower} \\leq n \\leq {upper}$")
            }
        }
    }

    pub(crate) fn format_bound(bound: i128) -> String {
        match bound {
            Self::MIN_INT_VALUE => "MIN_INT".to_string(),
            Self::MAX_INT_VALUE => "MAX_INT".to_string(),
            _ => bound.to_string(),
        }
    }
}

impl Default for Integer {
    fn default() -> Self {
        Integer::new(Self::MIN_INT_VALUE, Self::MAX_INT_VALUE)
    }
}

/// Text matching a floating point literal, optionally within inclusive bounds.
///
/// Accepted syntax is an optional sign, digits with an optional fraction, and
/// an optional exponent. `inf` and `NaN` are not literals.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::Double;
///
/// let unit = Double::new(0.0, 1.0);
/// assert!(unit.matches("0.5"));
/// assert!(unit.matches("1e-3"));
/// assert!(!unit.matches("1.5"));
/// assert!(!unit.matches("0.5x"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Double {
    lower_bound: f64,
    upper_bound: f64,
}

impl Double {
    /// Default lower bound, described as `-MAX_DOUBLE`.
    pub const MIN_DOUBLE_VALUE: f64 = -f64::MAX;
    /// Default upper bound, described as `MAX_DOUBLE`.
    pub const MAX_DOUBLE_VALUE: f64 = f64::MAX;
    pub(crate) const TAG: &'static str = "[Double";

    #[must_use]
    pub const fn new(lower_bound: f64, upper_bound: f64) -> Self {
        Double {
            lower_bound,
            upper_bound,
        }
    }

    /// A Double with inverted bounds, described as the bare `[Double]`.
    #[must_use]
    pub const fn unbounded() -> Self {
        Double::new(Self::MAX_DOUBLE_VALUE, Self::MIN_DOUBLE_VALUE)
    }

    #[must_use]
    pub const fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    pub const fn upper_bound(&self) -> f64 {
        self.upper_bound
    }

    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.lower_bound <= self.upper_bound
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let text = text.trim();
        if !is_float_literal(text) {
            return false;
        }
        let Ok(value) = text.parse::<f64>() else {
            return false;
        };
        !self.is_bounded() || (self.lower_bound <= value && value <= self.upper_bound)
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        if !self.is_bounded() {
            return match style {
                OutputStyle::Machine => format!("{}]", Self::TAG),
                OutputStyle::Text | OutputStyle::LaTeX => {
                    "A floating point number".to_string()
                }
            };
        }
        let lower = style.escape(&Self::format_bound(self.lower_bound));
        let upper = style.escape(&Self::format_bound(self.upper_bound));
        match style {
            OutputStyle::Machine => {
                format!("{} range {lower}...{upper} (inclusive)]", Self::TAG)
            }
            OutputStyle::Text => {
                format!("A floating point number v such that {lower} <= v <= {upper}")
            }
            OutputStyle::LaTeX => format!(
                "A floating point number $v$ such that ${lower} \\leq v \\leq {upper}$"
            ),
        }
    }

    pub(crate) fn format_bound(bound: f64) -> String {
        if bound == Self::MAX_DOUBLE_VALUE {
            "MAX_DOUBLE".to_string()
        } else if bound == Self::MIN_DOUBLE_VALUE {
            "-MAX_DOUBLE".to_string()
        } else {
            format_float(bound, bound.abs())
        }
    }
}

impl Default for Double {
    fn default() -> Self {
        Double::new(Self::MIN_DOUBLE_VALUE, Self::MAX_DOUBLE_VALUE)
    }
}

/// Text equal to exactly one of a `|`-separated set of options.
///
/// Spaces around `|` are removed at construction; matching is exact and
/// case-sensitive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    sequence: String,
}

impl Selection {
    pub(crate) const TAG: &'static str = "[Selection";

    #[must_use]
    pub fn new(sequence: &str) -> Self {
        Selection {
            sequence: normalize_options(sequence),
        }
    }

    /// The normalized option list, e.g. `"red|blue"`.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn options(&self) -> impl Iterator<Item = &str> + '_ {
        self.sequence.split('|')
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.options().any(|option| option == text)
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{} {} ]", Self::TAG, self.sequence),
            OutputStyle::Text | OutputStyle::LaTeX => {
                let options: Vec<_> = self.options().map(|o| style.escape(o)).collect();
                format!("Any one of {}", options.join(", "))
            }
        }
    }
}

/// A separated list whose elements each match a base pattern.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::{Double, List, OutputStyle};
///
/// let list = List::of(Double::default().into()).with_separator(";");
/// assert!(list.matches("1.5; 2; -3e2"));
/// assert!(list.matches(""));
/// assert_eq!(
///     list.description(OutputStyle::Machine),
///     "[List of <[Double range -MAX_DOUBLE...MAX_DOUBLE (inclusive)]> \
///      of length 0...4294967295 (inclusive) separated by <;>]"
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct List {
    base_pattern: Box<Pattern>,
    min_elements: u32,
    max_elements: u32,
    separator: String,
}

impl List {
    /// Default maximum element count.
    pub const MAX_INT_VALUE: u32 = u32::MAX;
    pub(crate) const TAG: &'static str = "[List";

    /// Creates a list pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `max_elements < min_elements`.
    pub fn new(
        base_pattern: Pattern,
        min_elements: u32,
        max_elements: u32,
        separator: &str,
    ) -> Result<Self> {
        if max_elements < min_elements {
            return Err(Error::InvalidRange {
                lower: min_elements,
                upper: max_elements,
            });
        }
        Ok(Self::from_parts(
            base_pattern,
            min_elements,
            max_elements,
            separator,
        ))
    }

    /// A list of any length separated by `","`.
    #[must_use]
    pub fn of(base_pattern: Pattern) -> Self {
        Self::from_parts(base_pattern, 0, Self::MAX_INT_VALUE, ",")
    }

    /// Caller guarantees `min_elements <= max_elements`.
    pub(crate) fn from_parts(
        base_pattern: Pattern,
        min_elements: u32,
        max_elements: u32,
        separator: &str,
    ) -> Self {
        debug_assert!(min_elements <= max_elements);
        List {
            base_pattern: Box::new(base_pattern),
            min_elements,
            max_elements,
            separator: separator.to_string(),
        }
    }

    #[must_use]
    pub fn with_separator(mut self, separator: &str) -> Self {
        self.separator = separator.to_string();
        self
    }

    #[must_use]
    pub fn base_pattern(&self) -> &Pattern {
        &self.base_pattern
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub const fn min_elements(&self) -> u32 {
        self.min_elements
    }

    #[must_use]
    pub const fn max_elements(&self) -> u32 {
        self.max_elements
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let items = split_list(text, &self.separator);
        length_in_range(items.len(), self.min_elements, self.max_elements)
            && items.iter().all(|item| self.base_pattern.matches(item))
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => {
                let mut description = format!(
                    "{} of <{}> of length {}...{} (inclusive)",
                    Self::TAG,
                    self.base_pattern.description(style),
                    self.min_elements,
                    self.max_elements
                );
                if self.separator != "," {
                    description.push_str(&format!(" separated by <{}>", self.separator));
                }
                description.push(']');
                description
            }
            OutputStyle::Text | OutputStyle::LaTeX => format!(
                "A list of {} to {} elements separated by <{}> where each element is [{}]",
                self.min_elements,
                self.max_elements,
                style.escape(&self.separator),
                self.base_pattern.description(style)
            ),
        }
    }
}

/// A separated list of `key<kv-separator>value` entries.
///
/// Every entry must split into exactly two parts on the key/value separator.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::{Integer, Map};
///
/// let map = Map::of(Integer::default().into(), Integer::default().into());
/// assert!(map.matches("1:2, 3:4"));
/// assert!(!map.matches("1:2,3"));
/// assert!(!map.matches("1:2:3"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Map {
    key_pattern: Box<Pattern>,
    value_pattern: Box<Pattern>,
    min_elements: u32,
    max_elements: u32,
    separator: String,
    key_value_separator: String,
}

impl Map {
    /// Default maximum entry count.
    pub const MAX_INT_VALUE: u32 = u32::MAX;
    pub(crate) const TAG: &'static str = "[Map";

    /// Creates a map pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRange`] if `max_elements < min_elements`.
    pub fn new(
        key_pattern: Pattern,
        value_pattern: Pattern,
        min_elements: u32,
        max_elements: u32,
        separator: &str,
        key_value_separator: &str,
    ) -> Result<Self> {
        if max_elements < min_elements {
            return Err(Error::InvalidRange {
                lower: min_elements,
                upper: max_elements,
            });
        }
        Ok(Self::from_parts(
            key_pattern,
            value_pattern,
            min_elements,
            max_elements,
            separator,
            key_value_separator,
        ))
    }

    /// A map of any size with `","` between entries and `":"` inside them.
    #[must_use]
    pub fn of(key_pattern: Pattern, value_pattern: Pattern) -> Self {
        Self::from_parts(key_pattern, value_pattern, 0, Self::MAX_INT_VALUE, ",", ":")
    }

    pub(crate) fn from_parts(
        key_pattern: Pattern,
        value_pattern: Pattern,
        min_elements: u32,
        max_elements: u32,
        separator: &str,
        key_value_separator: &str,
    ) -> Self {
        debug_assert!(min_elements <= max_elements);
        Map {
            key_pattern: Box::new(key_pattern),
            value_pattern: Box::new(value_pattern),
            min_elements,
            max_elements,
            separator: separator.to_string(),
            key_value_separator: key_value_separator.to_string(),
        }
    }

    #[must_use]
    pub fn with_separators(mut self, separator: &str, key_value_separator: &str) -> Self {
        self.separator = separator.to_string();
        self.key_value_separator = key_value_separator.to_string();
        self
    }

    #[must_use]
    pub fn key_pattern(&self) -> &Pattern {
        &self.key_pattern
    }

    #[must_use]
    pub fn value_pattern(&self) -> &Pattern {
        &self.value_pattern
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub fn key_value_separator(&self) -> &str {
        &self.key_value_separator
    }

    #[must_use]
    pub const fn min_elements(&self) -> u32 {
        self.min_elements
    }

    #[must_use]
    pub const fn max_elements(&self) -> u32 {
        self.max_elements
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        let entries = split_list(text, &self.separator);
        if !length_in_range(entries.len(), self.min_elements, self.max_elements) {
            return false;
        }
        entries.iter().all(|entry| {
            match split_list(entry, &self.key_value_separator).as_slice() {
                [key, value] => self.key_pattern.matches(key) && self.value_pattern.matches(value),
                _ => false,
            }
        })
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => {
                let mut description = format!(
                    "{} of <{}>{}<{}> of length {}...{} (inclusive)",
                    Self::TAG,
                    self.key_pattern.description(style),
                    self.key_value_separator,
                    self.value_pattern.description(style),
                    self.min_elements,
                    self.max_elements
                );
                if self.separator != "," {
                    description.push_str(&format!(" separated by <{}>", self.separator));
                }
                description.push(']');
                description
            }
            OutputStyle::Text | OutputStyle::LaTeX => format!(
                "A key-value map of {} to {} elements separated by <{}> \
                 where each key is [{}] and each value is [{}]",
                self.min_elements,
                self.max_elements,
                style.escape(&self.separator),
                self.key_pattern.description(style),
                self.value_pattern.description(style)
            ),
        }
    }
}

fn length_in_range(len: usize, min: u32, max: u32) -> bool {
    u32::try_from(len).map_or(false, |len| (min..=max).contains(&len))
}

/// A comma-separated list of picks from a `|`-separated option set.
///
/// The input may be empty and may repeat options. Options themselves may not
/// contain commas.
///
/// # Examples
///
/// ```rust
/// use pattern_codec::MultipleSelection;
///
/// let formats = MultipleSelection::new("ucd|gmv|eps").unwrap();
/// assert!(formats.matches(""));
/// assert!(formats.matches("gmv, eps"));
/// assert!(formats.matches("eps,eps"));
/// assert!(!formats.matches("eps,xyz"));
///
/// assert!(MultipleSelection::new("a,b|c").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipleSelection {
    sequence: String,
}

impl MultipleSelection {
    pub(crate) const TAG: &'static str = "[MultipleSelection";

    /// Creates a multiple-selection pattern.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommasNotAllowed`] with the byte position of the first
    /// comma in `sequence`.
    pub fn new(sequence: &str) -> Result<Self> {
        if let Some(position) = sequence.find(',') {
            return Err(Error::CommasNotAllowed {
                text: sequence.to_string(),
                position,
            });
        }
        Ok(MultipleSelection {
            sequence: normalize_options(sequence),
        })
    }

    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn options(&self) -> impl Iterator<Item = &str> + '_ {
        self.sequence.split('|')
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        split_list(text, ",")
            .into_iter()
            .all(|pick| self.options().any(|option| option == pick))
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{} {} ]", Self::TAG, self.sequence),
            OutputStyle::Text | OutputStyle::LaTeX => {
                let options: Vec<_> = self.options().map(|o| style.escape(o)).collect();
                format!("A comma-separated list of any of {}", options.join(", "))
            }
        }
    }
}

/// `"true"` or `"false"`, nothing else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bool {
    selection: Selection,
}

impl Bool {
    pub(crate) const TAG: &'static str = "[Bool";

    #[must_use]
    pub fn new() -> Self {
        Bool {
            selection: Selection::new("true|false"),
        }
    }

    /// The underlying two-option selection.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.selection.matches(text)
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{}]", Self::TAG),
            OutputStyle::Text | OutputStyle::LaTeX => {
                "A boolean value (true or false)".to_string()
            }
        }
    }
}

impl Default for Bool {
    fn default() -> Self {
        Self::new()
    }
}

/// Matches every string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Anything;

impl Anything {
    pub(crate) const TAG: &'static str = "[Anything";

    #[must_use]
    pub fn matches(&self, _text: &str) -> bool {
        true
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{}]", Self::TAG),
            OutputStyle::Text | OutputStyle::LaTeX => "Any string".to_string(),
        }
    }
}

/// Whether a file name parameter is read or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FileType {
    #[default]
    Input,
    Output,
}

impl FileType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FileType::Input => "input",
            FileType::Output => "output",
        }
    }
}

/// Matches every string; records that the value names a file.
///
/// The file system is never consulted. The [`FileType`] is only a hint for
/// presentation layers such as file pickers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FileName {
    file_type: FileType,
}

impl FileName {
    pub(crate) const TAG: &'static str = "[FileName";

    #[must_use]
    pub const fn new(file_type: FileType) -> Self {
        FileName { file_type }
    }

    #[must_use]
    pub const fn file_type(&self) -> FileType {
        self.file_type
    }

    #[must_use]
    pub fn matches(&self, _text: &str) -> bool {
        true
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => {
                format!("{} (Type: {})]", Self::TAG, self.file_type.as_str())
            }
            OutputStyle::Text | OutputStyle::LaTeX => {
                format!("an {} filename", self.file_type.as_str())
            }
        }
    }
}

/// Matches every string; records that the value names a directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DirectoryName;

impl DirectoryName {
    pub(crate) const TAG: &'static str = "[DirectoryName";

    #[must_use]
    pub fn matches(&self, _text: &str) -> bool {
        true
    }

    #[must_use]
    pub fn description(&self, style: OutputStyle) -> String {
        match style {
            OutputStyle::Machine => format!("{}]", Self::TAG),
            OutputStyle::Text | OutputStyle::LaTeX => "A directory name".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_bounds_are_inclusive() {
        let p = Integer::new(2, 5);
        assert!(p.matches("2"));
        assert!(p.matches("5"));
        assert!(p.matches(" 3 "));
        assert!(!p.matches("1"));
        assert!(!p.matches("6"));
        assert!(!p.matches("3 abc"));
        assert!(!p.matches("3.0"));
        assert!(!p.matches(""));
    }

    #[test]
    fn test_inverted_integer_bounds_accept_everything() {
        let p = Integer::new(5, 2);
        for text in ["-7", "0", "3", "+42", "170141183460469231731687303715884105727"] {
            assert!(p.matches(text), "{text}");
        }
        assert!(!p.matches("x"));
        assert_eq!(p.description(OutputStyle::Machine), "[Integer]");
    }

    #[test]
    fn test_default_integer_description_uses_sentinels() {
        assert_eq!(
            Integer::default().description(OutputStyle::Machine),
            "[Integer range MIN_INT...MAX_INT (inclusive)]"
        );
        assert_eq!(
            Integer::new(-3, 7).description(OutputStyle::Text),
            "An integer n such that -3 <= n <= 7"
        );
    }

    #[test]
    fn test_float_literal_grammar() {
        for ok in ["1", "-1", "+1.5", ".5", "5.", "1e10", "1.5E-3", "-0.0"] {
            assert!(is_float_literal(ok), "{ok}");
        }
        for bad in ["", ".", "e5", "1e", "1e+", "inf", "NaN", "1.2.3", "--1", "1 2"] {
            assert!(!is_float_literal(bad), "{bad}");
        }
    }

    #[test]
    fn test_double_description() {
        assert_eq!(
            Double::default().description(OutputStyle::Machine),
            "[Double range -MAX_DOUBLE...MAX_DOUBLE (inclusive)]"
        );
        assert_eq!(
            Double::new(0.0, 1.5).description(OutputStyle::Machine),
            "[Double range 0...1.5 (inclusive)]"
        );
        assert_eq!(Double::unbounded().description(OutputStyle::Machine), "[Double]");
    }

    #[test]
    fn test_format_float_switches_notation() {
        assert_eq!(format_float(0.25_f64, 0.25), "0.25");
        assert_eq!(format_float(0.0_f64, 0.0), "0");
        assert_eq!(format_float(1e20_f64, 1e20), "1e20");
        assert_eq!(format_float(-2.5e-7_f64, 2.5e-7), "-2.5e-7");
    }

    #[test]
    fn test_selection_normalizes_spaces_but_matches_exactly() {
        let p = Selection::new("red | blue |black");
        assert_eq!(p.sequence(), "red|blue|black");
        assert!(p.matches("blue"));
        assert!(!p.matches(" blue"));
        assert!(!p.matches("Blue"));
    }

    #[test]
    fn test_bool_is_case_sensitive() {
        let p = Bool::new();
        assert!(p.matches("true"));
        assert!(p.matches("false"));
        assert!(!p.matches("True"));
        assert!(!p.matches("1"));
    }

    #[test]
    fn test_list_counts_elements() {
        let p = List::new(Integer::default().into(), 2, 2, ",").unwrap();
        assert!(p.matches("1,2"));
        assert!(!p.matches("1,2,3"));
        assert!(!p.matches("1"));
        assert!(!p.matches("1,x"));
    }

    #[test]
    fn test_list_empty_text() {
        let any = List::of(Integer::default().into());
        assert!(any.matches(""));
        let at_least_one = List::new(Integer::default().into(), 1, 3, ",").unwrap();
        assert!(!at_least_one.matches(""));
    }

    #[test]
    fn test_list_ignores_trailing_whitespace() {
        let any = List::of(Integer::default().into());
        assert!(any.matches("   "));
        assert!(any.matches("1, 2, "));
        assert_eq!(split_list("1, 2, ", ","), vec!["1", "2"]);
        assert!(split_list(" \t ", ",").is_empty());

        let pair = List::new(Integer::default().into(), 2, 2, ",").unwrap();
        assert!(pair.matches("1, 2, "));
        assert!(!pair.matches("1, 2, 3 "));
    }

    #[test]
    fn test_latex_bounds_are_spaced_alike() {
        assert_eq!(
            Integer::new(1, 4).description(OutputStyle::LaTeX),
            "An integer $n$ such that $1 \\leq n \\leq 4$"
        );
        assert_eq!(
            Double::new(0.0, 0.5).description(OutputStyle::LaTeX),
            "A floating point number $v$ such that $0 \\leq v \\leq 0.5$"
        );
    }

    #[test]
    fn test_list_rejects_inverted_length() {
        let err = List::new(Anything.into(), 3, 1, ",").unwrap_err();
        assert_eq!(err, Error::InvalidRange { lower: 3, upper: 1 });
    }

    #[test]
    fn test_map_requires_two_parts_per_entry() {
        let p = Map::of(Integer::default().into(), Integer::default().into());
        assert!(p.matches("1:2"));
        assert!(p.matches(""));
        assert!(!p.matches("1:2,3"));
        assert!(!p.matches("1:2:3"));
        assert!(!p.matches("a:2"));
    }

    #[test]
    fn test_map_description() {
        let p = Map::of(Integer::new(0, 9).into(), Bool::new().into());
        assert_eq!(
            p.description(OutputStyle::Machine),
            "[Map of <[Integer range 0...9 (inclusive)]>:<[Bool]> of length 0...4294967295 (inclusive)]"
        );
    }

    #[test]
    fn test_multiple_selection_comma_position() {
        let err = MultipleSelection::new("ab|c,d").unwrap_err();
        assert_eq!(
            err,
            Error::CommasNotAllowed {
                text: "ab|c,d".to_string(),
                position: 4
            }
        );
    }

    #[test]
    fn test_intent_markers_match_anything() {
        let output = FileName::new(FileType::Output);
        assert!(output.matches("/does/not/exist"));
        assert_eq!(output.description(OutputStyle::Machine), "[FileName (Type: output)]");
        assert!(DirectoryName.matches(""));
        assert_eq!(DirectoryName.description(OutputStyle::Machine), "[DirectoryName]");
    }

    #[test]
    fn test_clone_owns_sub_patterns() {
        let original = Pattern::from(List::of(Selection::new("a|b").into()));
        let copy = original.clone();
        drop(original);
        assert!(copy.matches("a, b"));
    }

    #[test]
    fn test_latex_description_escapes_separators() {
        let p = List::of(Anything.into()).with_separator("%");
        assert_eq!(
            p.description(OutputStyle::LaTeX),
            "A list of 0 to 4294967295 elements separated by <\\%> where each element is [Any string]"
        );
    }
}
